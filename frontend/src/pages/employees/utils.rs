use crate::api::{ApiError, Employee, EmployeeUpdate, NewEmployee};

pub const REGISTERED_MESSAGE: &str = "Funcionário cadastrado com sucesso!";
pub const UPDATED_MESSAGE: &str = "Funcionário atualizado com sucesso!";

/// Case-insensitive match over every column shown in the list, role label included.
pub fn filter_employees(employees: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return employees.to_vec();
    }
    employees
        .iter()
        .filter(|employee| {
            [
                employee.name.as_str(),
                employee.sur_name.as_str(),
                employee.username.as_str(),
                employee.rg.as_str(),
                employee.phone.as_str(),
                employee.email.as_str(),
                employee.role_label(),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

pub fn delete_prompt(employee: &Employee) -> String {
    format!(
        "Tem certeza de que deseja excluir o funcionário {}?",
        employee.full_name()
    )
}

fn required(value: &str, message: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::validation(message))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub name: String,
    pub sur_name: String,
    pub rg: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

impl EmployeeFormState {
    pub fn to_request(&self) -> Result<NewEmployee, ApiError> {
        required(&self.name, "Nome não pode ser vazio.")?;
        required(&self.sur_name, "Sobrenome não pode ser vazio.")?;
        required(&self.email, "E-mail não pode ser vazio.")?;
        if !self.email.contains('@') {
            return Err(ApiError::validation("Informe um e-mail válido."));
        }
        if self.password.is_empty() {
            return Err(ApiError::validation("Senha não pode ser vazia."));
        }
        Ok(NewEmployee {
            name: self.name.trim().to_string(),
            sur_name: self.sur_name.trim().to_string(),
            rg: self.rg.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountFlag {
    CredentialsNonExpired,
    AccountNonLocked,
    AccountNonExpired,
    Enabled,
}

impl AccountFlag {
    pub const ALL: [AccountFlag; 4] = [
        AccountFlag::CredentialsNonExpired,
        AccountFlag::AccountNonLocked,
        AccountFlag::AccountNonExpired,
        AccountFlag::Enabled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AccountFlag::CredentialsNonExpired => "Credenciais Não Expiradas",
            AccountFlag::AccountNonLocked => "Conta Não Bloqueada",
            AccountFlag::AccountNonExpired => "Conta Não Expirada",
            AccountFlag::Enabled => "Ativo",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            AccountFlag::CredentialsNonExpired => "credentialsNonExpired",
            AccountFlag::AccountNonLocked => "accountNonLocked",
            AccountFlag::AccountNonExpired => "accountNonExpired",
            AccountFlag::Enabled => "enabled",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeEditState {
    pub name: String,
    pub sur_name: String,
    pub username: String,
    /// Blank keeps the current password.
    pub password: String,
    pub credentials_non_expired: bool,
    pub account_non_locked: bool,
    pub account_non_expired: bool,
    pub enabled: bool,
}

impl EmployeeEditState {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            sur_name: employee.sur_name.clone(),
            username: employee.username.clone(),
            password: String::new(),
            credentials_non_expired: employee.credentials_non_expired,
            account_non_locked: employee.account_non_locked,
            account_non_expired: employee.account_non_expired,
            enabled: employee.enabled,
        }
    }

    pub fn flag(&self, flag: AccountFlag) -> bool {
        match flag {
            AccountFlag::CredentialsNonExpired => self.credentials_non_expired,
            AccountFlag::AccountNonLocked => self.account_non_locked,
            AccountFlag::AccountNonExpired => self.account_non_expired,
            AccountFlag::Enabled => self.enabled,
        }
    }

    pub fn set_flag(&mut self, flag: AccountFlag, value: bool) {
        match flag {
            AccountFlag::CredentialsNonExpired => self.credentials_non_expired = value,
            AccountFlag::AccountNonLocked => self.account_non_locked = value,
            AccountFlag::AccountNonExpired => self.account_non_expired = value,
            AccountFlag::Enabled => self.enabled = value,
        }
    }

    pub fn to_request(&self) -> Result<EmployeeUpdate, ApiError> {
        required(&self.name, "Nome não pode ser vazio.")?;
        required(&self.sur_name, "Sobrenome não pode ser vazio.")?;
        required(&self.username, "Username não pode ser vazio.")?;
        Ok(EmployeeUpdate {
            name: self.name.trim().to_string(),
            sur_name: self.sur_name.trim().to_string(),
            username: self.username.trim().to_string(),
            password: Some(self.password.clone()).filter(|p| !p.is_empty()),
            credentials_non_expired: self.credentials_non_expired,
            account_non_locked: self.account_non_locked,
            account_non_expired: self.account_non_expired,
            enabled: self.enabled,
        })
    }

    /// The employee as it should look after a successful update the server did not echo.
    pub fn apply_to(&self, employee: &Employee) -> Employee {
        Employee {
            name: self.name.trim().to_string(),
            sur_name: self.sur_name.trim().to_string(),
            username: self.username.trim().to_string(),
            credentials_non_expired: self.credentials_non_expired,
            account_non_locked: self.account_non_locked,
            account_non_expired: self.account_non_expired,
            enabled: self.enabled,
            ..employee.clone()
        }
    }
}
