#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Employee, Visit, Visitor};
    use crate::state::session::{Role, SessionStore, StoredUser};

    pub fn signed_in_store(role: Option<Role>) -> SessionStore {
        let store = SessionStore::in_memory();
        store
            .set_session("jwt-test", &StoredUser::new("porteiro", role))
            .expect("memory storage accepts writes");
        store
    }

    pub fn visitor(id: i64, name: &str, sur_name: &str) -> Visitor {
        Visitor {
            id,
            name: name.into(),
            sur_name: sur_name.into(),
            rg: format!("RG{}", id),
            phone: "79999990000".into(),
            photo: None,
        }
    }

    pub fn employee(id: i64, name: &str, role: Role) -> Employee {
        Employee {
            id,
            name: name.into(),
            sur_name: "Santos".into(),
            username: name.to_lowercase(),
            rg: format!("{}00", id),
            phone: "7933330000".into(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: role.as_str().into(),
            credentials_non_expired: true,
            account_non_locked: true,
            account_non_expired: true,
            enabled: true,
        }
    }

    pub fn visit(id: i64, visitor_id: i64, visit_date: &str) -> Visit {
        Visit {
            id,
            visit_reason: "Reunião".into(),
            sector: "Financeiro".into(),
            visit_date: visit_date.into(),
            visitor_id,
            responsible_name: "Carla".into(),
        }
    }
}
