use crate::api::{ApiClient, ApiError, Employee, EmployeeUpdate, NewEmployee};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn register_employee(
        &self,
        payload: NewEmployee,
    ) -> Result<Option<Employee>, ApiError> {
        self.client.create_employee(&payload).await
    }

    pub async fn update_employee(
        &self,
        id: i64,
        payload: EmployeeUpdate,
    ) -> Result<Option<Employee>, ApiError> {
        self.client.update_employee(id, &payload).await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_employee(id).await
    }
}
