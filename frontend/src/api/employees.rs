use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, Employee, EmployeeUpdate, NewEmployee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let builder = self.authorized(Method::GET, "/api/employees").await?;
        Ok(self.send_json_optional(builder).await?.unwrap_or_default())
    }

    /// Returns the stored record when the server echoes it back.
    pub async fn create_employee(
        &self,
        payload: &NewEmployee,
    ) -> Result<Option<Employee>, ApiError> {
        let builder = self
            .authorized(Method::POST, "/api/employees").await?
            .json(payload);
        self.send_json_optional(builder).await
    }

    pub async fn update_employee(
        &self,
        id: i64,
        payload: &EmployeeUpdate,
    ) -> Result<Option<Employee>, ApiError> {
        let builder = self
            .authorized(Method::PUT, &format!("/api/employees/{}", id)).await?
            .json(payload);
        self.send_json_optional(builder).await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        let builder = self.authorized(Method::DELETE, &format!("/api/employees/{}", id)).await?;
        self.send_empty(builder).await
    }
}
