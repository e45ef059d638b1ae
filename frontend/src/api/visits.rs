use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, NewVisit, Visit},
};

impl ApiClient {
    /// `GET /api/visits`; an empty body means no visits.
    pub async fn list_visits(&self) -> Result<Vec<Visit>, ApiError> {
        let builder = self.authorized(Method::GET, "/api/visits").await?;
        Ok(self.send_json_optional(builder).await?.unwrap_or_default())
    }

    pub async fn list_all_visits(&self) -> Result<Vec<Visit>, ApiError> {
        let builder = self.authorized(Method::GET, "/api/visits/all").await?;
        Ok(self.send_json_optional(builder).await?.unwrap_or_default())
    }

    pub async fn create_visit(&self, payload: &NewVisit) -> Result<Option<Visit>, ApiError> {
        let builder = self.authorized(Method::POST, "/api/visits").await?.json(payload);
        self.send_json_optional(builder).await
    }
}
