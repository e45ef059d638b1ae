use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, Visitor, VisitorPayload},
};

impl ApiClient {
    pub async fn list_visitors(&self) -> Result<Vec<Visitor>, ApiError> {
        let builder = self.authorized(Method::GET, "/api/visitors/all").await?;
        Ok(self.send_json_optional(builder).await?.unwrap_or_default())
    }

    pub async fn get_visitor(&self, id: i64) -> Result<Visitor, ApiError> {
        let builder = self.authorized(Method::GET, &format!("/api/visitors/{}", id)).await?;
        self.send_json(builder).await
    }

    /// The created visitor, when the server returns it; chaining into a visit needs its id.
    pub async fn create_visitor(
        &self,
        payload: &VisitorPayload,
    ) -> Result<Option<Visitor>, ApiError> {
        let builder = self
            .authorized(Method::POST, "/api/visitors").await?
            .json(payload);
        self.send_json_optional(builder).await
    }

    pub async fn update_visitor(
        &self,
        id: i64,
        payload: &VisitorPayload,
    ) -> Result<Option<Visitor>, ApiError> {
        let builder = self
            .authorized(Method::PUT, &format!("/api/visitors/{}", id)).await?
            .json(payload);
        self.send_json_optional(builder).await
    }
}
