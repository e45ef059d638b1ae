use crate::api::{ApiClient, ApiError, Visitor, VisitorPayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct VisitorsRepository {
    client: Rc<ApiClient>,
}

impl VisitorsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_visitors(&self) -> Result<Vec<Visitor>, ApiError> {
        self.client.list_visitors().await
    }

    pub async fn fetch_visitor(&self, id: i64) -> Result<Visitor, ApiError> {
        self.client.get_visitor(id).await
    }

    pub async fn register_visitor(
        &self,
        payload: VisitorPayload,
    ) -> Result<Option<Visitor>, ApiError> {
        self.client.create_visitor(&payload).await
    }

    pub async fn update_visitor(
        &self,
        id: i64,
        payload: VisitorPayload,
    ) -> Result<Option<Visitor>, ApiError> {
        self.client.update_visitor(id, &payload).await
    }
}
