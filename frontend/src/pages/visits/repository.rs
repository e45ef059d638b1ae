use std::{collections::HashMap, rc::Rc};

use futures::future::join_all;

use super::utils::{build_rows, unique_visitor_ids, VisitRow};
use crate::api::{ApiClient, ApiError, NewVisit, Visit};

#[derive(Clone)]
pub struct VisitsRepository {
    client: Rc<ApiClient>,
}

impl VisitsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_visits(&self) -> Result<Vec<Visit>, ApiError> {
        self.client.list_visits().await
    }

    /// Looks up each visitor once; ids that fail to resolve are left out.
    pub async fn visitor_names(&self, visits: &[Visit]) -> HashMap<i64, String> {
        let ids = unique_visitor_ids(visits);
        let lookups = ids.iter().map(|id| self.client.get_visitor(*id));
        ids.iter()
            .zip(join_all(lookups).await)
            .filter_map(|(id, result)| match result {
                Ok(visitor) => Some((*id, visitor.full_name())),
                Err(err) => {
                    log::warn!("Could not resolve visitor {}: {}", id, err);
                    None
                }
            })
            .collect()
    }

    pub async fn fetch_rows(&self) -> Result<Vec<VisitRow>, ApiError> {
        let visits = self.fetch_visits().await?;
        let names = self.visitor_names(&visits).await;
        Ok(build_rows(visits, &names))
    }

    pub async fn schedule_visit(&self, payload: NewVisit) -> Result<Option<Visit>, ApiError> {
        self.client.create_visit(&payload).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::visits::utils::VISITOR_NOT_FOUND;
    use crate::test_support::helpers::signed_in_store;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repository(server: &MockServer) -> VisitsRepository {
        VisitsRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
            signed_in_store(None),
        )))
    }

    #[tokio::test]
    async fn fetch_rows_resolves_each_visitor_once() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/visits");
                then.status(200).json_body(json!([
                    {"id": 1, "visitReason": "Reunião", "sector": "Financeiro",
                     "visitDate": "2025-03-01T14:05:00-03:00", "visitorId": 7,
                     "responsibleName": "Carla"},
                    {"id": 2, "visitDate": "2025-03-02T09:00:00-03:00", "visitor": {"id": 7}},
                    {"id": 3, "visitDate": "2025-03-02T10:00:00-03:00", "visitorId": 9}
                ]));
            })
            .await;
        let maria = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/visitors/7");
                then.status(200)
                    .json_body(json!({"id": 7, "name": "Maria", "surName": "Oliveira"}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/visitors/9");
                then.status(404);
            })
            .await;

        let rows = repository(&server).fetch_rows().await.unwrap();

        maria.assert_hits_async(1).await;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].visitor_name, "Maria Oliveira");
        assert_eq!(rows[1].visitor_name, "Maria Oliveira");
        assert_eq!(rows[1].visit.sector, "Setor não informado");
        assert_eq!(rows[2].visitor_name, VISITOR_NOT_FOUND);
    }

    #[tokio::test]
    async fn fetch_rows_accepts_empty_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/visits");
                then.status(200).body("");
            })
            .await;

        let rows = repository(&server).fetch_rows().await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn schedule_visit_posts_camel_case_payload() {
        let server = MockServer::start_async().await;
        let created = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/visits")
                    .header("Authorization", "Bearer jwt-test")
                    .json_body(json!({
                        "visitReason": "Reunião",
                        "sector": "Financeiro",
                        "visitDate": "2025-03-01T14:05:00.000-03:00",
                        "visitorId": 7,
                        "responsibleName": "Carla"
                    }));
                then.status(201).body("");
            })
            .await;

        let result = repository(&server)
            .schedule_visit(NewVisit {
                visit_reason: "Reunião".into(),
                sector: "Financeiro".into(),
                visit_date: "2025-03-01T14:05:00.000-03:00".into(),
                visitor_id: 7,
                responsible_name: "Carla".into(),
            })
            .await
            .unwrap();

        created.assert_async().await;
        assert!(result.is_none());
    }
}
