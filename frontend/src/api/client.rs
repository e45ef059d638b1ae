use reqwest::{header::HeaderMap, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{api::types::ApiError, config, state::session::SessionStore, utils::navigation};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(session: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into().trim_end_matches('/').to_string()),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Explicit base URL, or the runtime config once it has loaded.
    pub(crate) async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        }
    }

    pub(crate) async fn url(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    fn get_auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let token = self.session.token().ok_or_else(ApiError::not_authenticated)?;
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::unauthorized("Token de autenticação inválido."))?,
        );
        Ok(headers)
    }

    /// Request builder for an authenticated endpoint; fails fast without a token.
    pub(crate) async fn authorized(
        &self,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, ApiError> {
        let headers = self.get_auth_headers()?;
        let url = self.url(path).await;
        Ok(self.client.request(method, url).headers(headers))
    }

    fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("Session rejected by the server, signing out");
            self.session.clear();
            navigation::replace_with(navigation::LOGIN_ROUTE);
        }
    }

    async fn dispatch(&self, builder: RequestBuilder, access: Access) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            log::error!("Request failed: {}", e);
            ApiError::connection()
        })?;
        let status = response.status();
        if access == Access::Session {
            self.handle_unauthorized_status(status);
        }
        if status.is_success() {
            Ok(response)
        } else {
            Err(error_from_response(response).await)
        }
    }

    /// Sends an unauthenticated request; a 401 here is a bad credential, not an expired session.
    pub(crate) async fn send_public_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.dispatch(builder, Access::Public).await?;
        read_body(response)
            .await?
            .ok_or_else(|| ApiError::decode("Resposta vazia do servidor."))
    }

    /// Sends and decodes a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        self.send_json_optional(builder)
            .await?
            .ok_or_else(|| ApiError::decode("Resposta vazia do servidor."))
    }

    /// Like [`send_json`](Self::send_json) but an empty body is `Ok(None)`.
    pub(crate) async fn send_json_optional<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        let response = self.dispatch(builder, Access::Session).await?;
        read_body(response).await
    }

    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.dispatch(builder, Access::Session).await.map(|_| ())
    }
}

/// Whether a 401 means the stored session is no longer valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Session,
    Public,
}

async fn read_body<T: DeserializeOwned>(response: Response) -> Result<Option<T>, ApiError> {
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::decode(format!("Falha ao ler a resposta: {}", e)))?;
    decode_body(&body)
}

pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(body)
        .map(Some)
        .map_err(|e| ApiError::decode(format!("Formato de dados inválido da API: {}", e)))
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error_from_parts(status, &body)
}

/// Prefers a server-supplied `message`/`error`, falling back to the status line.
pub(crate) fn error_from_parts(status: StatusCode, body: &str) -> ApiError {
    if status == StatusCode::FORBIDDEN {
        return ApiError::forbidden();
    }
    let parsed = serde_json::from_str::<Value>(body).ok();
    let server_message = parsed.as_ref().and_then(|value| {
        ["message", "error"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_str))
            .filter(|msg| !msg.trim().is_empty())
            .map(str::to_string)
    });
    let message = server_message.unwrap_or_else(|| {
        format!(
            "Erro {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Erro desconhecido")
        )
    });
    let error = if status == StatusCode::UNAUTHORIZED {
        ApiError::unauthorized(message)
    } else {
        ApiError::http(message)
    };
    match parsed {
        Some(details @ Value::Object(_)) => error.with_details(details),
        _ => error,
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[tokio::test]
    async fn authorized_requires_a_token() {
        let client = ApiClient::new_with_base_url("http://localhost:9", SessionStore::in_memory());
        let err = client.authorized(Method::GET, "/api/visits").await.unwrap_err();
        assert_eq!(err.code, "NOT_AUTHENTICATED");
    }

    #[tokio::test]
    async fn urls_wait_for_the_runtime_config() {
        let client = ApiClient::new(SessionStore::in_memory());
        let base = config::init().await.api_base_url.clone();
        assert_eq!(client.url("/api/visits").await, format!("{}/api/visits", base));

        let pinned = ApiClient::new_with_base_url("http://api.test/", SessionStore::in_memory());
        assert_eq!(pinned.url("/auth/login").await, "http://api.test/auth/login");
    }
}
