use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    state::session::{provide_session, use_session, Role, SessionStore, StoredUser},
    utils::navigation::{self, LOGIN_ROUTE},
};
use leptos::*;

pub const AFTER_LOGIN_ROUTE: &str = "/header";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Usuário ou senha inválidos";

/// Provides the session store and API client to everything below it.
#[component]
pub fn AuthProvider(
    #[prop(optional)] store: Option<SessionStore>,
    children: Children,
) -> impl IntoView {
    let store = store
        .or_else(|| use_context::<SessionStore>())
        .unwrap_or_else(SessionStore::browser);
    provide_session(store.clone());
    if use_context::<ApiClient>().is_none() {
        provide_context(ApiClient::new(store));
    }
    view! { <>{children()}</> }
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(use_session()))
}

/// Logs in and persists the session; the returned role is the one that was stored.
pub async fn login_request(
    client: &ApiClient,
    request: LoginRequest,
) -> Result<Option<Role>, ApiError> {
    let response = client.login(&request).await.map_err(login_error)?;
    let role = response.role();
    if role.is_none() {
        log::warn!("Login for '{}' returned no known role", request.username);
    }
    client
        .session()
        .set_session(&response.token, &StoredUser::new(request.username, role))
        .map_err(|err| ApiError::unknown(err.to_string()))?;
    Ok(role)
}

/// Servers that answer a bad login without a message get the generic one.
fn login_error(err: ApiError) -> ApiError {
    let generic =
        err.details.is_none() && matches!(err.code.as_str(), "UNAUTHORIZED" | "HTTP_ERROR");
    if generic || err.is_forbidden() {
        ApiError {
            error: INVALID_CREDENTIALS_MESSAGE.to_string(),
            ..err
        }
    } else {
        err
    }
}

pub fn end_session(store: &SessionStore) {
    store.clear();
    log::info!("Session cleared");
}

pub fn logout(store: &SessionStore) {
    end_session(store);
    navigation::navigate_to(LOGIN_ROUTE);
}

pub fn use_login_action() -> Action<LoginRequest, Result<Option<Role>, ApiError>> {
    let client = use_api_client();
    create_action(move |request: &LoginRequest| {
        let client = client.clone();
        let request = request.clone();
        async move { login_request(&client, request).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let store = use_session();
    Callback::new(move |_| logout(&store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_status_errors_become_invalid_credentials() {
        let err = login_error(ApiError::unauthorized("Erro 401: Unauthorized"));
        assert_eq!(err.error, INVALID_CREDENTIALS_MESSAGE);
        assert_eq!(err.code, "UNAUTHORIZED");
    }

    #[test]
    fn server_messages_and_connection_errors_are_kept() {
        let err = login_error(
            ApiError::unauthorized("Conta bloqueada")
                .with_details(serde_json::json!({"error": "Conta bloqueada"})),
        );
        assert_eq!(err.error, "Conta bloqueada");

        let err = login_error(ApiError::connection());
        assert_eq!(err.error, crate::api::CONNECTION_ERROR_MESSAGE);
    }

    #[test]
    fn end_session_clears_store() {
        let store = SessionStore::in_memory();
        store
            .set_session("jwt", &StoredUser::new("ana", Some(Role::Admin)))
            .unwrap();
        end_session(&store);
        assert!(!store.snapshot().is_authenticated());
    }
}
