use crate::api::{ApiError, LoginRequest};

pub fn validate_credentials(username: &str, password: &str) -> Result<LoginRequest, ApiError> {
    if username.trim().is_empty() {
        return Err(ApiError::validation("Informe o usuário."));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Informe a senha."));
    }
    Ok(LoginRequest {
        username: username.trim().to_string(),
        password: password.to_string(),
    })
}
