use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse},
};

impl ApiClient {
    /// `POST /auth/login`. Persisting the returned session is the caller's job.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.url("/auth/login").await;
        let builder = self.http_client().post(url).json(request);
        self.send_public_json(builder).await
    }
}
