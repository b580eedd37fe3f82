use serde_json::Value;

use super::{
    client::ApiClient,
    error::ApiError,
    request::ApiRequest,
    types::{LoginRequest, LoginResponse, RegisterRequest},
};

impl ApiClient {
    /// Exchanges credentials for a token. Storing the token is up to the
    /// caller (see `state::auth::login_request`).
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.call(ApiRequest::post("/auth/login").json(request)?).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<Value, ApiError> {
        self.call(ApiRequest::post("/auth/register").json(request)?)
            .await
    }
}
