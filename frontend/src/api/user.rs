use serde_json::Value;

use super::{
    client::ApiClient,
    error::ApiError,
    request::ApiRequest,
    types::{PageQuery, PageResult, User, UserForm},
};

impl ApiClient {
    pub async fn list_users(&self, filters: &PageQuery) -> Result<PageResult<User>, ApiError> {
        self.call(ApiRequest::get("/users").query(filters)?).await
    }

    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.call(ApiRequest::get(format!("/users/{}", id))).await
    }

    pub async fn create_user(&self, user: &UserForm) -> Result<Value, ApiError> {
        self.call(ApiRequest::post("/users").json(user)?).await
    }

    pub async fn update_user(&self, id: i64, user: &UserForm) -> Result<Value, ApiError> {
        self.call(ApiRequest::put(format!("/users/{}", id)).json(user)?)
            .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<Value, ApiError> {
        self.call(ApiRequest::delete(format!("/users/{}", id))).await
    }
}
