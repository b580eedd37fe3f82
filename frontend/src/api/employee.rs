use serde_json::Value;

use super::{
    client::ApiClient,
    error::ApiError,
    request::ApiRequest,
    types::{Employee, PageQuery, PageResult},
};

impl ApiClient {
    pub async fn list_employees(&self, filters: &PageQuery) -> Result<PageResult<Employee>, ApiError> {
        self.call(ApiRequest::get("/employees").query(filters)?).await
    }

    pub async fn list_all_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.call(ApiRequest::get("/employees/all")).await
    }

    pub async fn get_employee(&self, id: i64) -> Result<Employee, ApiError> {
        self.call(ApiRequest::get(format!("/employees/{}", id))).await
    }

    pub async fn list_department_employees(
        &self,
        department_id: i64,
    ) -> Result<Vec<Employee>, ApiError> {
        self.call(ApiRequest::get(format!(
            "/employees/department/{}",
            department_id
        )))
        .await
    }

    pub async fn create_employee(&self, employee: &Employee) -> Result<Value, ApiError> {
        self.call(ApiRequest::post("/employees").json(employee)?).await
    }

    pub async fn update_employee(&self, id: i64, employee: &Employee) -> Result<Value, ApiError> {
        self.call(ApiRequest::put(format!("/employees/{}", id)).json(employee)?)
            .await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<Value, ApiError> {
        self.call(ApiRequest::delete(format!("/employees/{}", id))).await
    }
}
