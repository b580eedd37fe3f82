use serde_json::Value;

use super::{
    client::ApiClient,
    error::ApiError,
    request::ApiRequest,
    types::{LeaveApplication, LeaveApproval, PageQuery, PageResult},
};

impl ApiClient {
    pub async fn apply_leave(&self, application: &LeaveApplication) -> Result<Value, ApiError> {
        self.call(ApiRequest::post("/leave/apply").json(application)?)
            .await
    }

    pub async fn approve_leave(&self, id: i64, decision: &LeaveApproval) -> Result<Value, ApiError> {
        self.call(ApiRequest::put(format!("/leave/{}/approve", id)).query(decision)?)
            .await
    }

    pub async fn list_leave_records(
        &self,
        filters: &PageQuery,
    ) -> Result<PageResult<LeaveApplication>, ApiError> {
        self.call(ApiRequest::get("/leave/records").query(filters)?)
            .await
    }

    pub async fn list_employee_leave(
        &self,
        employee_id: i64,
    ) -> Result<Vec<LeaveApplication>, ApiError> {
        self.call(ApiRequest::get(format!("/leave/employee/{}", employee_id)))
            .await
    }
}
