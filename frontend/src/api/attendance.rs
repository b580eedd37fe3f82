use serde_json::Value;

use super::{
    client::ApiClient,
    error::ApiError,
    request::ApiRequest,
    types::{
        Attendance, AttendanceStatistics, CheckinParams, CheckoutParams, PageQuery, PageResult,
        StatisticsQuery,
    },
};

impl ApiClient {
    pub async fn check_in(&self, params: &CheckinParams) -> Result<Value, ApiError> {
        self.call(ApiRequest::post("/attendance/checkin").query(params)?)
            .await
    }

    pub async fn check_out(&self, params: &CheckoutParams) -> Result<Value, ApiError> {
        self.call(ApiRequest::post("/attendance/checkout").query(params)?)
            .await
    }

    pub async fn list_attendance_records(
        &self,
        filters: &PageQuery,
    ) -> Result<PageResult<Attendance>, ApiError> {
        self.call(ApiRequest::get("/attendance/records").query(filters)?)
            .await
    }

    pub async fn attendance_statistics(
        &self,
        filters: &StatisticsQuery,
    ) -> Result<AttendanceStatistics, ApiError> {
        self.call(ApiRequest::get("/attendance/statistics").query(filters)?)
            .await
    }
}
