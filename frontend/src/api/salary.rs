use serde::Serialize;
use serde_json::Value;

use super::{
    client::ApiClient,
    error::ApiError,
    request::ApiRequest,
    types::{PageQuery, PageResult, Salary, SalaryCalculation},
};

#[derive(Serialize)]
struct MonthQuery<'a> {
    month: &'a str,
}

impl ApiClient {
    pub async fn calculate_salary(&self, params: &SalaryCalculation) -> Result<Value, ApiError> {
        self.call(ApiRequest::post("/salary/calculate").query(params)?)
            .await
    }

    pub async fn list_salary_records(
        &self,
        filters: &PageQuery,
    ) -> Result<PageResult<Salary>, ApiError> {
        self.call(ApiRequest::get("/salary/records").query(filters)?)
            .await
    }

    /// `month` is formatted `YYYY-MM`. Resolves to `None` when nothing was
    /// calculated for that month yet.
    pub async fn get_employee_salary(
        &self,
        employee_id: i64,
        month: &str,
    ) -> Result<Option<Salary>, ApiError> {
        let request = ApiRequest::get(format!("/salary/employee/{}", employee_id))
            .query(&MonthQuery { month })?;
        self.call(request).await
    }
}
