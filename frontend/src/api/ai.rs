use serde::Serialize;
use serde_json::Value;

use super::{
    client::ApiClient,
    error::ApiError,
    request::ApiRequest,
    types::{SalaryAnalysis, TurnoverAnalysis},
};

#[derive(Serialize)]
struct ChatBody<'a> {
    question: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TurnoverQuery {
    employee_id: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SalaryAnalysisQuery<'a> {
    department_id: &'a str,
}

#[derive(Serialize)]
struct ReportQuery<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
}

impl ApiClient {
    /// Free-form question to the assistant; resolves to its answer text.
    pub async fn ai_chat(&self, question: &str) -> Result<String, ApiError> {
        self.call(ApiRequest::post("/ai/chat").json(&ChatBody { question })?)
            .await
    }

    pub async fn analyze_turnover(&self, employee_id: i64) -> Result<TurnoverAnalysis, ApiError> {
        self.call(ApiRequest::post("/ai/analyze/turnover").query(&TurnoverQuery { employee_id })?)
            .await
    }

    pub async fn analyze_salary(&self, department_id: &str) -> Result<SalaryAnalysis, ApiError> {
        let request = ApiRequest::post("/ai/analyze/salary")
            .query(&SalaryAnalysisQuery { department_id })?;
        self.call(request).await
    }

    /// `kind` is the report type, e.g. `employee` or `salary`. The report
    /// fields vary by type.
    pub async fn generate_report(&self, kind: &str) -> Result<Value, ApiError> {
        self.call(ApiRequest::post("/ai/report/generate").query(&ReportQuery { kind })?)
            .await
    }
}
