use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;

/// One outbound call, described independently of how it is sent.
///
/// `path` is relative to the API base URL. `query` keeps the order in which
/// the caller's record declares its fields; absent (`null`) fields are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query<Q>(mut self, params: &Q) -> Result<Self, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let value =
            serde_json::to_value(params).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.query.extend(query_pairs(value)?);
        Ok(self)
    }

    pub fn json<B>(mut self, body: &B) -> Result<Self, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

fn query_pairs(value: Value) -> Result<Vec<(String, String)>, ApiError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => Ok(map
            .into_iter()
            .filter_map(|(key, value)| render_scalar(value).map(|v| (key, v)))
            .collect()),
        other => Err(ApiError::Encode(format!(
            "query parameters must be a record, got {}",
            other
        ))),
    }
}

fn render_scalar(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        nested => Some(nested.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Filters {
        page_num: u32,
        keyword: Option<String>,
        active: bool,
    }

    #[test]
    fn query_keeps_declaration_order_and_drops_absent_fields() {
        let req = ApiRequest::get("/employees")
            .query(&Filters {
                page_num: 2,
                keyword: None,
                active: true,
            })
            .unwrap();
        assert_eq!(
            req.query,
            vec![
                ("pageNum".to_string(), "2".to_string()),
                ("active".to_string(), "true".to_string()),
            ]
        );
        assert!(req.query.iter().all(|(key, _)| key != "keyword"));
    }

    #[test]
    fn query_rejects_non_record_parameters() {
        let err = ApiRequest::get("/x").query(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, ApiError::Encode(_)));
    }

    #[test]
    fn unit_query_adds_nothing() {
        let req = ApiRequest::get("/employees/all").query(&()).unwrap();
        assert!(req.query.is_empty());
    }

    #[test]
    fn json_sets_body() {
        let req = ApiRequest::post("/ai/chat")
            .json(&json!({ "question": "hi" }))
            .unwrap();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.body, Some(json!({ "question": "hi" })));
    }
}
