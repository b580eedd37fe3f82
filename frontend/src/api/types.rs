use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Paged listing as returned by every `/records` style endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageResult<T> {
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
    #[serde(default)]
    pub total: i64,
}

/// Paging and search filters shared by the listing endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

impl PageQuery {
    pub fn page(page_num: u32, page_size: u32) -> Self {
        Self {
            page_num: Some(page_num),
            page_size: Some(page_size),
            ..Self::default()
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    /// `ACTIVE` or `RESIGNED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub salary: Option<Decimal>,
    #[serde(default, skip_serializing)]
    pub create_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing)]
    pub update_time: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: i64,
    pub employee_id: i64,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub checkin_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub checkout_time: Option<NaiveDateTime>,
    /// `NORMAL`, `LATE`, `EARLY_LEAVE` or `ABSENCE`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub work_hours: Option<String>,
    #[serde(default)]
    pub create_time: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckinParams {
    pub employee_id: i64,
    pub employee_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutParams {
    pub employee_id: i64,
}

/// Month is formatted `YYYY-MM`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsQuery {
    pub employee_id: i64,
    pub month: String,
}

/// Monthly attendance figures for one employee. Only the two counters that
/// feed salary deductions are fixed; anything else the backend adds is kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStatistics {
    #[serde(default)]
    pub late_count: i64,
    #[serde(default)]
    pub absence_count: i64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Salary {
    pub id: i64,
    pub employee_id: i64,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub month: String,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub base_salary: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub performance_salary: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub bonus: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub deduction: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_salary: Option<Decimal>,
    /// `PENDING` or `PAID`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub create_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub update_time: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SalaryCalculation {
    pub employee_id: i64,
    pub month: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplication {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub employee_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    /// `SICK`, `PERSONAL` or `ANNUAL`.
    pub leave_type: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_comment: Option<String>,
    #[serde(default, skip_serializing)]
    pub approval_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing)]
    pub create_time: Option<NaiveDateTime>,
}

/// Decision on a pending leave application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaveApproval {
    /// `APPROVED` or `REJECTED`.
    pub status: String,
    pub approver: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TurnoverAnalysis {
    pub employee_id: i64,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub late_count: i64,
    #[serde(default)]
    pub absence_count: i64,
    #[serde(default)]
    pub risk_score: i64,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub advice: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalaryAnalysis {
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub employee_count: Option<i64>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub avg_salary: Option<Decimal>,
    #[serde(default)]
    pub distribution: Option<Value>,
    /// Set instead of the figures when the department has no employees.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    /// `ADMIN` or `USER`.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub create_time: Option<NaiveDateTime>,
}

/// Body of `POST /users` and `PUT /users/{id}`. A missing password on update
/// leaves the stored one unchanged.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl std::fmt::Debug for UserForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn employee_body_uses_camel_case_and_skips_server_fields() {
        let employee = Employee {
            name: "Li Lei".into(),
            department_id: Some(3),
            hire_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            salary: Some(Decimal::new(850000, 2)),
            create_time: NaiveDate::from_ymd_opt(2024, 3, 1)
                .and_then(|d| d.and_hms_opt(9, 0, 0)),
            ..Employee::default()
        };
        let v = serde_json::to_value(&employee).unwrap();
        assert_eq!(v["name"], json!("Li Lei"));
        assert_eq!(v["departmentId"], json!(3));
        assert_eq!(v["hireDate"], json!("2024-03-01"));
        assert_eq!(v["salary"], json!(8500.0));
        assert!(v.get("id").is_none());
        assert!(v.get("createTime").is_none());
    }

    #[wasm_bindgen_test]
    fn salary_decodes_numeric_amounts() {
        let salary: Salary = serde_json::from_value(json!({
            "id": 7,
            "employeeId": 42,
            "employeeName": "Han Meimei",
            "month": "2024-05",
            "baseSalary": 8000,
            "performanceSalary": 1200.5,
            "bonus": 0,
            "deduction": 100,
            "totalSalary": 9100.5,
            "status": "PENDING",
            "createTime": "2024-05-31T18:00:00"
        }))
        .unwrap();
        assert_eq!(salary.total_salary, Some(Decimal::new(91005, 1)));
        assert_eq!(salary.status.as_deref(), Some("PENDING"));
    }

    #[wasm_bindgen_test]
    fn page_result_tolerates_missing_fields() {
        let page: PageResult<Attendance> = serde_json::from_value(json!({})).unwrap();
        assert!(page.list.is_empty());
        assert_eq!(page.total, 0);
    }

    #[wasm_bindgen_test]
    fn attendance_statistics_keeps_unknown_counters() {
        let stats: AttendanceStatistics = serde_json::from_value(json!({
            "lateCount": 2,
            "normalCount": 19
        }))
        .unwrap();
        assert_eq!(stats.late_count, 2);
        assert_eq!(stats.absence_count, 0);
        assert_eq!(stats.extra.get("normalCount"), Some(&json!(19)));
    }

    #[wasm_bindgen_test]
    fn user_form_omits_unset_fields_and_hides_password() {
        let form = UserForm {
            username: "hr01".into(),
            password: Some("s3cret".into()),
            ..UserForm::default()
        };
        let v = serde_json::to_value(&form).unwrap();
        assert_eq!(v, json!({ "username": "hr01", "password": "s3cret" }));
        assert!(!format!("{:?}", form).contains("s3cret"));
    }

    #[wasm_bindgen_test]
    fn login_request_debug_hides_password() {
        let req = LoginRequest {
            username: "admin".into(),
            password: "secret".into(),
        };
        assert!(!format!("{:?}", req).contains("secret"));
    }
}
