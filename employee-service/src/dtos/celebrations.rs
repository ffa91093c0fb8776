use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw request body. Values stay untyped so that strings, floats and
/// falsy values can be told apart during validation.
#[derive(Debug, Default, Deserialize)]
pub struct CelebrationsRequest {
    #[serde(default)]
    pub month: Option<Value>,
    #[serde(default)]
    pub year: Option<Value>,
}

impl CelebrationsRequest {
    /// Lenient body decoding: anything that is not a JSON object carries
    /// no parameters.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthdayEntry {
    pub employee_id: String,
    pub employee_name: String,
    pub date_of_birth: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnniversaryEntry {
    pub employee_id: String,
    pub employee_name: String,
    pub hire_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelebrationsResponse {
    pub upcoming_birthday: Vec<BirthdayEntry>,
    pub upcoming_anniversaries: Vec<AnniversaryEntry>,
}
