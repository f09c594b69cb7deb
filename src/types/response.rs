use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize)]
pub struct GenericResponse {
    pub message: String,
    pub data: Value,
    pub exit_code: u8,
}

/// Body of every non-2xx answer. `error` is shown to the customer as is;
/// `code` is the stable machine key.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> ErrorResponse {
        ErrorResponse {
            error: error.into(),
            code: code.into(),
            fields: BTreeMap::new(),
        }
    }
}
