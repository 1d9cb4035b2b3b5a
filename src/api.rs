//! JSON request/response contract for conversion front ends.
//!
//! A front end (HTTP handler, CLI) passes the raw request body in and
//! serializes the response back out; nothing here touches a socket.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GenerationConfig;
use crate::generator::generate_go_code;
use crate::parser::parse_sql;

/// Body of a conversion request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertRequest {
    #[serde(default)]
    pub sql: String,
    #[serde(default)]
    pub config: GenerationConfig,
}

/// Body of a conversion response; exactly one field is set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConvertResponse {
    fn code(code: String) -> Self {
        Self {
            code: Some(code),
            error: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            error: Some(message.into()),
        }
    }
}

/// Outcome class of a request, for status-code mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertStatus {
    Ok,
    BadRequest,
}

impl ConvertStatus {
    pub fn http_code(&self) -> u16 {
        match self {
            ConvertStatus::Ok => 200,
            ConvertStatus::BadRequest => 400,
        }
    }
}

/// Decode a JSON request body and run the conversion
pub fn handle_convert_request(body: &str) -> (ConvertStatus, ConvertResponse) {
    match serde_json::from_str::<ConvertRequest>(body) {
        Ok(request) => convert_request(&request),
        Err(e) => (
            ConvertStatus::BadRequest,
            ConvertResponse::error(format!("Invalid JSON: {}", e)),
        ),
    }
}

/// Run the conversion for an already decoded request
pub fn convert_request(request: &ConvertRequest) -> (ConvertStatus, ConvertResponse) {
    if request.sql.trim().is_empty() {
        return (
            ConvertStatus::BadRequest,
            ConvertResponse::error("SQL cannot be empty"),
        );
    }

    match parse_sql(&request.sql) {
        Ok(record) => {
            debug!(table = record.name(), fields = record.fields().len(), "converted request");
            let code = generate_go_code(std::slice::from_ref(&record), &request.config);
            (ConvertStatus::Ok, ConvertResponse::code(code))
        }
        Err(e) => (
            ConvertStatus::BadRequest,
            ConvertResponse::error(format!("SQL parsing error: {}", e)),
        ),
    }
}
