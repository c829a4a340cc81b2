use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::entities::{Acknowledgment, ErrorReport, HealthStatus};

const REPORT_FIELDS: [&str; 3] = ["error", "query", "timestamp"];

// Request payload for an error report. Absent fields decode as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ErrorReportRequest {
    pub error: String,
    pub query: String,
    pub timestamp: String,
}

impl From<ErrorReportRequest> for ErrorReport {
    fn from(request: ErrorReportRequest) -> Self {
        Self {
            error: request.error,
            query: request.query,
            timestamp: request.timestamp,
        }
    }
}

// Response payload acknowledging an error report.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Acknowledgment> for AckResponse {
    fn from(ack: Acknowledgment) -> Self {
        Self {
            success: ack.success,
            message: ack.message,
        }
    }
}

// Response payload for the health check.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    // RFC 3339, UTC with a trailing `Z`, shortest exact fractional seconds.
    pub timestamp: String,
    pub service: String,
}

impl From<HealthStatus> for HealthResponse {
    fn from(status: HealthStatus) -> Self {
        Self {
            status: status.status.to_string(),
            timestamp: format_instant(status.timestamp),
            service: status.service.to_string(),
        }
    }
}

// RFC 3339 in UTC with trailing zeros of the fraction dropped: `.25Z`, not `.250Z`.
fn format_instant(instant: DateTime<Utc>) -> String {
    let formatted = instant.format("%Y-%m-%dT%H:%M:%S%.9f").to_string();
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}Z")
}

// Decode the first JSON value in the body; trailing bytes are ignored.
//
// Only an object (or a literal `null`, read as an empty report) is accepted.
// Keys match case-insensitively with an exact match taking precedence, and a
// `null` field leaves that field empty.
pub fn decode_error_report(body: &[u8]) -> Result<ErrorReportRequest, serde_json::Error> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Value>();
    let value = values
        .next()
        .ok_or_else(|| serde_json::Error::custom("empty request body"))??;

    let fields = match value {
        Value::Null => return Ok(ErrorReportRequest::default()),
        Value::Object(fields) => fields,
        _ => return Err(serde_json::Error::custom("error report must be a JSON object")),
    };

    let mut matched = Map::new();
    for name in REPORT_FIELDS {
        let value = fields.get(name).or_else(|| {
            fields
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        });
        if let Some(value) = value.filter(|value| !value.is_null()) {
            matched.insert(name.to_string(), value.clone());
        }
    }

    serde_json::from_value(Value::Object(matched))
}
