use chrono::{DateTime, Utc};

// Client-side failure description sent by the chatbot frontend.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorReport {
    pub error: String,
    pub query: String,
    pub timestamp: String,
}

// Reply to a logged error report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgment {
    pub success: bool,
    pub message: Option<String>,
}

// Point-in-time service status, computed per request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub service: &'static str,
}
