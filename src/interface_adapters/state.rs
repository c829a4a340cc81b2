use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::ErrorReport;
use crate::domain::ports::{Clock, ErrorLog};
use crate::interface_adapters::cors::CorsPolicy;

// Application state shared by the request dispatcher. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub cors: Arc<CorsPolicy>,
}

impl AppState {
    pub fn new(cors: CorsPolicy) -> Self {
        Self {
            cors: Arc::new(cors),
        }
    }
}

// Error log adapter writing one tracing event per report.
#[derive(Clone, Copy)]
pub struct TracingErrorLog;

impl ErrorLog for TracingErrorLog {
    fn record(&self, report: &ErrorReport) {
        tracing::error!(
            query = %report.query,
            error = %report.error,
            timestamp = %report.timestamp,
            "client error reported"
        );
    }
}

// System clock adapter used by the health check.
#[derive(Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
