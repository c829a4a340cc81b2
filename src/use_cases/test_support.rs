use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::domain::entities::ErrorReport;
use crate::domain::ports::{Clock, ErrorLog};

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// Error log that keeps every record so tests can inspect what was written.
#[derive(Clone, Default)]
pub(crate) struct RecordingErrorLog {
    records: Arc<Mutex<Vec<ErrorReport>>>,
}

impl RecordingErrorLog {
    pub(crate) fn records(&self) -> Vec<ErrorReport> {
        self.records.lock().expect("records mutex poisoned").clone()
    }
}

impl ErrorLog for RecordingErrorLog {
    fn record(&self, report: &ErrorReport) {
        let mut guard = self.records.lock().expect("records mutex poisoned");
        guard.push(report.clone());
    }
}
