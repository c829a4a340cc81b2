use chrono::{DateTime, Utc};

use crate::domain::entities::ErrorReport;

// Port for the operational log that receives client error reports.
pub trait ErrorLog: Send + Sync {
    fn record(&self, report: &ErrorReport);
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
