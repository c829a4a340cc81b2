use crate::domain::entities::{Acknowledgment, ErrorReport};
use crate::domain::ports::ErrorLog;

pub const ACK_MESSAGE: &str = "Error logged successfully";

// Error reporting use case with an injected log sink.
pub struct LogErrorUseCase<L> {
    pub log: L,
}

impl<L> LogErrorUseCase<L>
where
    L: ErrorLog,
{
    // Reports are accepted as-is: empty fields are valid and nothing is redacted.
    pub fn execute(&self, report: ErrorReport) -> Acknowledgment {
        self.log.record(&report);

        Acknowledgment {
            success: true,
            message: Some(ACK_MESSAGE.to_string()),
        }
    }
}
