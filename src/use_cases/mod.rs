// Use cases layer: the two request workflows of the backend.

pub mod health_check;
pub mod log_error;
#[cfg(test)]
pub(crate) mod test_support;

pub use health_check::{HealthCheckUseCase, SERVICE_NAME};
pub use log_error::{ACK_MESSAGE, LogErrorUseCase};
