// Domain layer: the messages exchanged with the frontend and the ports they flow through.

pub mod entities;
pub mod ports;

pub use entities::{Acknowledgment, ErrorReport, HealthStatus};
