use crate::domain::entities::HealthStatus;
use crate::domain::ports::Clock;

pub const SERVICE_NAME: &str = "vehicle-chatbot-backend";
const HEALTHY: &str = "healthy";

// Health check use case; the status is computed fresh on every call.
pub struct HealthCheckUseCase<C> {
    pub clock: C,
}

impl<C> HealthCheckUseCase<C>
where
    C: Clock,
{
    pub fn execute(&self) -> HealthStatus {
        HealthStatus {
            status: HEALTHY,
            timestamp: self.clock.now(),
            service: SERVICE_NAME,
        }
    }
}
