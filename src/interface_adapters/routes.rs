use crate::interface_adapters::cors::dispatch;
use crate::interface_adapters::handlers::{health, log_error, method_not_allowed, not_found};
use crate::interface_adapters::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub const LOG_ERROR_PATH: &str = "/api/log-error";
pub const HEALTH_PATH: &str = "/api/health";

// (method, path, description) for the startup banner.
pub const ENDPOINTS: [(&str, &str, &str); 2] = [
    ("POST", LOG_ERROR_PATH, "Log errors from frontend"),
    ("GET", HEALTH_PATH, "Health check"),
];

// Build the HTTP router. The CORS dispatcher is layered last so it also wraps
// the fallback and the method-mismatch responses.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(LOG_ERROR_PATH, post(log_error))
        // axum would serve HEAD through the GET handler; health is GET only.
        .route(HEALTH_PATH, get(health).head(method_not_allowed))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state, dispatch))
}
