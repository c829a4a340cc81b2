// CORS policy and the request interception that applies it to every response.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::interface_adapters::state::AppState;

// Frontend dev servers allowed to read responses from a browser.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "http://localhost:5174",
    "http://localhost:3000",
];

const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization, X-Requested-With";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsPolicy {
    allowed_origins: Vec<String>,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_ORIGINS.iter().map(|origin| origin.to_string()))
    }
}

impl CorsPolicy {
    pub fn new(allowed_origins: impl IntoIterator<Item = String>) -> Self {
        Self {
            allowed_origins: allowed_origins.into_iter().collect(),
        }
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    // Exact, case-sensitive match. Never a wildcard.
    pub fn is_allowed(&self, origin: &str) -> bool {
        !origin.is_empty() && self.allowed_origins.iter().any(|allowed| allowed == origin)
    }

    // Write the CORS headers for a request carrying `origin`.
    pub fn apply(&self, origin: Option<&HeaderValue>, headers: &mut HeaderMap) {
        let echoed = origin.filter(|value| {
            value
                .to_str()
                .map(|origin| self.is_allowed(origin))
                .unwrap_or(false)
        });
        if let Some(origin) = echoed {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
        }

        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
    }
}

// Wraps the router: preflight requests stop here, everything else is routed
// and gets the CORS headers added on the way out.
pub async fn dispatch(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let origin = request.headers().get(header::ORIGIN).cloned();
    let method = request.method().clone();
    tracing::debug!(
        origin = origin.as_ref().and_then(|value| value.to_str().ok()).unwrap_or(""),
        %method,
        path = %request.uri().path(),
        "cors check"
    );

    let mut response = if method == Method::OPTIONS {
        tracing::debug!(path = %request.uri().path(), "preflight handled");
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    state.cors.apply(origin.as_ref(), response.headers_mut());
    response
}
