// Framework bootstrap for the backend runtime.

use crate::frameworks::config::{AppConfig, ConfigError, DEFAULT_LOG_FILTER, LogFormat};
use crate::interface_adapters::routes::{self, ENDPOINTS};
use crate::interface_adapters::state::AppState;

use std::{fmt, io, net::SocketAddr};
use tokio::net::TcpListener;

#[derive(Debug)]
pub enum StartupError {
    Config(ConfigError),
    Bind { address: SocketAddr, source: io::Error },
    Serve(io::Error),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::Config(err) => write!(f, "configuration error: {err}"),
            StartupError::Bind { address, source } => {
                write!(f, "failed to bind {address}: {source}")
            }
            StartupError::Serve(err) => write!(f, "server error: {err}"),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::Config(err) => Some(err),
            StartupError::Bind { source, .. } => Some(source),
            StartupError::Serve(err) => Some(err),
        }
    }
}

impl From<ConfigError> for StartupError {
    fn from(err: ConfigError) -> Self {
        StartupError::Config(err)
    }
}

// Install the global subscriber. `RUST_LOG` overrides the default filter.
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match format {
        LogFormat::Json => subscriber.json().with_current_span(true).init(),
        LogFormat::Compact => subscriber.compact().init(),
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

async fn bind_listener(address: SocketAddr) -> Result<TcpListener, StartupError> {
    TcpListener::bind(address).await.map_err(|source| {
        tracing::error!(%address, error = %source, "failed to bind");
        StartupError::Bind { address, source }
    })
}

// Serve the API on an already bound listener until the process exits.
pub async fn run(listener: TcpListener, config: AppConfig) -> io::Result<()> {
    let address = listener.local_addr()?;
    let state = AppState::new(config.cors_policy());
    let app = routes::app(state);

    tracing::info!(%address, allowed_origins = ?config.allowed_origins, "listening");
    for (method, path, description) in ENDPOINTS {
        tracing::info!(method, path, description, "endpoint available");
    }

    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

// Every failure is logged here before it is returned.
pub async fn run_with_config() -> Result<(), StartupError> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env();
    let log_format = config
        .as_ref()
        .map(|config| config.log_format)
        .unwrap_or_else(|_| LogFormat::from_env());
    init_tracing(log_format);

    let config = config.inspect_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
    })?;

    let listener = bind_listener(config.bind_address()).await?;

    run(listener, config).await.map_err(StartupError::Serve)
}
