//! Serve CLI command (HTTP API).

use crate::Result;
use crate::config::CensorConfig;
#[cfg(feature = "http")]
use crate::services::ServiceContainer;

/// Runs the HTTP API until Ctrl-C. `host` and `port` override the
/// configured listener.
///
/// # Errors
///
/// Returns an error if the services cannot be built or the server fails.
#[cfg(feature = "http")]
pub async fn cmd_serve(
    config: &CensorConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let mut server = config.server.clone();
    if let Some(host) = host {
        server.host = host;
    }
    if let Some(port) = port {
        server.port = port;
    }

    let services = ServiceContainer::from_config(config)?;
    crate::http::serve(&server, services).await
}

/// Runs the HTTP API (feature not enabled).
///
/// # Errors
///
/// Always returns [`crate::Error::FeatureNotEnabled`].
#[cfg(not(feature = "http"))]
#[allow(clippy::unused_async)]
pub async fn cmd_serve(
    _config: &CensorConfig,
    _host: Option<String>,
    _port: Option<u16>,
) -> Result<()> {
    Err(crate::Error::FeatureNotEnabled("http".to_string()))
}
