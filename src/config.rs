use crate::{DiagError, Result};
use std::net::SocketAddr;
use tracing::info;

/// Port used when `HTTP_PORT` is not set
pub const DEFAULT_PORT: &str = "8080";
/// Route used when `SWAGGER_ENDPOINT` is not set
pub const DEFAULT_DOCUMENT_ROUTE: &str = "/swagger.json";

/// Server configuration resolved once at startup
///
/// Both fields come from environment variables; absence is a normal case
/// handled by defaulting, never an error.
///
/// # Examples
///
/// ```
/// use diagsrv::ServerConfig;
///
/// let config = ServerConfig::from_env();
/// assert!(config.listen_addr.contains(':'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind the listener to, e.g. `0.0.0.0:8080`
    pub listen_addr: String,
    /// Route path at which the static API document is served
    pub document_route: String,
}

impl ServerConfig {
    /// Resolves the configuration from the process environment.
    ///
    /// Reads `HTTP_PORT` (default `8080`) and `SWAGGER_ENDPOINT`
    /// (default `/swagger.json`). Each applied default is logged.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves the configuration through an injected lookup function.
    ///
    /// Exists so tests can exercise defaulting without mutating the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let listen_addr = match lookup("HTTP_PORT") {
            Some(port) => format!("0.0.0.0:{port}"),
            None => {
                info!("HTTP_PORT not defined, defaulting to {DEFAULT_PORT}");
                format!("0.0.0.0:{DEFAULT_PORT}")
            }
        };

        let document_route = match lookup("SWAGGER_ENDPOINT") {
            Some(route) => route,
            None => {
                info!("SWAGGER_ENDPOINT not defined, defaulting to {DEFAULT_DOCUMENT_ROUTE}");
                DEFAULT_DOCUMENT_ROUTE.to_string()
            }
        };

        Self {
            listen_addr,
            document_route,
        }
    }

    /// Parses the listen address into a socket address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().map_err(|e| {
            DiagError::Config(format!("Invalid listen address {}: {e}", self.listen_addr))
        })
    }
}
