use thiserror::Error;

/// Error types for the diagsrv library
#[derive(Error, Debug)]
pub enum DiagError {
    /// Socket-level errors (bind, accept, read, write)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP parsing errors
    #[error("HTTP parsing error: {0}")]
    HttpParse(String),

    /// Connection closed before a full request was received
    #[error("Incomplete request")]
    IncompleteRequest,

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the diagsrv library
pub type Result<T> = std::result::Result<T, DiagError>;

pub mod clock;
pub mod config;
pub mod env;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;

// Re-export main types for convenience
pub use clock::ProcessClock;
pub use config::ServerConfig;
pub use handlers::{DocumentHandler, EchoHandler, Handler, StatusHandler};
pub use http::{Request, Response};
pub use router::{Router, RouterBuilder};
pub use server::Server;
