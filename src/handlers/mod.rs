//! Request handlers
//!
//! Each handler is a stateless transformation of an inbound request into a
//! response; nothing persists between requests except the immutable process
//! clock the status handler reads.

pub mod document;
pub mod echo;
pub mod status;

#[cfg(test)]
mod tests;

pub use document::DocumentHandler;
pub use echo::EchoHandler;
pub use status::StatusHandler;

use crate::http::{Request, Response};
use async_trait::async_trait;

/// Common trait for request handlers
///
/// Handlers are shared behind `Arc<dyn Handler>` in the route table and may be
/// invoked concurrently, so they must not hold per-request mutable state.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Transforms one request into a response
    async fn handle(&self, request: &Request) -> Response;
}
