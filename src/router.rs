//! Route registration and dispatch.
//!
//! Registration happens exactly once at startup through [`RouterBuilder`];
//! the built [`Router`] is an immutable table shared with the listener task,
//! so dispatch never contends with registration.

use crate::handlers::Handler;
use std::sync::Arc;

/// Builder collecting routes before the server starts
///
/// # Examples
///
/// ```
/// use diagsrv::{ProcessClock, RouterBuilder};
/// use diagsrv::handlers::{EchoHandler, StatusHandler};
///
/// let router = RouterBuilder::new()
///     .route("/status", StatusHandler::new(ProcessClock::start()))
///     .fallback(EchoHandler)
///     .build();
/// assert!(router.dispatch("/status").is_some());
/// ```
#[derive(Default)]
pub struct RouterBuilder {
    routes: Vec<(String, Arc<dyn Handler>)>,
    fallback: Option<Arc<dyn Handler>>,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for an exact path
    pub fn route(mut self, path: impl Into<String>, handler: impl Handler + 'static) -> Self {
        self.routes.push((path.into(), Arc::new(handler)));
        self
    }

    /// Registers the handler used when no exact path matches
    pub fn fallback(mut self, handler: impl Handler + 'static) -> Self {
        self.fallback = Some(Arc::new(handler));
        self
    }

    /// Freezes the table
    pub fn build(self) -> Router {
        Router {
            routes: self.routes,
            fallback: self.fallback,
        }
    }
}

/// Immutable route table consumed by the listener
pub struct Router {
    routes: Vec<(String, Arc<dyn Handler>)>,
    fallback: Option<Arc<dyn Handler>>,
}

impl Router {
    /// Picks the handler for a request path: exact match first, then the
    /// fallback. `None` means no route and no fallback were registered.
    pub fn dispatch(&self, path: &str) -> Option<&dyn Handler> {
        self.routes
            .iter()
            .find(|(route, _)| route == path)
            .map(|(_, handler)| handler.as_ref())
            .or_else(|| self.fallback.as_deref())
    }
}
