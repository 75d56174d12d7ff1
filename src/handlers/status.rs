use super::Handler;
use crate::clock::ProcessClock;
use crate::http::{Request, Response};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::error;

/// Reports process uptime as `{"uptime": "<duration>"}`
///
/// Method and body are ignored; any request gets the same answer. On the
/// (practically impossible) serialization failure the error is logged and an
/// empty body is still written rather than a 500.
pub struct StatusHandler {
    clock: ProcessClock,
}

impl StatusHandler {
    pub fn new(clock: ProcessClock) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl Handler for StatusHandler {
    async fn handle(&self, _request: &Request) -> Response {
        let mut fields = BTreeMap::new();
        fields.insert("uptime", format!("{:?}", self.clock.uptime()));

        match serde_json::to_vec(&fields) {
            Ok(body) => Response::json(body),
            Err(e) => {
                error!(error = %e, "Failed to serialize status response");
                Response::json(Vec::new())
            }
        }
    }
}
