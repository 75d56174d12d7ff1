use super::Handler;
use crate::env;
use crate::http::{Request, Response};
use async_trait::async_trait;
use http::StatusCode;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use tracing::error;

/// JSON reflection of an inbound request's metadata and body
///
/// Fully derived from the triggering request and the process environment;
/// built fresh per request and dropped after serialization.
#[derive(Debug, Serialize)]
struct EchoDocument<'a> {
    /// Header multimap, values in original wire order
    headers: BTreeMap<String, Vec<String>>,
    path: &'a str,
    /// Query arguments, first occurrence wins on duplicate keys
    arguments: BTreeMap<String, String>,
    method: &'a str,
    /// Raw peer address as supplied by the transport, not a trusted client IP
    origin: &'a str,
    url: String,
    body: Cow<'a, str>,
    env_vars: BTreeMap<String, String>,
}

/// Reflects every request back to the caller as a JSON document.
///
/// Nothing is validated or filtered: headers, query, body and the full
/// process environment are reflected as received. Reflecting the environment
/// is inherited diagnostic behavior; do not expose this server to callers who
/// must not see it.
pub struct EchoHandler;

#[async_trait]
impl Handler for EchoHandler {
    async fn handle(&self, request: &Request) -> Response {
        let document = EchoDocument {
            headers: request.header_map(),
            path: &request.path,
            arguments: request.query_args(),
            method: request.method.as_str(),
            origin: &request.peer_addr,
            url: request.url(),
            body: String::from_utf8_lossy(&request.body),
            env_vars: env::snapshot(),
        };

        match serde_json::to_vec(&document) {
            Ok(body) => Response::json(body),
            Err(e) => {
                error!(error = %e, "Failed to serialize echo document");
                Response::status_only(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}
