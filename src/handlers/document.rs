use super::Handler;
use crate::http::{Request, Response};
use async_trait::async_trait;
use http::StatusCode;
use std::path::PathBuf;
use tracing::{error, warn};

/// Filesystem locations tried in order for the API document
pub const DOCUMENT_PATHS: [&str; 2] = ["/config/swagger.json", "./swagger.json"];

/// Serves a static API-description document as opaque bytes.
///
/// The configured route only selects this handler for dispatch; the file is
/// always read from the fixed candidate paths, fresh on every request with no
/// caching. The bytes are served with a JSON content type but never validated.
/// When no candidate is readable the request fails fast with HTTP 500.
pub struct DocumentHandler {
    paths: Vec<PathBuf>,
}

impl DocumentHandler {
    /// Handler reading from the given candidate paths, first readable wins
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl Default for DocumentHandler {
    fn default() -> Self {
        Self::with_paths(DOCUMENT_PATHS.iter().map(PathBuf::from).collect())
    }
}

#[async_trait]
impl Handler for DocumentHandler {
    async fn handle(&self, _request: &Request) -> Response {
        for path in &self.paths {
            match tokio::fs::read(path).await {
                Ok(bytes) => return Response::json(bytes),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to read document");
                }
            }
        }
        error!("No readable document at any candidate path");
        Response::status_only(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
