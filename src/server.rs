//! Server lifecycle: bind, accept loop, per-connection dispatch.
//!
//! The listener runs on its own task and reports at most one fatal error back
//! to the main control flow through a oneshot channel. There is no restart,
//! retry or graceful drain; per-request failures are answered on the wire and
//! logged, never fatal.

use crate::http::{Request, Response};
use crate::router::Router;
use crate::{DiagError, Result};
use http::StatusCode;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tracing::{error, info, warn, Instrument};

/// Diagnostic HTTP server
///
/// Binding is separate from listening so a bind failure surfaces synchronously
/// at startup; once [`spawn`](Server::spawn) is called, the first fatal accept
/// error settles the returned channel and the listener task ends.
pub struct Server {
    listener: TcpListener,
    router: Arc<Router>,
}

impl Server {
    /// Binds the listener and attaches the route table
    pub async fn bind(addr: SocketAddr, router: Arc<Router>) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, router })
    }

    /// Address the listener is actually bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Starts the accept loop on its own task.
    ///
    /// The returned receiver settles exactly once, with the first fatal
    /// listener error. It never settles while the server is healthy.
    pub fn spawn(self) -> oneshot::Receiver<DiagError> {
        let (failure_tx, failure_rx) = oneshot::channel();
        tokio::spawn(async move {
            if let Err(e) = self.listen().await {
                let _ = failure_tx.send(e);
            }
        });
        failure_rx
    }

    async fn listen(self) -> Result<()> {
        info!(address = %self.listener.local_addr()?, "HTTP server listening");

        loop {
            let (stream, peer) = self.listener.accept().await?;
            let router = Arc::clone(&self.router);
            let span = tracing::info_span!("connection", %peer);
            tokio::spawn(async move {
                if let Err(e) = handle_connection(stream, peer, router).instrument(span).await {
                    warn!(%peer, error = %e, "Error handling connection");
                }
            });
        }
    }
}

/// Serves exactly one request on an accepted connection.
///
/// A malformed or truncated request is answered with 400; dispatch goes
/// through the immutable route table; the connection is closed after the
/// response is written.
async fn handle_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    router: Arc<Router>,
) -> Result<()> {
    let response = match Request::read_from(&mut stream, peer.to_string()).await {
        Ok(request) => {
            info!(method = %request.method, path = %request.path, "Dispatching request");
            match router.dispatch(&request.path) {
                Some(handler) => handler.handle(&request).await,
                None => {
                    error!(path = %request.path, "No route matched");
                    Response::status_only(StatusCode::NOT_FOUND)
                }
            }
        }
        Err(e @ (DiagError::HttpParse(_) | DiagError::IncompleteRequest)) => {
            warn!(error = %e, "Malformed request");
            Response::status_only(StatusCode::BAD_REQUEST)
        }
        Err(e) => return Err(e),
    };

    stream.write_all(&response.to_bytes()).await?;
    stream.shutdown().await?;
    Ok(())
}
