use crate::{DiagError, Result};
use bytes::Bytes;
use http::Method;
use std::collections::BTreeMap;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Maximum number of headers accepted in a request head
pub const MAX_HEADERS: usize = 64;

const READ_CHUNK: usize = 4096;

/// A fully read inbound HTTP request
///
/// Everything a handler can observe about a request lives here: the method,
/// the split request target, the header multimap in original order, the raw
/// body bytes and the peer address string as supplied by the transport layer
/// (which may reflect a proxy hop, not a trusted client IP).
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method
    pub method: Method,
    /// Request path without the query string
    pub path: String,
    /// Raw query string, if the request target carried one
    pub query: Option<String>,
    /// Headers in the order they appeared on the wire
    pub headers: Vec<(String, String)>,
    /// Raw request body
    pub body: Bytes,
    /// Peer address as reported by the accepting socket
    pub peer_addr: String,
}

impl Request {
    /// Reads one request from a stream.
    ///
    /// The head is parsed incrementally with httparse; the body is then read
    /// until `Content-Length` bytes are buffered (zero when the header is
    /// absent). A connection closed mid-request yields
    /// [`DiagError::IncompleteRequest`]. No read timeout is applied; a slow
    /// client blocks only its own connection task.
    pub async fn read_from<S>(stream: &mut S, peer_addr: String) -> Result<Request>
    where
        S: AsyncRead + Unpin,
    {
        let mut buffer: Vec<u8> = Vec::with_capacity(READ_CHUNK);
        let mut chunk = [0u8; READ_CHUNK];

        let (head_len, method, target, headers) = loop {
            let mut header_slots = [httparse::EMPTY_HEADER; MAX_HEADERS];
            let mut head = httparse::Request::new(&mut header_slots);
            match head.parse(&buffer) {
                Ok(httparse::Status::Complete(head_len)) => {
                    let method = Method::from_bytes(head.method.unwrap_or("").as_bytes())
                        .map_err(|e| DiagError::HttpParse(format!("invalid method: {e}")))?;
                    let target = head
                        .path
                        .ok_or_else(|| DiagError::HttpParse("missing request target".to_string()))?
                        .to_string();
                    let headers: Vec<(String, String)> = head
                        .headers
                        .iter()
                        .map(|h| {
                            (
                                h.name.to_string(),
                                String::from_utf8_lossy(h.value).into_owned(),
                            )
                        })
                        .collect();
                    break (head_len, method, target, headers);
                }
                Ok(httparse::Status::Partial) => {}
                Err(e) => return Err(DiagError::HttpParse(e.to_string())),
            }

            let n = stream.read(&mut chunk).await?;
            if n == 0 {
                return Err(DiagError::IncompleteRequest);
            }
            buffer.extend_from_slice(&chunk[..n]);
        };

        let content_length = content_length(&headers)?;
        let mut body = buffer.split_off(head_len);
        while body.len() < content_length {
            let n = stream.read(&mut chunk).await?;
            if n == 0 {
                return Err(DiagError::IncompleteRequest);
            }
            body.extend_from_slice(&chunk[..n]);
        }
        body.truncate(content_length);

        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path.to_string(), Some(query.to_string())),
            None => (target, None),
        };

        Ok(Request {
            method,
            path,
            query,
            headers,
            body: Bytes::from(body),
            peer_addr,
        })
    }

    /// Full request URL as sent by the client: the path plus `?query` when present
    pub fn url(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{query}", self.path),
            None => self.path.clone(),
        }
    }

    /// Query arguments with first-occurrence-wins deduplication.
    ///
    /// Later values for a repeated key are silently dropped; this is lossy by
    /// design, not a bug to fix.
    pub fn query_args(&self) -> BTreeMap<String, String> {
        match &self.query {
            Some(query) => parse_query(query),
            None => BTreeMap::new(),
        }
    }

    /// Headers grouped by name, preserving per-key value order
    pub fn header_map(&self) -> BTreeMap<String, Vec<String>> {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, value) in &self.headers {
            map.entry(name.clone()).or_default().push(value.clone());
        }
        map
    }
}

/// Splits a raw query string into a key-value map, keeping the first value
/// for each repeated key. Pairs are split at the first `=`; a pair without
/// `=` maps the whole token to an empty value. No percent-decoding is done;
/// bytes are reflected as received.
pub fn parse_query(query: &str) -> BTreeMap<String, String> {
    let mut args = BTreeMap::new();
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => (pair, ""),
        };
        args.entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }
    args
}

fn content_length(headers: &[(String, String)]) -> Result<usize> {
    for (name, value) in headers {
        if name.eq_ignore_ascii_case("content-length") {
            return value
                .trim()
                .parse()
                .map_err(|e| DiagError::HttpParse(format!("invalid Content-Length: {e}")));
        }
    }
    Ok(0)
}
