use bytes::Bytes;
use http::StatusCode;

/// Fixed identifying string sent in the `X-Server` header on every response
pub const SERVER_NAME: &str = "diagsrv/0.1";

/// An outbound HTTP response
///
/// Handlers build one of these and the server encodes it onto the socket.
/// Every response carries the `X-Server` header; the JSON constructor also
/// sets the JSON content type. Connections are closed after one response.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl Response {
    /// A 200 response carrying the given bytes with a JSON content type.
    ///
    /// The bytes are not validated; the document handler relies on this to
    /// serve file content opaquely.
    pub fn json(body: impl Into<Bytes>) -> Self {
        Self {
            status: StatusCode::OK,
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("X-Server".to_string(), SERVER_NAME.to_string()),
            ],
            body: body.into(),
        }
    }

    /// A bodyless response with the given status
    pub fn status_only(status: StatusCode) -> Self {
        Self {
            status,
            headers: vec![("X-Server".to_string(), SERVER_NAME.to_string())],
            body: Bytes::new(),
        }
    }

    /// Response status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response body bytes
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// First header value with the given name, if set
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Encodes the response into wire bytes.
    ///
    /// `Content-Length` and `Connection: close` are always appended; the
    /// server serves exactly one request per connection.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = format!(
            "HTTP/1.1 {} {}\r\n",
            self.status.as_u16(),
            self.status.canonical_reason().unwrap_or("")
        )
        .into_bytes();
        for (name, value) in &self.headers {
            out.extend_from_slice(format!("{name}: {value}\r\n").as_bytes());
        }
        out.extend_from_slice(
            format!("Content-Length: {}\r\nConnection: close\r\n\r\n", self.body.len()).as_bytes(),
        );
        out.extend_from_slice(&self.body);
        out
    }
}
