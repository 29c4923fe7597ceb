use crate::http::headers::{names as header_names, Headers};
use crate::http::status::StatusCode;
use crate::http::version::Version;

/// HTTP response structure
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP version
    pub version: Version,

    /// Status code
    pub status: StatusCode,

    /// Response headers
    pub headers: Headers,

    /// Response body
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response
    pub fn new(version: Version, status: StatusCode) -> Self {
        Self {
            version,
            status,
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    /// Create a 200 OK response
    pub fn ok(version: Version) -> Self {
        Self::new(version, StatusCode::OK)
    }

    /// Set Content-Type header
    pub fn set_content_type(&mut self, content_type: &str) {
        self.headers.set(
            header_names::CONTENT_TYPE.to_string(),
            content_type.to_string(),
        );
    }

    /// Set Content-Length header
    pub fn set_content_length(&mut self, length: usize) {
        self.headers.set(
            header_names::CONTENT_LENGTH.to_string(),
            length.to_string(),
        );
    }

    /// Set body and update Content-Length
    pub fn set_body(&mut self, body: Vec<u8>) {
        self.body = body;
        self.set_content_length(self.body.len());
    }

    /// Set body from string
    pub fn set_body_str(&mut self, body: &str) {
        self.set_body(body.as_bytes().to_vec());
    }

    /// Check if response has body
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}
