use crate::common::constants::CRLF;
use crate::common::error::{ListenerError, Result};
use crate::http::response::Response;
use std::io::Write;

/// Serialize HTTP response to bytes
pub struct ResponseSerializer;

impl ResponseSerializer {
    /// Write status line to buffer
    fn write_status_line(buffer: &mut Vec<u8>, response: &Response) -> Result<()> {
        write!(
            buffer,
            "{} {} {}{}",
            response.version,
            response.status,
            response.status.reason_phrase(),
            CRLF
        )
        .map_err(|e| ListenerError::ResponseWrite(format!("Failed to write status line: {}", e)))?;
        Ok(())
    }

    /// Serialize the status line, headers, and the blank separator line.
    ///
    /// Kept separate from the body so the sender can flush the header
    /// block before writing the page.
    pub fn serialize_head(response: &Response) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();

        Self::write_status_line(&mut buffer, response)?;

        let headers_str = response.headers.to_string();
        buffer.extend_from_slice(headers_str.as_bytes());

        // Empty line after headers
        buffer.extend_from_slice(CRLF.as_bytes());

        Ok(buffer)
    }

    /// Serialize the complete response to bytes
    pub fn serialize(response: &Response) -> Result<Vec<u8>> {
        let mut buffer = Self::serialize_head(response)?;

        if response.has_body() {
            buffer.extend_from_slice(&response.body);
        }

        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::version::Version;

    #[test]
    fn test_serialize_simple_response() {
        let mut response = Response::ok(Version::Http10);
        response.set_content_type("text/html");
        response.set_body_str("Hello");
        let bytes = ResponseSerializer::serialize(&response).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("HTTP/1.0 200 OK\r\n"));
        assert!(text.contains("Content-Type: text/html\r\n"));
        assert!(text.ends_with("\r\n\r\nHello"));
    }

    #[test]
    fn test_serialize_head_ends_with_blank_line() {
        let mut response = Response::ok(Version::Http10);
        response.set_body_str("ignored by head");
        let head = ResponseSerializer::serialize_head(&response).unwrap();
        let text = String::from_utf8(head).unwrap();
        assert!(text.ends_with("\r\n\r\n"));
        assert!(!text.contains("ignored"));
    }
}
