use crate::http::method::Method;
use crate::http::request_line::RequestLine;
use crate::http::response::Response;
use crate::http::version::Version;

/// Extracts the authorization code from redirect request lines and
/// renders the acknowledgment page shown in the browser.
pub struct RedirectHandler;

impl RedirectHandler {
    /// Try to read an authorization code out of one header line.
    ///
    /// Only a request line of the form `GET /?...code=<value>... HTTP/x`
    /// counts: the redirect URI registered with the authorization server
    /// points at the root path. Header lines and other targets yield None.
    pub fn extract_code(line: &str) -> Option<String> {
        let request_line = RequestLine::parse(line).ok()?;

        if request_line.method != Method::GET || request_line.path() != "/" {
            return None;
        }

        request_line.query_param("code")
    }

    /// Build the acknowledgment page.
    ///
    /// The page is sent even when no code was captured; the embedded
    /// code substring is then empty.
    pub fn ack_response(code: Option<&str>) -> Response {
        let message = format!(
            "ASRemind successfully received authorization [Auth Code :{}].\n\
             Please close this browser window :)",
            code.unwrap_or("")
        );

        let mut response = Response::ok(Version::Http10);
        response.set_content_type("text/html");
        response.set_body_str(&format!(
            "<html><head><title>Authorization Granted</title></head>\
             <body>SERVER >> {}</body></html>\n",
            message
        ));

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_code_from_redirect_line() {
        let code = RedirectHandler::extract_code("GET /?code=XYZ HTTP/1.1");
        assert_eq!(code, Some("XYZ".to_string()));
    }

    #[test]
    fn test_extract_code_is_case_sensitive() {
        let code = RedirectHandler::extract_code("GET /?code=AbC123 HTTP/1.1");
        assert_eq!(code, Some("AbC123".to_string()));
    }

    #[test]
    fn test_extract_ignores_header_lines() {
        assert_eq!(RedirectHandler::extract_code("Host: localhost:65500"), None);
        assert_eq!(RedirectHandler::extract_code("Accept: text/html"), None);
        assert_eq!(RedirectHandler::extract_code(""), None);
    }

    #[test]
    fn test_extract_requires_get_and_root_path() {
        assert_eq!(
            RedirectHandler::extract_code("POST /?code=x HTTP/1.1"),
            None
        );
        assert_eq!(
            RedirectHandler::extract_code("GET /favicon.ico?code=x HTTP/1.1"),
            None
        );
        assert_eq!(RedirectHandler::extract_code("GET / HTTP/1.1"), None);
    }

    #[test]
    fn test_extract_keeps_embedded_equals() {
        let code = RedirectHandler::extract_code("GET /?code=a=b HTTP/1.1");
        assert_eq!(code, Some("a=b".to_string()));
    }

    #[test]
    fn test_ack_response_embeds_code() {
        let response = RedirectHandler::ack_response(Some("abc123"));
        let body = String::from_utf8(response.body.clone()).unwrap();
        assert!(body.contains("Auth Code :abc123"));
        assert!(body.contains("Authorization Granted"));
        assert!(body.contains("Please close this browser window :)"));
    }

    #[test]
    fn test_ack_response_with_no_code_has_empty_substring() {
        let response = RedirectHandler::ack_response(None);
        let body = String::from_utf8(response.body.clone()).unwrap();
        assert!(body.contains("[Auth Code :]."));
    }

    #[test]
    fn test_ack_response_wire_shape() {
        let response = RedirectHandler::ack_response(Some("x"));
        assert_eq!(response.version, Version::Http10);
        assert_eq!(response.status.as_u16(), 200);
        assert_eq!(
            response.headers.get("Content-Type"),
            Some(&"text/html".to_string())
        );
    }
}
