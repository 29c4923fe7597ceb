use crate::common::error::{ListenerError, Result};
use crate::http::method::Method;
use crate::http::version::Version;
use std::collections::HashMap;
use std::str::FromStr;

/// Parsed HTTP request line: "METHOD /path?query HTTP/1.1"
#[derive(Debug, Clone)]
pub struct RequestLine {
    /// HTTP method
    pub method: Method,

    /// Request target (path + query string)
    pub target: String,

    /// HTTP version
    pub version: Version,
}

impl RequestLine {
    /// Parse the three-part request-line grammar.
    ///
    /// The version token is lenient: a missing or unrecognized version
    /// falls back to HTTP/1.1, since the redirect contract only
    /// interprets the method and target.
    pub fn parse(line: &str) -> Result<RequestLine> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(ListenerError::ParseError(
                "Invalid request line format".to_string(),
            ));
        }

        let method = Method::from_str(parts[0])
            .map_err(|e| ListenerError::ParseError(format!("Invalid method: {}", e)))?;

        let target = parts[1].to_string();

        let version = if parts.len() >= 3 {
            Version::from_str(parts[2]).unwrap_or_default()
        } else {
            Version::default()
        };

        Ok(RequestLine {
            method,
            target,
            version,
        })
    }

    /// Get the path part of the target (without query string)
    pub fn path(&self) -> &str {
        if let Some(pos) = self.target.find('?') {
            &self.target[..pos]
        } else {
            &self.target
        }
    }

    /// Get the query string part
    pub fn query_string(&self) -> Option<&str> {
        self.target.find('?').map(|pos| &self.target[pos + 1..])
    }

    /// Parse query parameters from the target.
    ///
    /// Each pair is split on the FIRST `=` only, so a value may itself
    /// contain `=` characters: `code=a=b` yields the value `a=b`. A
    /// repeated key keeps the last occurrence.
    pub fn query_params(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();

        if let Some(query) = self.query_string() {
            for pair in query.split('&') {
                if let Some(equal_pos) = pair.find('=') {
                    let key = url_decode(&pair[..equal_pos]);
                    let value = url_decode(&pair[equal_pos + 1..]);
                    params.insert(key, value);
                } else if !pair.is_empty() {
                    params.insert(url_decode(pair), String::new());
                }
            }
        }

        params
    }

    /// Get a single query parameter by name
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.query_params().remove(name)
    }
}

/// URL decode function
fn url_decode(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '%' {
            let mut hex = String::new();
            if let Some(c1) = chars.next() {
                hex.push(c1);
                if let Some(c2) = chars.next() {
                    hex.push(c2);
                    if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                        result.push(byte as char);
                        continue;
                    }
                }
            }
            result.push('%');
            result.push_str(&hex);
        } else if ch == '+' {
            result.push(' ');
        } else {
            result.push(ch);
        }
    }

    result
}
