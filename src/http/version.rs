use std::fmt;
use std::str::FromStr;

/// HTTP version. The browser redirect arrives as HTTP/1.1; the
/// acknowledgment page is sent as HTTP/1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    Http10, // HTTP/1.0
    Http11, // HTTP/1.1
}

impl Default for Version {
    fn default() -> Self {
        Version::Http11
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::Http10 => write!(f, "HTTP/1.0"),
            Version::Http11 => write!(f, "HTTP/1.1"),
        }
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HTTP/1.0" => Ok(Version::Http10),
            "HTTP/1.1" => Ok(Version::Http11),
            _ => Err(VersionParseError::InvalidVersion(s.to_string())),
        }
    }
}

/// Error type for version parsing
#[derive(Debug, Clone)]
pub enum VersionParseError {
    InvalidVersion(String),
}

impl fmt::Display for VersionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionParseError::InvalidVersion(version) => {
                write!(f, "Invalid HTTP version: {}", version)
            }
        }
    }
}

impl std::error::Error for VersionParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parsing() {
        assert_eq!(Version::from_str("HTTP/1.1").unwrap(), Version::Http11);
        assert_eq!(Version::from_str("HTTP/1.0").unwrap(), Version::Http10);
        assert!(Version::from_str("HTTP/2.0").is_err());
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::Http10.to_string(), "HTTP/1.0");
        assert_eq!(Version::Http11.to_string(), "HTTP/1.1");
    }
}
