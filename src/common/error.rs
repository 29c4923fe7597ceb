use std::fmt;

#[derive(Debug)]
pub enum ListenerError {
    /// The listening socket could not be bound. Fatal for the run.
    Bind(String),
    /// A reader or writer over an accepted connection could not be opened.
    StreamSetup(String),
    /// The browser closed the connection before sending a request line.
    ConnectionTerminated,
    /// Sending the acknowledgment page failed partway.
    ResponseWrite(String),
    /// Shutting down a connection failed. Never propagated past logging.
    Close(String),
    /// No browser connected within the configured accept timeout.
    AcceptTimeout(u64),
    ParseError(String),
    ConfigError(String),
    IoError(std::io::Error),
}

impl fmt::Display for ListenerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListenerError::Bind(msg) => write!(f, "Bind error: {}", msg),
            ListenerError::StreamSetup(msg) => write!(f, "Stream setup error: {}", msg),
            ListenerError::ConnectionTerminated => {
                write!(f, "Connection terminated before a request line was read")
            }
            ListenerError::ResponseWrite(msg) => write!(f, "Response write error: {}", msg),
            ListenerError::Close(msg) => write!(f, "Close error: {}", msg),
            ListenerError::AcceptTimeout(secs) => {
                write!(f, "No connection received within {} seconds", secs)
            }
            ListenerError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ListenerError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ListenerError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ListenerError {}

impl From<std::io::Error> for ListenerError {
    fn from(err: std::io::Error) -> Self {
        ListenerError::IoError(err)
    }
}

pub type Result<T> = std::result::Result<T, ListenerError>;
