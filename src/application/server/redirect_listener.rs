use crate::application::config::models::ListenerConfig;
use crate::application::handler::redirect_handler::RedirectHandler;
use crate::application::server::listener::Listener;
use crate::common::error::{ListenerError, Result};
use crate::common::logger::Logger;
use crate::http::serializer::ResponseSerializer;
use std::io::{BufRead, BufReader, Write};
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

/// Result of a completed run: the code the browser delivered (if any)
/// and how many connections it took to get an acknowledgment out.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub authorization_code: Option<String>,
    pub connections: u64,
}

/// What happened on one accepted connection.
enum ConnectionOutcome {
    /// The acknowledgment page went out; the run is over.
    Responded,
    /// The browser hung up before sending a request line.
    Terminated,
}

/// One OAuth redirect capture attempt.
///
/// Owns the accept loop: bind once, then accept one connection at a
/// time until an acknowledgment page has been delivered. Constructed
/// per authorization attempt and owned by the caller; the captured
/// code is exposed on the returned [`RunOutcome`].
pub struct RedirectListener {
    config: ListenerConfig,
    processed: bool,
    connections: u64,
    authorization_code: Option<String>,
}

impl RedirectListener {
    pub fn new(config: ListenerConfig) -> Self {
        Self {
            config,
            processed: false,
            connections: 0,
            authorization_code: None,
        }
    }

    /// The most recently captured authorization code
    pub fn authorization_code(&self) -> Option<&str> {
        self.authorization_code.as_deref()
    }

    /// Number of connections accepted so far
    pub fn connections(&self) -> u64 {
        self.connections
    }

    /// Run the accept loop until one acknowledgment page has been
    /// delivered.
    ///
    /// A bind failure ends the run immediately. Everything that goes
    /// wrong on an individual connection is logged and answered with a
    /// fresh accept; a browser that never connects only ends the run
    /// when an accept timeout is configured.
    pub fn run(&mut self) -> Result<RunOutcome> {
        let listener = Listener::new(self.config.addr())?;
        Logger::info(&format!("Listening on {}", listener.addr()));

        while !self.processed {
            Logger::info("Waiting for connection");

            if let Some(secs) = self.config.accept_timeout_secs {
                if !listener.wait_readable(Duration::from_secs(secs))? {
                    return Err(ListenerError::AcceptTimeout(secs));
                }
            }

            let (stream, peer) = match listener.accept() {
                Ok(pair) => pair,
                Err(e) => {
                    Logger::error(&format!("Error accepting connection: {}", e));
                    continue;
                }
            };

            self.connections += 1;
            Logger::info(&format!(
                "Connection {} received from: {}",
                self.connections, peer
            ));

            match self.handle_connection(&stream) {
                Ok(ConnectionOutcome::Responded) => {
                    self.processed = true;
                }
                Ok(ConnectionOutcome::Terminated) => {
                    Logger::info(&ListenerError::ConnectionTerminated.to_string());
                }
                Err(e) => {
                    Logger::error(&e.to_string());
                }
            }

            Logger::info("Terminating connection");
            if let Err(e) = stream.shutdown(Shutdown::Both) {
                // Close failures are logged and never propagated
                Logger::warn(&ListenerError::Close(e.to_string()).to_string());
            }
        }

        Ok(RunOutcome {
            authorization_code: self.authorization_code.clone(),
            connections: self.connections,
        })
    }

    /// Read header lines, capture the code, send the acknowledgment.
    ///
    /// The line loop does not stop on the first match: a later matching
    /// line overwrites an earlier one, within this connection and on
    /// the listener itself.
    fn handle_connection(&mut self, stream: &TcpStream) -> Result<ConnectionOutcome> {
        let reader_stream = stream
            .try_clone()
            .map_err(|e| ListenerError::StreamSetup(e.to_string()))?;
        let mut reader = BufReader::new(reader_stream);

        let mut code: Option<String> = None;
        let mut lines_read = 0u32;
        let mut line = String::new();

        loop {
            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) => {
                    if lines_read == 0 {
                        return Ok(ConnectionOutcome::Terminated);
                    }
                    // Stream ended after the headers started: treat as a
                    // complete request and acknowledge it.
                    break;
                }
                Ok(_) => {
                    let trimmed = line.trim_end_matches(|c| c == '\r' || c == '\n');
                    if trimmed.is_empty() {
                        break;
                    }

                    lines_read += 1;
                    if let Some(found) = RedirectHandler::extract_code(trimmed) {
                        self.authorization_code = Some(found.clone());
                        code = Some(found);
                    }
                }
                Err(e) => {
                    return Err(ListenerError::IoError(e));
                }
            }
        }

        let response = RedirectHandler::ack_response(code.as_deref());
        let head = ResponseSerializer::serialize_head(&response)?;

        Self::send(stream, &head, &response.body)
            .map_err(|e| ListenerError::ResponseWrite(e.to_string()))?;

        Ok(ConnectionOutcome::Responded)
    }

    /// Write the header block, flush, then the page, flush again.
    fn send(mut stream: &TcpStream, head: &[u8], body: &[u8]) -> std::io::Result<()> {
        stream.write_all(head)?;
        stream.flush()?;
        stream.write_all(body)?;
        stream.flush()?;
        Ok(())
    }
}
