use crate::common::error::Result;
use crate::core::net::socket::ListeningSocket;
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

/// Listener manages the listening socket for accepting browser connections
pub struct Listener {
    socket: ListeningSocket,
}

impl Listener {
    /// Create a new listener bound to the given address
    pub fn new(addr: SocketAddr) -> Result<Self> {
        let socket = ListeningSocket::bind(addr)?;
        Ok(Self { socket })
    }

    /// Block until a browser connects
    pub fn accept(&self) -> Result<(TcpStream, SocketAddr)> {
        self.socket.accept()
    }

    /// Wait for a pending connection; false means the timeout expired
    pub fn wait_readable(&self, timeout: Duration) -> Result<bool> {
        self.socket.wait_readable(timeout)
    }

    /// Get the socket address this listener is bound to
    pub fn addr(&self) -> SocketAddr {
        self.socket.addr()
    }
}
