use crate::common::constants::LISTEN_BACKLOG;
use crate::common::error::{ListenerError, Result};
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::os::unix::io::AsRawFd;
use std::time::Duration;

/// Blocking listening socket with a backlog of one pending connection.
pub struct ListeningSocket {
    listener: TcpListener,
    addr: SocketAddr,
}

impl ListeningSocket {
    pub fn bind(addr: SocketAddr) -> Result<Self> {
        let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))
            .map_err(|e| ListenerError::Bind(format!("Failed to create socket: {}", e)))?;

        socket
            .set_reuse_address(true)
            .map_err(|e| ListenerError::Bind(format!("Failed to set SO_REUSEADDR: {}", e)))?;

        socket
            .bind(&addr.into())
            .map_err(|e| ListenerError::Bind(format!("Failed to bind to {}: {}", addr, e)))?;

        socket
            .listen(LISTEN_BACKLOG)
            .map_err(|e| ListenerError::Bind(format!("Failed to listen on {}: {}", addr, e)))?;

        Ok(Self {
            listener: socket.into(),
            addr,
        })
    }

    /// Block until a browser connects
    pub fn accept(&self) -> Result<(TcpStream, SocketAddr)> {
        self.listener
            .accept()
            .map_err(|e| ListenerError::IoError(e))
    }

    /// Wait until a connection is pending or the timeout expires.
    /// Returns false on timeout.
    pub fn wait_readable(&self, timeout: Duration) -> Result<bool> {
        let mut pollfd = libc::pollfd {
            fd: self.listener.as_raw_fd(),
            events: libc::POLLIN,
            revents: 0,
        };

        let timeout_ms = timeout.as_millis().min(libc::c_int::MAX as u128) as libc::c_int;

        let n = unsafe { libc::poll(&mut pollfd, 1, timeout_ms) };
        if n < 0 {
            return Err(ListenerError::IoError(std::io::Error::last_os_error()));
        }

        Ok(n > 0)
    }

    /// Get the socket address this listener is bound to
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}
