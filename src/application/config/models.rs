use crate::common::constants::DEFAULT_PORT;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Redirect listener settings
    #[serde(default)]
    pub listener: ListenerConfig,
}

/// Redirect listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenerConfig {
    /// Bind address for the callback socket
    #[serde(default = "default_bind_address")]
    pub bind_address: IpAddr,

    /// Port the OAuth redirect URI points at
    #[serde(default = "default_port")]
    pub port: u16,

    /// How long to wait for the browser to connect. Absent means wait
    /// forever, matching the behavior of a redirect URI that stays
    /// registered until the user finishes granting access.
    #[serde(default)]
    pub accept_timeout_secs: Option<u64>,
}

fn default_bind_address() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl ListenerConfig {
    /// Socket address the listener binds to
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            accept_timeout_secs: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
        }
    }
}
