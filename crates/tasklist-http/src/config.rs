//! HTTP server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Where the server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: IpAddr,
    /// Port to bind. `0` picks a free port.
    pub port: u16,
}

impl ServerConfig {
    /// Default port when none is configured.
    pub const DEFAULT_PORT: u16 = 3000;

    /// The socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: Self::DEFAULT_PORT,
        }
    }
}
