//! Destination resolution.
//!
//! Numeric IP literals are used directly. Anything else goes through the
//! system resolver on every send, so address changes and DNS updates are
//! picked up by the next datagram.

use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs};

/// IP family of a socket or destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Family {
    V4,
    V6,
}

impl Family {
    pub(crate) fn of(addr: &SocketAddr) -> Self {
        if addr.is_ipv4() { Self::V4 } else { Self::V6 }
    }

    /// Wildcard address with an OS-assigned port, used to bind the client socket.
    pub(crate) fn unspecified(self) -> SocketAddr {
        match self {
            Self::V4 => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
            Self::V6 => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
        }
    }
}

/// Parse `address` as an IP literal.
pub(crate) fn numeric(address: &str, port: u16) -> Option<SocketAddr> {
    address
        .parse::<IpAddr>()
        .ok()
        .map(|ip| SocketAddr::new(ip, port))
}

/// Choose one of the resolved addresses.
///
/// With a known socket family only addresses of that family qualify.
/// Otherwise IPv4 is preferred and any address is accepted.
pub(crate) fn pick(
    host: &str,
    candidates: impl IntoIterator<Item = SocketAddr>,
    family: Option<Family>,
) -> io::Result<SocketAddr> {
    let candidates: Vec<SocketAddr> = candidates.into_iter().collect();
    let wanted = family.unwrap_or(Family::V4);

    if let Some(addr) = candidates.iter().find(|addr| Family::of(addr) == wanted) {
        return Ok(*addr);
    }
    if family.is_none()
        && let Some(addr) = candidates.first()
    {
        return Ok(*addr);
    }

    let message = if candidates.is_empty() {
        format!("no addresses found for host '{host}'")
    } else {
        format!("no {wanted:?} address found for host '{host}'")
    };
    Err(io::Error::new(io::ErrorKind::AddrNotAvailable, message))
}

/// Resolve `address:port`, blocking on the system resolver if needed.
pub(crate) fn resolve(address: &str, port: u16, family: Option<Family>) -> io::Result<SocketAddr> {
    if let Some(addr) = numeric(address, port) {
        return Ok(addr);
    }
    pick(address, (address, port).to_socket_addrs()?, family)
}

/// Resolve `address:port` on the tokio runtime.
pub(crate) async fn resolve_async(
    address: &str,
    port: u16,
    family: Option<Family>,
) -> io::Result<SocketAddr> {
    if let Some(addr) = numeric(address, port) {
        return Ok(addr);
    }
    pick(address, tokio::net::lookup_host((address, port)).await?, family)
}
