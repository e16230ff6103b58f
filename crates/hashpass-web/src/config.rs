//! Listen address resolution.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8000;

const PORT_ENV_KEY: &str = "HASHPASS_PORT";
const LOCALHOST_ENV_KEY: &str = "HASHPASS_LOCALHOST";

/// Resolve the bind address from the process environment.
pub fn bind_address() -> anyhow::Result<SocketAddr> {
    resolve_bind_address(|key| std::env::var(key).ok())
}

/// `HASHPASS_PORT` picks the port (default 8000). If `HASHPASS_LOCALHOST` is
/// set to anything, only the loopback interface is bound.
pub fn resolve_bind_address(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<SocketAddr> {
    let port = match lookup(PORT_ENV_KEY).filter(|v| !v.trim().is_empty()) {
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("Invalid {} value {:?}: {}", PORT_ENV_KEY, value, e))?,
        None => DEFAULT_PORT,
    };
    let host = if lookup(LOCALHOST_ENV_KEY).is_some() {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    } else {
        IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    };
    Ok(SocketAddr::new(host, port))
}
