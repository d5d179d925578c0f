//! Host extraction from host addresses
//!
//! Addresses come in as `host:port`, `[v6]:port`, `[v6]` or a bare host.

/// Extract the host part of an address
///
/// Never fails; addresses without a port are returned unchanged, and so are
/// unbracketed IPv6 literals such as `fe80::1` (their port, if any, cannot be
/// told apart from the address).
#[must_use]
pub fn host_ip(addr: &str) -> &str {
    if let Some(rest) = addr.strip_prefix('[') {
        return match rest.find(']') {
            Some(end) => &rest[..end],
            None => addr,
        };
    }

    match addr.split_once(':') {
        Some((host, port)) if !port.contains(':') => host,
        _ => addr,
    }
}
