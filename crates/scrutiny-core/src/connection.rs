//! Backend address derivation.
//!
//! The console only knows the server identifier the user typed at login. The
//! address of the REST API is derived from it on every request:
//!
//! ```text
//! {protocol}://{hostname}:{port}/api
//! ```
//!
//! # Protocol selection
//!
//! - A strict IPv4 dotted quad (`10.0.0.5`) is assumed to be an internal
//!   address reachable without TLS termination: `http`.
//! - Anything else (domain names, IPv6 literals, malformed numbers, the empty
//!   string) is assumed to sit behind a TLS-terminating proxy: `https`.
//!
//! Hostnames are never validated. A malformed identifier silently takes the
//! `https` branch and fails later, at connection time.

use std::{fmt, net::Ipv4Addr};

use crate::session::SessionState;
use crate::storage::Storage;

/// Default backend port.
pub const DEFAULT_PORT: u16 = 9090;

/// URL scheme used to reach the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// Plain HTTP, for raw IPv4 addresses.
    Http,
    /// HTTP over TLS, for everything else.
    Https,
}

impl Protocol {
    /// Pick the protocol for a server identifier.
    ///
    /// Only a strict dotted quad selects [`Protocol::Http`]: exactly four
    /// decimal octets in `0..=255`, digits only, and no leading zeros
    /// (`010.0.0.1` is ambiguous between octal and decimal and is rejected).
    pub fn for_host(hostname: &str) -> Self {
        if hostname.parse::<Ipv4Addr>().is_ok() { Self::Http } else { Self::Https }
    }

    /// Scheme string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Port the backend listens on. Fixed per deployment.
    pub port: u16,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl ConnectionConfig {
    /// Create a configuration for a backend on `port`.
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    /// Derive the API base address for `hostname`.
    ///
    /// Pure and total: recomputed on every call, never fails.
    pub fn derive_base_url(&self, hostname: &str) -> String {
        let protocol = Protocol::for_host(hostname);
        format!("{protocol}://{hostname}:{}/api", self.port)
    }

    /// API base address for the server the session is bound to.
    pub fn base_api_path<S: Storage>(&self, session: &SessionState<S>) -> String {
        self.derive_base_url(session.hostname())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_uses_http() {
        let config = ConnectionConfig::new(9090);
        insta::assert_snapshot!(config.derive_base_url("10.0.0.5"), @"http://10.0.0.5:9090/api");
    }

    #[test]
    fn domain_uses_https() {
        let config = ConnectionConfig::new(443);
        insta::assert_snapshot!(config.derive_base_url("db.example.com"), @"https://db.example.com:443/api");
    }

    #[test]
    fn edge_octets() {
        assert_eq!(Protocol::for_host("0.0.0.0"), Protocol::Http);
        assert_eq!(Protocol::for_host("255.255.255.255"), Protocol::Http);
    }

    #[test]
    fn malformed_numerics_fall_back_to_https() {
        for host in [
            "999.999.999.999",
            "256.0.0.1",
            "1.2.3",
            "1.2.3.4.5",
            "1.2.3.",
            ".1.2.3",
            "01.2.3.4",
            "1.2.3.4 ",
            "+1.2.3.4",
            "1.2.3.a",
            "",
        ] {
            assert_eq!(Protocol::for_host(host), Protocol::Https, "{host:?}");
        }
    }

    #[test]
    fn ipv6_literals_use_https() {
        assert_eq!(Protocol::for_host("::1"), Protocol::Https);
        assert_eq!(Protocol::for_host("[fe80::1]"), Protocol::Https);
        assert_eq!(Protocol::for_host("::ffff:1.2.3.4"), Protocol::Https);
    }

    #[test]
    fn default_port() {
        assert_eq!(ConnectionConfig::default().port, DEFAULT_PORT);
    }
}
