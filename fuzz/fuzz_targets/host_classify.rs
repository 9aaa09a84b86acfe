//! Fuzz target for backend address derivation.
//!
//! Any string must yield a URL of the documented shape, and `http` only for
//! strings that parse as an IPv4 address.

#![no_main]

use std::net::Ipv4Addr;

use libfuzzer_sys::fuzz_target;
use scrutiny_core::{ConnectionConfig, Protocol};

fuzz_target!(|input: (&str, u16)| {
    let (hostname, port) = input;
    let url = ConnectionConfig::new(port).derive_base_url(hostname);

    let protocol = Protocol::for_host(hostname);
    assert_eq!(protocol == Protocol::Http, hostname.parse::<Ipv4Addr>().is_ok());
    assert!(url.starts_with(protocol.as_str()));
    assert!(url.ends_with(&format!(":{port}/api")));
});
