//! Network validators
//!
//! IP addresses and HTTP URIs, including a reachability check through a
//! pluggable [`HostResolver`].

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, ToSocketAddrs};

use serde_json::Value;

use crate::filters::{host_resolves, parse_http_uri};
use crate::foundation::{Validator, scalar_str};

// ============================================================================
// HOST RESOLUTION
// ============================================================================

/// Answers whether a host name resolves.
pub trait HostResolver {
    /// Whether `host` on `port` resolves to at least one address.
    fn resolves(&self, host: &str, port: u16) -> bool;
}

impl<F> HostResolver for F
where
    F: Fn(&str, u16) -> bool,
{
    fn resolves(&self, host: &str, port: u16) -> bool {
        self(host, port)
    }
}

/// Resolves through the operating system. Blocks the calling thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn resolves(&self, host: &str, port: u16) -> bool {
        match (host, port).to_socket_addrs() {
            Ok(mut addrs) => addrs.next().is_some(),
            Err(err) => {
                tracing::debug!(host, port, error = %err, "host lookup failed");
                false
            }
        }
    }
}

// ============================================================================
// IP VALIDATORS
// ============================================================================

crate::validator! {
    /// Validates an IPv4 or IPv6 address.
    pub IpAddressValidator;
    rule(input) { input.parse::<IpAddr>().is_ok() }
    fn ip_address();
}

crate::validator! {
    /// Validates an IPv4 address in dotted decimal form.
    pub IpV4Validator;
    rule(input) { input.parse::<Ipv4Addr>().is_ok() }
    fn ip_v4_address();
}

crate::validator! {
    /// Validates an IPv6 address.
    pub IpV6Validator;
    rule(input) { input.parse::<Ipv6Addr>().is_ok() }
    fn ip_v6_address();
}

// ============================================================================
// URI VALIDATORS
// ============================================================================

crate::validator! {
    /// Validates an absolute `http` or `https` URI.
    pub HttpUriValidator;
    rule(input) { parse_http_uri(input).is_some() }
    fn http_uri();
}

/// Validates an `http`/`https` URI whose host resolves.
#[derive(Debug, Clone, Default)]
pub struct ExistingHttpUriValidator<R> {
    resolver: R,
}

impl<R: HostResolver> ExistingHttpUriValidator<R> {
    pub const fn new(resolver: R) -> Self {
        Self { resolver }
    }
}

impl<R: HostResolver> Validator for ExistingHttpUriValidator<R> {
    fn validate(&self, value: &Value) -> bool {
        scalar_str(value)
            .and_then(|input| parse_http_uri(&input))
            .is_some_and(|url| host_resolves(&self.resolver, &url))
    }
}

// ============================================================================
// TESTS
// ============================================================================
