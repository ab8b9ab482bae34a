//! Reverse DNS (`ip6.arpa`) names.

use itertools::Itertools;

use crate::models::Address;

/// Zone suffix for IPv6 reverse lookups.
pub const REVERSE_DNS_SUFFIX: &str = "ip6.arpa";

/// Nibble-reversed name, e.g. `1.0.0...8.b.d.0.1.0.0.2.ip6.arpa`.
pub fn reverse_dns_name(address: &Address) -> String {
    let nibbles = address.nibbles().chars().rev().join(".");
    format!("{nibbles}.{REVERSE_DNS_SUFFIX}")
}
