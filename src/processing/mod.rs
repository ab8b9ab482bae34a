//! Derivations over addresses and subnets.
//!
//! - [`transition`] - NAT64, 6to4 and ISATAP addresses from IPv4
//! - [`reverse_dns`] - `ip6.arpa` names
//! - [`subnet_tree`] - child blocks for hierarchical planning
//! - [`bulk`] - consecutive address sequences
//! - [`eui64`] - EUI-64 interface identifiers

mod bulk;
mod eui64;
mod reverse_dns;
mod subnet_tree;
mod transition;

// Re-export public functions
pub use bulk::{bulk_canonical, bulk_sequence};
pub use eui64::{create_eui64_link_local, eui64_interface_id};
pub use reverse_dns::{reverse_dns_name, REVERSE_DNS_SUFFIX};
pub use subnet_tree::child_blocks;
pub use transition::{
    create_6to4, create_isatap, create_isatap_with_prefix, create_nat64, ipv4_to_hex,
};
