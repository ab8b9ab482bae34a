//! Value types of the address library.
//!
//! - [`Address`] - IPv6 address with canonical and expanded text forms
//! - [`Subnet`] - address and prefix length with derived bounds
//! - [`AddressCategory`] - standard category of an address

mod category;
mod ipv6;
mod subnet;

// Re-export public types
pub use category::AddressCategory;
pub use ipv6::{Address, FormatStyle, MAX_LENGTH, SEGMENTS};
pub use subnet::{get_cidr_mask, Subnet};
