//! IPv4 transition addresses: NAT64, 6to4 and ISATAP.
//!
//! Each address is built as text and then parsed, so a construction mistake
//! surfaces as a [`ParseError`](crate::error::ParseError) instead of a
//! malformed value.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::{ISATAP_DEFAULT_PREFIX, NAT64_WELL_KNOWN_PREFIX, SIX_TO_FOUR_PREFIX};
use crate::error::{Ipv4FormatError, TransitionError};
use crate::models::Address;

lazy_static! {
    static ref RE_IPV4: Regex = Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}$").expect("Invalid Regex?");
}

/// Convert dotted-quad IPv4 text to 8 lowercase hex digits.
///
/// # Examples
/// ```
/// use ipv6_toolkit::processing::ipv4_to_hex;
/// assert_eq!(ipv4_to_hex("192.0.2.1").unwrap(), "c0000201");
/// ```
pub fn ipv4_to_hex(ipv4: &str) -> Result<String, Ipv4FormatError> {
    if !RE_IPV4.is_match(ipv4) {
        return Err(Ipv4FormatError::Malformed(ipv4.to_string()));
    }

    let mut hex = String::with_capacity(8);
    for part in ipv4.split('.') {
        let octet: u8 = part
            .parse()
            .map_err(|_| Ipv4FormatError::OctetOutOfRange(part.to_string()))?;
        hex.push_str(&format!("{octet:02x}"));
    }
    Ok(hex)
}

/// NAT64 address under the well-known prefix `64:ff9b::/96`.
pub fn create_nat64(ipv4: &str) -> Result<Address, TransitionError> {
    let hex = ipv4_to_hex(ipv4)?;
    let text = format!("{NAT64_WELL_KNOWN_PREFIX}{}:{}", &hex[..4], &hex[4..]);
    log::trace!("create_nat64({ipv4}) -> {text}");
    Ok(Address::parse(&text)?)
}

/// 6to4 address, `2002:` followed by the 32 IPv4 bits.
pub fn create_6to4(ipv4: &str) -> Result<Address, TransitionError> {
    let hex = ipv4_to_hex(ipv4)?;
    let text = format!("{SIX_TO_FOUR_PREFIX}:{}:{}::", &hex[..4], &hex[4..]);
    log::trace!("create_6to4({ipv4}) -> {text}");
    Ok(Address::parse(&text)?)
}

/// ISATAP address under the link-local prefix `fe80::`.
pub fn create_isatap(ipv4: &str) -> Result<Address, TransitionError> {
    create_isatap_with_prefix(ipv4, ISATAP_DEFAULT_PREFIX)
}

/// ISATAP address, `<prefix>::5efe:` followed by the IPv4 bits.
///
/// Trailing colons are stripped from `prefix` (an empty result becomes
/// `fe80`). The prefix is otherwise not checked on its own; only the
/// composed address is parsed.
pub fn create_isatap_with_prefix(ipv4: &str, prefix: &str) -> Result<Address, TransitionError> {
    let hex = ipv4_to_hex(ipv4)?;
    let prefix = match prefix.trim_end_matches(':') {
        "" => "fe80",
        p => p,
    };
    let text = format!("{prefix}::5efe:{}:{}", &hex[..4], &hex[4..]);
    log::trace!("create_isatap({ipv4}) -> {text}");
    Ok(Address::parse(&text)?)
}
