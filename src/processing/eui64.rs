//! Modified EUI-64 interface identifiers from MAC addresses.

use crate::error::MacFormatError;
use crate::models::Address;

/// Universal/local bit of the first MAC octet.
const UNIVERSAL_LOCAL_BIT: u64 = 0x02;

/// `fe80::/64`, the link-local prefix the identifier is placed in.
const LINK_LOCAL_PREFIX: u128 = 0xfe80 << 112;

/// Modified EUI-64 identifier: flip the U/L bit and insert `ff:fe` between
/// the OUI and NIC halves.
///
/// Accepts `:`, `-` or `.` separators, e.g. `00:0c:29:ab:cd:ef`,
/// `00-0C-29-AB-CD-EF` or `000c.29ab.cdef`.
pub fn eui64_interface_id(mac: &str) -> Result<u64, MacFormatError> {
    let digits: String = mac.chars().filter(|c| !matches!(c, ':' | '-' | '.')).collect();
    if digits.len() != 12 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(MacFormatError::Malformed(mac.to_string()));
    }
    let mac_bits =
        u64::from_str_radix(&digits, 16).map_err(|_| MacFormatError::Malformed(mac.to_string()))?;

    let oui = mac_bits >> 24;
    let nic = mac_bits & 0xff_ffff;
    let id = (oui << 40) | (0xfffe << 24) | nic;
    Ok(id ^ (UNIVERSAL_LOCAL_BIT << 56))
}

/// Link-local address `fe80::/64` + EUI-64 identifier of `mac`.
pub fn create_eui64_link_local(mac: &str) -> Result<Address, MacFormatError> {
    let id = eui64_interface_id(mac)?;
    Ok(Address::from(LINK_LOCAL_PREFIX | u128::from(id)))
}
