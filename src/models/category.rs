//! Address category classification.

use serde::Serialize;

use super::Address;

/// Standard category of an IPv6 address.
///
/// Always derived from the address value, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AddressCategory {
    Unspecified,
    Loopback,
    Multicast,
    #[serde(rename = "Link-Local")]
    LinkLocal,
    #[serde(rename = "Unique Local")]
    UniqueLocal,
    #[serde(rename = "Global Unicast")]
    GlobalUnicast,
    #[serde(rename = "Unknown/Reserved")]
    Reserved,
}

/// The most significant `bits` bits of `value`.
fn top_bits(value: u128, bits: u32) -> u128 {
    value >> (128 - bits)
}

impl AddressCategory {
    /// Classify an address; the first matching rule wins.
    pub fn classify(address: &Address) -> AddressCategory {
        let value = address.value();

        if value == 0 {
            AddressCategory::Unspecified
        } else if value == 1 {
            AddressCategory::Loopback
        } else if top_bits(value, 8) == 0xff {
            AddressCategory::Multicast
        } else if top_bits(value, 10) == 0b11_1111_1010 {
            AddressCategory::LinkLocal
        } else if top_bits(value, 7) == 0b111_1110 {
            AddressCategory::UniqueLocal
        } else if top_bits(value, 3) == 0b001 {
            AddressCategory::GlobalUnicast
        } else {
            AddressCategory::Reserved
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddressCategory::Unspecified => "Unspecified",
            AddressCategory::Loopback => "Loopback",
            AddressCategory::Multicast => "Multicast",
            AddressCategory::LinkLocal => "Link-Local",
            AddressCategory::UniqueLocal => "Unique Local",
            AddressCategory::GlobalUnicast => "Global Unicast",
            AddressCategory::Reserved => "Unknown/Reserved",
        }
    }
}

impl std::fmt::Display for AddressCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
