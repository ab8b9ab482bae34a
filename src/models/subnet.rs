//! IPv6 subnet (CIDR) calculations.

use num_bigint::BigUint;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use super::{Address, MAX_LENGTH};
use crate::error::SubnetError;

/// Convert a prefix length to a 128-bit network mask.
///
/// # Examples
/// ```
/// use ipv6_toolkit::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(16).unwrap(), 0xffff << 112);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u128, SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidPrefixLength(i64::from(len)))
    } else if len == 0 {
        Ok(0)
    } else {
        let right_len = u32::from(MAX_LENGTH - len);
        Ok((u128::MAX >> right_len) << right_len)
    }
}

/// Mask of the host bits, the low `128 - len` bits set.
fn host_mask(len: u8) -> u128 {
    // shifting a u128 by 128 is an overflow, so the full width is special
    if len >= MAX_LENGTH {
        0
    } else {
        u128::MAX >> len
    }
}

/// Address base with a prefix length; every bound is derived on demand.
///
/// The base is kept as given. It is not re-aligned to the network boundary.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Subnet {
    base: Address,
    prefix_len: u8,
}

impl Subnet {
    /// Create a subnet, rejecting prefix lengths outside `0..=128`.
    pub fn new(base: Address, prefix_len: i64) -> Result<Subnet, SubnetError> {
        match u8::try_from(prefix_len) {
            Ok(len) if len <= MAX_LENGTH => Ok(Subnet {
                base,
                prefix_len: len,
            }),
            _ => Err(SubnetError::InvalidPrefixLength(prefix_len)),
        }
    }

    /// Build a subnet whose prefix length is already known to be valid.
    pub(crate) fn with_valid_prefix(base: Address, prefix_len: u8) -> Subnet {
        debug_assert!(prefix_len <= MAX_LENGTH, "prefix_len[{prefix_len}] > 128");
        Subnet { base, prefix_len }
    }

    pub fn base(&self) -> Address {
        self.base
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn mask(&self) -> u128 {
        get_cidr_mask(self.prefix_len).unwrap_or(0)
    }

    /// Lowest address of the subnet.
    pub fn network(&self) -> Address {
        Address::from(self.base.value() & self.mask())
    }

    /// Highest address of the subnet.
    pub fn broadcast(&self) -> Address {
        Address::from(self.network().value() | host_mask(self.prefix_len))
    }

    /// Number of addresses, `2^(128 - prefix_len)`; reaches 2^128 for `/0`.
    pub fn host_count(&self) -> BigUint {
        BigUint::from(1u8) << usize::from(MAX_LENGTH - self.prefix_len)
    }

    pub fn contains(&self, address: Address) -> bool {
        address.value() & self.mask() == self.network().value()
    }

    /// Stable `canonical/len` key, used to track tree nodes.
    pub fn key(&self) -> String {
        format!("{}/{}", self.base.canonical(), self.prefix_len)
    }
}

impl FromStr for Subnet {
    type Err = SubnetError;

    /// Parse `addr/len` notation such as `2001:db8::/32`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (addr, len) = s
            .split_once('/')
            .ok_or_else(|| SubnetError::Malformed(s.to_string()))?;
        let address = Address::parse(addr)?;
        let len: i64 = len
            .parse()
            .map_err(|_| SubnetError::Malformed(s.to_string()))?;
        Subnet::new(address, len)
    }
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix_len)
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> Result<Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Subnet::from_str(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}
