//! IPv6 address parsing and text formatting.
//!
//! Provides the [`Address`] value type: a 128-bit integer with RFC5952
//! canonical and fully expanded text forms.

use itertools::Itertools;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv6Addr;
use std::str::FromStr;

use super::AddressCategory;
use crate::error::ParseError;

/// Number of bits in an IPv6 address.
pub const MAX_LENGTH: u8 = 128;

/// Number of 16-bit groups in an IPv6 address.
pub const SEGMENTS: usize = 8;

/// Text rendering of an [`Address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatStyle {
    /// RFC5952 shortest form, e.g. `2001:db8::1`.
    Canonical,
    /// Eight zero-padded groups, e.g. `2001:0db8:0000:0000:0000:0000:0000:0001`.
    Expanded,
}

/// IPv6 address stored as its 128-bit value.
///
/// Two addresses with the same value are the same address, whatever text
/// they were parsed from.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Address {
    value: u128,
}

/// Split address text into its eight group strings, expanding `::`.
fn expand_groups(text: &str) -> Result<Vec<&str>, ParseError> {
    let parts: Vec<&str> = text.split("::").collect();
    if parts.len() > 2 {
        return Err(ParseError::MultipleDoubleColon);
    }

    let groups: Vec<&str> = if parts.len() == 2 {
        // "::1" and "1::" leave empty tokens on one side; those are not groups
        let left: Vec<&str> = parts[0].split(':').filter(|p| !p.is_empty()).collect();
        let right: Vec<&str> = parts[1].split(':').filter(|p| !p.is_empty()).collect();
        let used = left.len() + right.len();
        if used > SEGMENTS {
            return Err(ParseError::TooManySegments);
        }
        let missing = SEGMENTS - used;

        left.into_iter()
            .chain(std::iter::repeat("0").take(missing))
            .chain(right)
            .collect()
    } else {
        text.split(':').collect()
    };

    if groups.len() != SEGMENTS {
        return Err(ParseError::SegmentCount(groups.len()));
    }
    Ok(groups)
}

/// Parse one group of up to four hex digits; an empty group is zero.
fn parse_group(group: &str) -> Result<u16, ParseError> {
    if group.len() > 4 {
        return Err(ParseError::SegmentTooLong(group.to_string()));
    }
    if group.is_empty() {
        return Ok(0);
    }
    let value = u32::from_str_radix(group, 16)
        .map_err(|_| ParseError::SegmentOutOfRange(group.to_string()))?;
    u16::try_from(value).map_err(|_| ParseError::SegmentOutOfRange(group.to_string()))
}

impl Address {
    /// Parse IPv6 text such as `2001:db8::1` or a full eight-group form.
    ///
    /// # Examples
    /// ```
    /// use ipv6_toolkit::models::Address;
    /// assert_eq!(Address::parse("::1").unwrap().value(), 1);
    /// ```
    pub fn parse(text: &str) -> Result<Address, ParseError> {
        if text.is_empty() {
            return Err(ParseError::Empty);
        }
        if let Some(c) = text.chars().find(|c| !c.is_ascii_hexdigit() && *c != ':') {
            return Err(ParseError::InvalidCharacter(c));
        }

        let value = expand_groups(text)?
            .into_iter()
            .try_fold(0u128, |acc, group| {
                Ok::<u128, ParseError>((acc << 16) | u128::from(parse_group(group)?))
            })?;

        Ok(Address { value })
    }

    /// Returns true if `text` parses as an address.
    pub fn is_valid(text: &str) -> bool {
        Address::parse(text).is_ok()
    }

    /// The underlying 128-bit value.
    pub fn value(&self) -> u128 {
        self.value
    }

    /// The eight 16-bit groups, most significant first.
    pub fn segments(&self) -> [u16; SEGMENTS] {
        let mut segments = [0u16; SEGMENTS];
        for (i, segment) in segments.iter_mut().enumerate() {
            let shift = (SEGMENTS - 1 - i) * 16;
            *segment = ((self.value >> shift) & 0xffff) as u16;
        }
        segments
    }

    pub fn format(&self, style: FormatStyle) -> String {
        match style {
            FormatStyle::Canonical => self.canonical(),
            FormatStyle::Expanded => self.expanded(),
        }
    }

    /// Eight groups of exactly four lowercase hex digits, 39 characters.
    pub fn expanded(&self) -> String {
        self.segments()
            .iter()
            .map(|s| format!("{s:04x}"))
            .join(":")
    }

    /// RFC5952 text: no leading zeros, longest zero run (leftmost on ties,
    /// at least two groups) replaced by `::`.
    pub fn canonical(&self) -> String {
        let segments = self.segments();
        let (start, len) = longest_zero_run(&segments);

        if len < 2 {
            return segments.iter().map(|s| format!("{s:x}")).join(":");
        }

        let head = segments[..start].iter().map(|s| format!("{s:x}")).join(":");
        let tail = segments[start + len..]
            .iter()
            .map(|s| format!("{s:x}"))
            .join(":");
        format!("{head}::{tail}")
    }

    /// 128 zero-padded binary digits.
    pub fn binary(&self) -> String {
        format!("{:0128b}", self.value)
    }

    /// The 32 zero-padded lowercase hex digits of the value, no separators.
    pub fn nibbles(&self) -> String {
        format!("{:032x}", self.value)
    }

    pub fn category(&self) -> AddressCategory {
        AddressCategory::classify(self)
    }

    /// The `ip6.arpa` reverse lookup name.
    pub fn reverse_dns(&self) -> String {
        crate::processing::reverse_dns_name(self)
    }
}

/// Start and length of the longest run of zero groups, leftmost on ties.
fn longest_zero_run(segments: &[u16; SEGMENTS]) -> (usize, usize) {
    let mut best = (0, 0);
    let mut current_start = 0;
    let mut current_len = 0;

    for (i, segment) in segments.iter().enumerate() {
        if *segment == 0 {
            if current_len == 0 {
                current_start = i;
            }
            current_len += 1;
            if current_len > best.1 {
                best = (current_start, current_len);
            }
        } else {
            current_len = 0;
        }
    }
    best
}

impl From<u128> for Address {
    fn from(value: u128) -> Self {
        Address { value }
    }
}

impl From<Address> for u128 {
    fn from(address: Address) -> Self {
        address.value
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Self {
        Address {
            value: u128::from(addr),
        }
    }
}

impl From<Address> for Ipv6Addr {
    fn from(address: Address) -> Self {
        Ipv6Addr::from(address.value)
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.canonical())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::parse(&s)
            .map_err(|e| de::Error::custom(format!("invalid IPv6 address {s}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_loopback_and_unspecified() {
        assert_eq!(Address::parse("::1").unwrap().value(), 1);
        assert_eq!(Address::parse("::").unwrap().value(), 0);
    }

    #[test]
    fn test_parse_full_address() {
        let addr = Address::parse("2001:0db8:85a3:0000:0000:8a2e:0370:7334").unwrap();
        assert_eq!(addr.value(), 0x20010db885a3000000008a2e03707334);
    }

    #[test]
    fn test_parse_compressed() {
        let addr = Address::parse("2001:db8::1").unwrap();
        assert_eq!(addr.value(), 0x20010db8000000000000000000000001);
        let addr = Address::parse("fe80::").unwrap();
        assert_eq!(addr.value(), 0xfe80 << 112);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Address::parse(""), Err(ParseError::Empty));
        assert_eq!(
            Address::parse("g:1::"),
            Err(ParseError::InvalidCharacter('g'))
        );
        assert_eq!(
            Address::parse("2001:db8::1%eth0"),
            Err(ParseError::InvalidCharacter('%'))
        );
        assert_eq!(
            Address::parse("1:2:3:4:5:6:7:8:9"),
            Err(ParseError::SegmentCount(9))
        );
        assert_eq!(
            Address::parse("1::2::3"),
            Err(ParseError::MultipleDoubleColon)
        );
        assert_eq!(
            Address::parse("1:2:3:4::5:6:7:8:9"),
            Err(ParseError::TooManySegments)
        );
        assert_eq!(Address::parse("1:2:3"), Err(ParseError::SegmentCount(3)));
        assert_eq!(
            Address::parse("12345::"),
            Err(ParseError::SegmentTooLong("12345".to_string()))
        );
        assert!(Address::parse("::ffff:192.0.2.1").is_err());
    }

    #[test]
    fn test_parse_double_colon_filling_nothing() {
        // eight explicit groups around '::' leave no room but still parse
        let addr = Address::parse("1:2:3:4::5:6:7:8").unwrap();
        assert_eq!(addr.expanded(), "0001:0002:0003:0004:0005:0006:0007:0008");
    }

    #[test]
    fn test_is_valid() {
        assert!(Address::is_valid("2001:db8::"));
        assert!(!Address::is_valid("2001:db8:::x"));
    }

    #[test]
    fn test_expanded() {
        let addr = Address::parse("::1").unwrap();
        assert_eq!(addr.expanded(), "0000:0000:0000:0000:0000:0000:0000:0001");
        let max = Address::from(u128::MAX);
        assert_eq!(max.expanded(), "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff");
        assert_eq!(max.expanded().len(), 39);
    }

    #[test]
    fn test_canonical() {
        let addr = Address::parse("0000:0000:0000:0000:0000:0000:0000:0001").unwrap();
        assert_eq!(addr.canonical(), "::1");
        assert_eq!(Address::from(0).canonical(), "::");
        assert_eq!(Address::parse("2001:DB8::").unwrap().canonical(), "2001:db8::");
        assert_eq!(
            Address::from(u128::MAX).canonical(),
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"
        );
    }

    #[test]
    fn test_canonical_leftmost_tie() {
        let addr = Address::parse("2001:0db8:0000:0000:0001:0000:0000:0001").unwrap();
        assert_eq!(addr.canonical(), "2001:db8::1:0:0:1");
    }

    #[test]
    fn test_canonical_prefers_longer_run() {
        let addr = Address::parse("2001:0:0:1:0:0:0:1").unwrap();
        assert_eq!(addr.canonical(), "2001:0:0:1::1");
    }

    #[test]
    fn test_canonical_single_zero_not_compressed() {
        let addr = Address::parse("2001:db8:0:1:1:1:1:1").unwrap();
        assert_eq!(addr.canonical(), "2001:db8:0:1:1:1:1:1");
    }

    #[test]
    fn test_round_trip_samples() {
        let samples = [
            0u128,
            1,
            u128::MAX,
            0x20010db8000000000000000000000001,
            0x00010000000000000000000000000000,
            0xfe800000000000000000000000000000,
            0x0000ffff00000000ffff00000000ffff,
        ];
        for value in samples {
            let addr = Address::from(value);
            assert_eq!(Address::parse(&addr.canonical()).unwrap(), addr);
            assert_eq!(Address::parse(&addr.expanded()).unwrap(), addr);
            assert!(addr.canonical().matches("::").count() <= 1);
        }
    }

    /// Clear every group whose bit is set in `zero_mask`, to get long and
    /// short zero runs into the generated values.
    fn with_zero_groups(value: u128, zero_mask: u8) -> u128 {
        (0..SEGMENTS).fold(value, |acc, i| {
            if zero_mask & (1 << i) != 0 {
                acc & !(0xffff_u128 << (i * 16))
            } else {
                acc
            }
        })
    }

    /// Number of groups hidden behind `::` in canonical text.
    fn compressed_groups(canonical: &str) -> usize {
        if !canonical.contains("::") {
            return 0;
        }
        let explicit = canonical.split(':').filter(|g| !g.is_empty()).count();
        SEGMENTS - explicit
    }

    fn check_text_forms(addr: Address) -> Result<(), proptest::test_runner::TestCaseError> {
        let canonical = addr.canonical();
        let expanded = addr.expanded();

        prop_assert_eq!(Address::parse(&canonical).unwrap(), addr);
        prop_assert_eq!(Address::parse(&expanded).unwrap(), addr);
        prop_assert_eq!(expanded.len(), 39);
        prop_assert!(expanded.split(':').all(|g| g.len() == 4));
        prop_assert!(canonical.matches("::").count() <= 1);
        prop_assert_eq!(canonical.to_lowercase(), canonical.clone());

        let (_, longest) = longest_zero_run(&addr.segments());
        let hidden = compressed_groups(&canonical);
        prop_assert_ne!(hidden, 1);
        if longest >= 2 {
            prop_assert_eq!(hidden, longest);
        } else {
            prop_assert_eq!(hidden, 0);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn test_text_forms_any_value(value in any::<u128>()) {
            check_text_forms(Address::from(value))?;
        }

        #[test]
        fn test_text_forms_with_zero_groups(value in any::<u128>(), zero_mask in any::<u8>()) {
            check_text_forms(Address::from(with_zero_groups(value, zero_mask)))?;
        }
    }

    #[test]
    fn test_binary() {
        let addr = Address::parse("::1").unwrap();
        let binary = addr.binary();
        assert_eq!(binary.len(), 128);
        assert!(binary.ends_with("01"));
        assert!(binary[..127].chars().all(|c| c == '0'));
    }

    #[test]
    fn test_std_conversion() {
        let std_addr: Ipv6Addr = "2001:db8::1".parse().unwrap();
        let addr = Address::from(std_addr);
        assert_eq!(addr, Address::parse("2001:db8::1").unwrap());
        assert_eq!(Ipv6Addr::from(addr), std_addr);
    }

    #[test]
    fn test_serde() {
        let addr = Address::parse("2001:0DB8::0001").unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"2001:db8::1\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
        assert!(serde_json::from_str::<Address>("\"1::2::3\"").is_err());
    }
}
