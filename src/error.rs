//! Error kinds returned by the address library.
//!
//! Every operation either returns a complete value or one of these errors;
//! nothing is logged or retried here, the caller decides how to surface it.

use thiserror::Error;

/// Malformed IPv6 address text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty address")]
    Empty,
    #[error("invalid character '{0}' in address")]
    InvalidCharacter(char),
    #[error("multiple '::' found")]
    MultipleDoubleColon,
    #[error("too many segments")]
    TooManySegments,
    #[error("incorrect number of segments: expected 8, got {0}")]
    SegmentCount(usize),
    #[error("segment too long: '{0}'")]
    SegmentTooLong(String),
    #[error("segment out of range: '{0}'")]
    SegmentOutOfRange(String),
}

/// Invalid subnet definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    #[error("invalid prefix length {0}, must be within 0..=128")]
    InvalidPrefixLength(i64),
    #[error("invalid address/prefix notation: '{0}'")]
    Malformed(String),
    #[error(transparent)]
    Address(#[from] ParseError),
}

/// Malformed dotted-quad IPv4 text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Ipv4FormatError {
    #[error("invalid IPv4 address: '{0}'")]
    Malformed(String),
    #[error("invalid IPv4 segment: '{0}'")]
    OctetOutOfRange(String),
}

/// Malformed 48-bit MAC address text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacFormatError {
    #[error("invalid MAC address: '{0}'")]
    Malformed(String),
}

/// Failure while synthesizing a transition address.
///
/// Keeps the IPv4 step apart from the final re-parse so callers can tell a
/// bad IPv4 input from a bad ISATAP prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error(transparent)]
    Ipv4(#[from] Ipv4FormatError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
