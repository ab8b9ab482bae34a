//! Sequential address generation.

use crate::models::Address;

/// Up to `count` consecutive addresses starting at `start`.
///
/// The sequence ends at `ffff:...:ffff` instead of wrapping to `::`.
pub fn bulk_sequence(start: Address, count: usize) -> impl Iterator<Item = Address> {
    std::iter::successors(Some(start), |addr| {
        addr.value().checked_add(1).map(Address::from)
    })
    .take(count)
}

/// Canonical text of [`bulk_sequence`].
pub fn bulk_canonical(start: Address, count: usize) -> Vec<String> {
    bulk_sequence(start, count).map(|a| a.canonical()).collect()
}
