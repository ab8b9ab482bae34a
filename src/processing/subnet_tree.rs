//! Hierarchical subnet planning.
//!
//! Stateless enumeration of the child blocks one level below a subnet.
//! Tree widgets keep their own expanded/collapsed state keyed by
//! [`Subnet::key`].

use crate::config::{PlannerConfig, MAX_FANOUT_BITS_LIMIT};
use crate::models::{Address, Subnet, MAX_LENGTH};

/// Child blocks of `subnet` at the next breakpoint depth.
///
/// Children start at the subnet base as given (the caller passes an aligned
/// base) and are `2^(128 - next)` addresses apart. Empty when no deeper
/// breakpoint exists or the step is wider than `config.max_fanout_bits`.
pub fn child_blocks(subnet: &Subnet, config: &PlannerConfig) -> Vec<Subnet> {
    let current = subnet.prefix_len();
    let next = match config.next_breakpoint(current) {
        Some(next) if next <= MAX_LENGTH => next,
        _ => return vec![],
    };

    let delta = next - current;
    if delta > config.max_fanout_bits.min(MAX_FANOUT_BITS_LIMIT) {
        log::debug!(
            "child_blocks({subnet}): step /{current} -> /{next} exceeds {} bits, not enumerated",
            config.max_fanout_bits
        );
        return vec![];
    }

    // next <= 128 and next > current, so the shift stays below 128
    let block_size: u128 = 1 << (MAX_LENGTH - next);
    let count: u32 = 1 << delta;
    let start = subnet.base().value();

    (0..count)
        .map(|i| {
            let addr = Address::from(start.wrapping_add(block_size.wrapping_mul(u128::from(i))));
            Subnet::with_valid_prefix(addr, next)
        })
        .collect()
}
