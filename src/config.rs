//! Planner settings and well-known constants.
//!
//! Defaults reproduce the /48 -> /52 -> /56 -> /64 planning hierarchy.
//! The binary may override them from the environment (after `dotenv`).

/// Default ISATAP base prefix.
pub const ISATAP_DEFAULT_PREFIX: &str = "fe80::";
/// NAT64 well-known prefix, `64:ff9b::/96`.
pub const NAT64_WELL_KNOWN_PREFIX: &str = "64:ff9b::";
/// 6to4 prefix group, `2002::/16`.
pub const SIX_TO_FOUR_PREFIX: &str = "2002";

/// Child depths used when drilling into a subnet.
pub const DEFAULT_BREAKPOINTS: [u8; 4] = [48, 52, 56, 64];
/// Largest prefix step enumerated at once, 2^8 = 256 children.
pub const DEFAULT_MAX_FANOUT_BITS: u8 = 8;
/// Hard ceiling on the fan-out cap regardless of configuration.
pub const MAX_FANOUT_BITS_LIMIT: u8 = 16;
/// Largest number of addresses generated in one bulk request.
pub const MAX_BULK_COUNT: usize = 1000;

const ENV_MAX_FANOUT_BITS: &str = "IPV6_TOOLKIT_MAX_FANOUT_BITS";
const ENV_BREAKPOINTS: &str = "IPV6_TOOLKIT_BREAKPOINTS";

/// Settings for hierarchical child-block enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Ascending prefix lengths to step through.
    pub breakpoints: Vec<u8>,
    /// Refuse steps wider than this many bits. A presentation cap, not a
    /// correctness limit.
    pub max_fanout_bits: u8,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            breakpoints: DEFAULT_BREAKPOINTS.to_vec(),
            max_fanout_bits: DEFAULT_MAX_FANOUT_BITS,
        }
    }
}

impl PlannerConfig {
    /// Defaults, overridden by the environment where set and well formed.
    pub fn from_env() -> Self {
        let max_fanout_bits = std::env::var(ENV_MAX_FANOUT_BITS).ok();
        let breakpoints = std::env::var(ENV_BREAKPOINTS).ok();
        PlannerConfig::from_values(max_fanout_bits.as_deref(), breakpoints.as_deref())
    }

    /// Build from raw setting values; malformed values keep the default.
    pub fn from_values(max_fanout_bits: Option<&str>, breakpoints: Option<&str>) -> Self {
        let mut config = PlannerConfig::default();

        if let Some(raw) = max_fanout_bits {
            match raw.trim().parse::<u8>() {
                Ok(bits) => config.max_fanout_bits = bits.min(MAX_FANOUT_BITS_LIMIT),
                Err(e) => log::warn!("Ignoring {ENV_MAX_FANOUT_BITS}={raw}: {e}"),
            }
        }

        if let Some(raw) = breakpoints {
            match parse_breakpoints(raw) {
                Some(list) => config.breakpoints = list,
                None => log::warn!("Ignoring {ENV_BREAKPOINTS}={raw}: expected ascending lengths <= 128"),
            }
        }

        log::debug!("PlannerConfig: {config:?}");
        config
    }

    /// The next prefix length strictly deeper than `prefix_len`, if any.
    pub fn next_breakpoint(&self, prefix_len: u8) -> Option<u8> {
        self.breakpoints.iter().copied().find(|b| *b > prefix_len)
    }
}

/// Limit a requested bulk count to `1..=MAX_BULK_COUNT`.
pub fn clamp_bulk_count(requested: usize) -> usize {
    let count = requested.clamp(1, MAX_BULK_COUNT);
    if count != requested {
        log::warn!("Bulk count {requested} out of range, using {count} (max {MAX_BULK_COUNT})");
    }
    count
}

/// Parse a comma-separated, strictly ascending list of prefix lengths.
fn parse_breakpoints(raw: &str) -> Option<Vec<u8>> {
    let list = raw
        .split(',')
        .map(|p| p.trim().parse::<u8>().ok())
        .collect::<Option<Vec<u8>>>()?;
    let ascending = list.windows(2).all(|w| w[0] < w[1]);
    if list.is_empty() || !ascending || list.iter().any(|b| *b > 128) {
        return None;
    }
    Some(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = PlannerConfig::default();
        assert_eq!(config.breakpoints, vec![48, 52, 56, 64]);
        assert_eq!(config.max_fanout_bits, 8);
    }

    #[test]
    fn test_next_breakpoint() {
        let config = PlannerConfig::default();
        assert_eq!(config.next_breakpoint(32), Some(48));
        assert_eq!(config.next_breakpoint(48), Some(52));
        assert_eq!(config.next_breakpoint(50), Some(52));
        assert_eq!(config.next_breakpoint(56), Some(64));
        assert_eq!(config.next_breakpoint(64), None);
        assert_eq!(config.next_breakpoint(100), None);
    }

    #[test]
    fn test_from_values() {
        let config = PlannerConfig::from_values(Some("12"), Some("32, 40,48"));
        assert_eq!(config.max_fanout_bits, 12);
        assert_eq!(config.breakpoints, vec![32, 40, 48]);

        let config = PlannerConfig::from_values(Some("99"), None);
        assert_eq!(config.max_fanout_bits, MAX_FANOUT_BITS_LIMIT);
    }

    #[test]
    fn test_clamp_bulk_count() {
        assert_eq!(clamp_bulk_count(10), 10);
        assert_eq!(clamp_bulk_count(MAX_BULK_COUNT), MAX_BULK_COUNT);
        assert_eq!(clamp_bulk_count(MAX_BULK_COUNT + 1), MAX_BULK_COUNT);
        assert_eq!(clamp_bulk_count(usize::MAX), MAX_BULK_COUNT);
        assert_eq!(clamp_bulk_count(0), 1);
    }

    #[test]
    fn test_from_values_malformed_keeps_default() {
        let config = PlannerConfig::from_values(Some("many"), Some("64,48"));
        assert_eq!(config, PlannerConfig::default());
        let config = PlannerConfig::from_values(None, Some("48,x"));
        assert_eq!(config, PlannerConfig::default());
        let config = PlannerConfig::from_values(None, Some("48,200"));
        assert_eq!(config, PlannerConfig::default());
    }
}
