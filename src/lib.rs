//! IPv6 address toolkit.
//!
//! Parsing and RFC5952 formatting, classification, CIDR ranges,
//! IPv4 transition addresses and reverse DNS names. All operations are pure.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use serde::Serialize;

use crate::models::{Address, AddressCategory, Subnet};

/// Everything shown for a single address.
#[derive(Serialize, Debug, Clone)]
pub struct AddressReport {
    pub canonical: String,
    pub expanded: String,
    pub category: AddressCategory,
    pub binary: String,
    pub reverse_dns: String,
}

impl AddressReport {
    pub fn new(address: &Address) -> Self {
        AddressReport {
            canonical: address.canonical(),
            expanded: address.expanded(),
            category: address.category(),
            binary: address.binary(),
            reverse_dns: address.reverse_dns(),
        }
    }
}

/// Range summary of a subnet; the host count is decimal text since it can
/// exceed 2^64.
#[derive(Serialize, Debug, Clone)]
pub struct SubnetReport {
    pub subnet: Subnet,
    pub network: Address,
    pub broadcast: Address,
    pub host_count: String,
}

impl SubnetReport {
    pub fn new(subnet: &Subnet) -> Self {
        SubnetReport {
            subnet: *subnet,
            network: subnet.network(),
            broadcast: subnet.broadcast(),
            host_count: subnet.host_count().to_string(),
        }
    }
}

/// Parse `text` and build its [`AddressReport`].
pub fn inspect_address(text: &str) -> Result<AddressReport, error::ParseError> {
    let address = Address::parse(text.trim())?;
    Ok(AddressReport::new(&address))
}

/// Parse `text` and `prefix_len` into a [`SubnetReport`].
pub fn inspect_subnet(text: &str, prefix_len: i64) -> Result<SubnetReport, error::SubnetError> {
    let address = Address::parse(text.trim())?;
    let subnet = Subnet::new(address, prefix_len)?;
    Ok(SubnetReport::new(&subnet))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_address() {
        let report = inspect_address(" 2001:DB8::1 ").unwrap();
        assert_eq!(report.canonical, "2001:db8::1");
        assert_eq!(report.category, AddressCategory::GlobalUnicast);
        assert!(report.reverse_dns.ends_with(".ip6.arpa"));
        assert!(inspect_address("1::2::3").is_err());
    }

    #[test]
    fn test_inspect_subnet() {
        let report = inspect_subnet("2001:db8::1", 64).unwrap();
        assert_eq!(report.network.canonical(), "2001:db8::");
        assert_eq!(report.host_count, "18446744073709551616");
        assert!(inspect_subnet("2001:db8::1", 129).is_err());
    }

    #[test]
    fn test_report_json() {
        let report = inspect_subnet("2001:db8::", 126).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["subnet"], "2001:db8::/126");
        assert_eq!(json["broadcast"], "2001:db8::3");
        assert_eq!(json["host_count"], "4");
    }
}
