//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use colored::Colorize;

use crate::models::Subnet;
use crate::{AddressReport, SubnetReport};

/// Format a label as a right-aligned field followed by `: `.
///
/// # Arguments
/// * `label` - The label to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(label: T, width: usize) -> String {
    let label = label.to_string();
    if label.len() >= width {
        format!("{label}: ")
    } else {
        format!("{label:>width$}: ")
    }
}

const LABEL_WIDTH: usize = 12;

/// Render the details of one address, one line per form.
pub fn render_address(report: &AddressReport) -> String {
    [
        format!("{}{}", format_field("canonical", LABEL_WIDTH), report.canonical.green()),
        format!("{}{}", format_field("expanded", LABEL_WIDTH), report.expanded),
        format!("{}{}", format_field("category", LABEL_WIDTH), report.category.to_string().cyan()),
        format!("{}{}", format_field("binary", LABEL_WIDTH), report.binary),
        format!("{}{}", format_field("reverse dns", LABEL_WIDTH), report.reverse_dns),
    ]
    .join("\n")
}

/// Render network, broadcast and host count of a subnet.
pub fn render_subnet(report: &SubnetReport) -> String {
    [
        format!("{}{}", format_field("subnet", LABEL_WIDTH), report.subnet.to_string().green()),
        format!("{}{}", format_field("network", LABEL_WIDTH), report.network),
        format!("{}{}", format_field("broadcast", LABEL_WIDTH), report.broadcast),
        format!("{}{}", format_field("hosts", LABEL_WIDTH), report.host_count),
    ]
    .join("\n")
}

/// Render child blocks, one `addr/len` per line.
pub fn render_children(parent: &Subnet, children: &[Subnet]) -> String {
    if children.is_empty() {
        return format!("{} {}", parent.key(), "(no child blocks)".yellow());
    }
    let mut lines = vec![format!("{}", parent.key().green())];
    lines.extend(children.iter().map(|c| format!("  └─ {}", c.key())));
    lines.join("\n")
}
