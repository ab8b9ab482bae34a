//! CSV output for address lists.

use crate::models::Address;

/// Quote a CSV field when it contains a comma or double quote.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') {
        // enclose in quotes and double any embedded quote
        let escaped = input.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        input.to_string()
    }
}

/// Single `Address` column CSV, canonical form, newline separated.
pub fn addresses_to_csv(addresses: &[Address]) -> String {
    let mut out = String::from("Address\n");
    for addr in addresses {
        out.push_str(&escape_csv_field(&addr.canonical()));
        out.push('\n');
    }
    out
}
