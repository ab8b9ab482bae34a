//! Output formatting for the command line tool.
//!
//! - [`csv`] - CSV lists of addresses
//! - [`terminal`] - Terminal output with colors

mod csv;
mod terminal;

pub use csv::{addresses_to_csv, escape_csv_field};
pub use terminal::{format_field, render_address, render_children, render_subnet};
