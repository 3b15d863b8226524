//! Formatting helpers shared by the date and text crates.

mod data_formatters;

pub use data_formatters::{format_ordinal, ordinal_suffix, pad_two};
