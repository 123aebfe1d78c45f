//! On-disk file formats and synthetic-instance generation.

mod input;
mod output;

pub use input::{format_input, generate_input, parse_input};
pub use output::write_output;
