//! Birth-date input parsing.

pub mod parser;

pub use parser::{ParseDateError, parse_date};
