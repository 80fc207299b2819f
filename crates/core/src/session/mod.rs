//! Calculator session state: the single stateful shell around the pure
//! parsing and age computation.

pub mod calculator;
pub mod types;

pub use calculator::{CalcError, Calculator};
pub use types::HistoryEntry;
