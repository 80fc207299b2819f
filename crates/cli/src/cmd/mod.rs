pub mod calc;
pub mod output;
