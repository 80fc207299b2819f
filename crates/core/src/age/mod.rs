//! Elapsed-age computation.

pub mod computer;

pub use computer::{Age, compute_age};
