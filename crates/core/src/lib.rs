#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::cast_possible_wrap)]

//! Core library for agecalc: birth-date parsing, age computation in whole
//! years and months, and the session state machine the UI shell drives.
//!
//! Everything here is pure with respect to the clock: callers pass the
//! reference "today" date explicitly.

pub mod age;
pub mod date;
pub mod session;

#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
