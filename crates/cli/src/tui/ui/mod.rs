//! UI rendering modules.

mod form;
mod history;
mod layout;
mod result;
mod status;

pub use layout::draw;
