//! Layover CLI library.
//!
//! Output formatting and terminal helpers shared by the `layover-cli` binary.

pub mod output;
pub mod terminal;
