//! CLI command implementations.

pub mod menu;
pub mod parse;
pub mod shell;
