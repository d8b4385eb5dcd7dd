//! Command handlers for easyammo CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod apply;
pub mod colors;
pub mod resolve;
pub mod validate;
