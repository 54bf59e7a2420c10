//! Command handlers for armory CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod checklist;
pub mod configure;
pub mod convert;
