//! CLI module
//!
//! Command-line interface for decorating JSON pages.
//!
//! # Commands
//!
//! - `render` - Decorate a JSON page with its total count and page links
//! - `inspect` - Show the pagination state resolved from a JSON page
//! - `name` - Show the collection field name derived from a type name

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
