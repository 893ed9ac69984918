//! Subcommand handlers for the `ansiout` binary.

pub mod cat;
pub mod completions;
pub mod cursor_query;
pub mod output;
pub mod wait;
