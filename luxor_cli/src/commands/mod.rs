//! CLI subcommand implementations.

pub mod call;
pub mod groups;
pub mod themes;
