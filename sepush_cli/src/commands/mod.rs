//! CLI subcommand implementations.

pub mod areas;
pub mod status;
pub mod topics;
