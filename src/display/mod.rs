//! Terminal formatting for CLI output

pub mod analysis;
pub mod format;
pub mod investment;
