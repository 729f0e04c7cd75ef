//! Side-effecting helpers: configuration, table files, site inputs.

pub mod config;
pub mod inputs;
pub mod table;
