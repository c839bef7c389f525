//! CLI commands

pub mod config;
pub mod context;
pub mod explain;
