//! Shared helpers for CLI commands

pub mod config;
pub mod document;
pub mod logging;
