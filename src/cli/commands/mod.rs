//! Command implementations for the wordhunt CLI
//!
//! Each command is organized into its own module.

pub mod compare;
pub mod config;
