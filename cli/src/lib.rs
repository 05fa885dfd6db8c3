//! CLI utilities for yomiage.
//!
//! This crate provides common utilities for CLI applications.

pub mod config;
pub mod output;

pub use config::{Config, ConfigError, Context};
pub use output::{format_bytes, Output, OutputFormat};
