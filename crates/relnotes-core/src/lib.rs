//! Relnotes Core - Core library for changelog rendering
//!
//! This crate provides the configuration system and error taxonomy for
//! the relnotes tool.

pub mod config;
pub mod error;

pub use error::{ConfigError, ExtractError, RelnotesError, Result};
