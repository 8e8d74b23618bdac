//! Core module
//!
//! Configuration management and error types shared by the palette and the CLI.
//!
//! # Submodules
//!
//! - `config` - Configuration loading, saving, and management
//! - `error` - Error types and result aliases

pub mod config;
pub mod error;
