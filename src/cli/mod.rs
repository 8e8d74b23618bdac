//! CLI module for the kbar binary
//!
//! Argument parsing, command handlers and plain-text output.
//!
//! # Submodules
//!
//! - `args` - Command-line argument definitions using clap
//! - `commands` - Command handler implementations
//! - `output` - Palette rendering and the console/file log writer

pub mod args;
pub mod commands;
pub mod output;

// Re-export commonly used types for convenience
pub use args::{Args, Commands};
pub use commands::run_command;
pub use output::{render_palette, DualWriter};
