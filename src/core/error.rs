//! Error types for kbar
//!
//! The palette's own decision logic cannot fail; these errors come from the
//! edges: configuration, catalog files and keybinding strings.

use crate::core::config::ConfigError;
use crate::palette::keys::KeyParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for kbar
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Configuration could not be loaded or saved
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A keybinding string could not be parsed
    #[error("Invalid keybinding: {0}")]
    InvalidKeybinding(#[from] KeyParseError),

    /// Catalog file could not be read
    #[error("Failed to read catalog '{}': {}", .0.display(), .1)]
    CatalogRead(PathBuf, String),

    /// Catalog file is not valid JSON
    #[error("Failed to parse catalog '{}': {}", .0.display(), .1)]
    CatalogParse(PathBuf, String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PaletteError>;
