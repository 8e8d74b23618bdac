//! kbar - keyboard-first command palette
//!
//! The search, filtering and selection logic behind a command palette: the
//! user opens an overlay, types a query, moves a highlighted selection with
//! the arrow keys and activates an item with Enter. Rendering is left to the
//! host; this crate decides what is visible, what is selected and when an
//! item fires.
//!
//! # Architecture
//!
//! - [`palette`] - items, prefix matching, the selection state machine and
//!   the [`palette::CommandPalette`] wrapper that runs actions
//! - [`core`] - configuration and error types
//! - [`cli`] - command-line interface (only used by the binary)
//!
//! # Example Usage
//!
//! ```rust
//! use kbar::palette::{Catalog, CommandPalette, Item, PaletteOptions};
//!
//! let catalog = Catalog::new(vec![Item::new("apple"), Item::new("banana"), Item::new("apricot")])
//!     .with_provider(|query| {
//!         if query == "ap" {
//!             vec![Item::new("apple pie").subtitle("Suggestion")]
//!         } else {
//!             Vec::new()
//!         }
//!     });
//! let options = PaletteOptions::default().default_items(vec![Item::new("Recent")]);
//! let mut palette = CommandPalette::new(catalog, options);
//!
//! palette.open();
//! assert_eq!(palette.visible()[0].title(), "Recent");
//!
//! palette.set_query("ap");
//! let titles: Vec<&str> = palette.visible().iter().map(Item::title).collect();
//! assert_eq!(titles, ["apple", "apricot", "apple pie"]);
//!
//! palette.select_previous();
//! assert_eq!(palette.selected().map(Item::title), Some("apple pie"));
//! ```

pub mod cli;
pub mod core;
pub mod palette;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
