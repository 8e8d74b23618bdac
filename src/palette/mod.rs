//! Palette Module - keyboard-first command palette
//!
//! A search-activated overlay: the user types a query, sees the matching
//! items, moves the selection with the keyboard and activates one. This module
//! holds the decision logic only; drawing rows, text fields and animations is
//! up to the host, which feeds events in and renders what comes out.
//!
//! # Architecture
//!
//! 1. **TextMatcher** - prefix-token matching with a per-palette word cache
//! 2. **Catalog** - static items plus an optional suggestion provider
//! 3. **reduce** - the filter/selection state machine
//! 4. **CommandPalette** - owns the state, runs item actions and notifies
//!    subscribers when the palette opens or closes
//!
//! # Example Usage
//!
//! ```rust
//! use kbar::palette::{Catalog, CommandPalette, Item, PaletteOptions};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("Fix Grammar"),
//!     Item::new("Fix Spelling"),
//!     Item::new("Emphasize"),
//! ]);
//! let mut palette = CommandPalette::new(catalog, PaletteOptions::default());
//!
//! palette.open();
//! palette.set_query("fix");
//! assert_eq!(palette.visible().len(), 2);
//!
//! palette.select_next();
//! let activation = palette.commit().unwrap();
//! assert_eq!(activation.title, "Fix Spelling");
//! assert!(!palette.is_open());
//! ```

pub mod catalog;
pub mod item;
pub mod keys;
pub mod matcher;
pub mod options;
pub mod selection;
pub mod state;

pub use catalog::{Catalog, CatalogEntry, CatalogFile, SuggestionError};
pub use item::{Item, ItemId};
pub use keys::{KeyCode, KeyCombination, Modifiers};
pub use matcher::TextMatcher;
pub use options::PaletteOptions;
pub use selection::Selection;
pub use state::{PaletteEvent, PaletteState, QUICK_SELECT_SLOTS};

use log::info;
use state::SearchContext;

// =============================================================================
// Activation
// =============================================================================

/// Signal emitted when an item is activated and the palette closes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub item_id: ItemId,
    pub title: String,
}

/// One row as the host should draw it
#[derive(Debug, Clone)]
pub struct Row<'a> {
    pub index: usize,
    pub item: &'a Item,
    pub selected: bool,
    /// Image to draw, if images are shown
    pub image: Option<&'a str>,
    /// First nine rows only: "⏎" when selected, otherwise "⌘ n"
    pub shortcut: Option<String>,
}

// =============================================================================
// CommandPalette
// =============================================================================

type ActiveListener = Box<dyn FnMut(bool)>;
type ActivationListener = Box<dyn FnMut(&Activation)>;

/// A command palette instance
pub struct CommandPalette {
    state: PaletteState,
    catalog: Catalog,
    options: PaletteOptions,
    matcher: TextMatcher,
    active_listeners: Vec<ActiveListener>,
    activation_listeners: Vec<ActivationListener>,
}

impl CommandPalette {
    /// Create a closed palette.
    ///
    /// A closed palette ignores every event except `Open`, so hosts call
    /// [`CommandPalette::open`] before feeding it queries or navigation.
    pub fn new(catalog: Catalog, options: PaletteOptions) -> Self {
        Self {
            state: PaletteState::default(),
            catalog,
            options,
            matcher: TextMatcher::new(),
            active_listeners: Vec::new(),
            activation_listeners: Vec::new(),
        }
    }

    /// Apply one event; returns the activation it caused, if any
    pub fn dispatch(&mut self, event: PaletteEvent) -> Option<Activation> {
        let was_active = self.state.active;

        let mut ctx = SearchContext {
            catalog: &self.catalog,
            default_items: &self.options.default_items,
            match_subtitle: self.options.match_subtitle,
            matcher: &mut self.matcher,
        };
        let transition = state::reduce(std::mem::take(&mut self.state), &event, &mut ctx);
        self.state = transition.state;

        if was_active != self.state.active {
            info!(
                "palette {}",
                if self.state.active { "opened" } else { "closed" }
            );
            for listener in &mut self.active_listeners {
                listener(self.state.active);
            }
        }

        let item = transition.activate?;
        let activation = Activation {
            item_id: item.id(),
            title: item.title().to_string(),
        };
        info!("activating {:?} ({})", activation.title, activation.item_id);

        item.invoke();
        for listener in &mut self.activation_listeners {
            listener(&activation);
        }

        Some(activation)
    }

    /// Translate a key and dispatch it; returns false if the key means nothing here
    pub fn handle_key(&mut self, combination: &KeyCombination) -> bool {
        let event = keys::event_for_key(
            combination,
            self.state.active,
            self.options.activation_key.as_ref(),
        );

        match event {
            Some(event) => {
                self.dispatch(event);
                true
            }
            None => false,
        }
    }

    /// Replace the empty-query items; takes effect on the next re-filter
    pub fn set_default_items(&mut self, items: Vec<Item>) {
        self.options.default_items = items;
    }

    /// Be told whenever the palette opens (`true`) or closes (`false`)
    pub fn on_active_change(&mut self, listener: impl FnMut(bool) + 'static) {
        self.active_listeners.push(Box::new(listener));
    }

    /// Be told about every activation
    pub fn on_activate(&mut self, listener: impl FnMut(&Activation) + 'static) {
        self.activation_listeners.push(Box::new(listener));
    }

    // -------------------------------------------------------------------------
    // Event shorthands
    // -------------------------------------------------------------------------

    /// Open the palette with an empty query
    pub fn open(&mut self) {
        self.dispatch(PaletteEvent::Open);
    }

    /// Close without activating anything
    pub fn dismiss(&mut self) {
        self.dispatch(PaletteEvent::Dismiss);
    }

    /// Open when closed, dismiss when open
    pub fn toggle(&mut self) {
        if self.state.active {
            self.dismiss();
        } else {
            self.open();
        }
    }

    /// Set the search query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.dispatch(PaletteEvent::QueryChanged(query.into()));
    }

    pub fn select_next(&mut self) {
        self.dispatch(PaletteEvent::SelectNext);
    }

    pub fn select_previous(&mut self) {
        self.dispatch(PaletteEvent::SelectPrevious);
    }

    pub fn hover(&mut self, id: ItemId) {
        self.dispatch(PaletteEvent::Hover(id));
    }

    pub fn tap(&mut self, id: ItemId) -> Option<Activation> {
        self.dispatch(PaletteEvent::Tap(id))
    }

    /// Activate the selection
    pub fn commit(&mut self) -> Option<Activation> {
        self.dispatch(PaletteEvent::Commit)
    }

    /// Activate the visible item in `slot` (0-based, first nine only)
    pub fn quick_select(&mut self, slot: usize) -> Option<Activation> {
        self.dispatch(PaletteEvent::QuickSelect(slot))
    }

    /// Escape: clear the query or close
    pub fn cancel(&mut self) {
        self.dispatch(PaletteEvent::Cancel);
    }

    // -------------------------------------------------------------------------
    // Outputs
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.state.active
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    /// Get the full visible list
    pub fn visible(&self) -> &[Item] {
        &self.state.visible
    }

    /// Get the rows the host should show (at most `max_items_shown`)
    pub fn shown_items(&self) -> &[Item] {
        let end = self.options.max_items_shown.min(self.state.visible.len());
        &self.state.visible[..end]
    }

    pub fn selection(&self) -> Selection {
        self.state.selection
    }

    pub fn selected(&self) -> Option<&Item> {
        self.state.selected()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected_index()
    }

    /// Get a snapshot of the state
    pub fn state(&self) -> &PaletteState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> &PaletteOptions {
        &self.options
    }

    pub fn placeholder(&self) -> &str {
        &self.options.placeholder_text
    }

    /// Image for `item`, falling back to the default; none when images are off
    pub fn display_image<'a>(&'a self, item: &'a Item) -> Option<&'a str> {
        if !self.options.show_images {
            return None;
        }
        Some(item.image_name().unwrap_or(self.options.default_image.as_str()))
    }

    /// Shortcut label for the row at `index`
    pub fn shortcut_label(&self, index: usize) -> Option<String> {
        if index >= QUICK_SELECT_SLOTS {
            return None;
        }
        if self.selected_index() == Some(index) {
            Some("⏎".to_string())
        } else {
            Some(format!("⌘ {}", index + 1))
        }
    }

    /// Rows the host should draw, in order
    pub fn rows(&self) -> Vec<Row<'_>> {
        let selected = self.selected_index();

        self.shown_items()
            .iter()
            .enumerate()
            .map(|(index, item)| Row {
                index,
                item,
                selected: selected == Some(index),
                image: self.display_image(item),
                shortcut: self.shortcut_label(index),
            })
            .collect()
    }

    /// Get the word cache statistics
    pub fn cache_stats(&self) -> matcher::CacheStats {
        self.matcher.cache().stats()
    }
}

impl std::fmt::Debug for CommandPalette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandPalette")
            .field("state", &self.state)
            .field("catalog", &self.catalog)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
