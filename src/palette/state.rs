//! Palette state and its reducer
//!
//! [`reduce`] is the whole decision core: given the current [`PaletteState`]
//! and one [`PaletteEvent`], it computes the next state and, when an item was
//! picked, which item to activate. Running that item's action is left to the
//! caller (see [`crate::palette::CommandPalette`]), so the reducer itself never
//! touches host state.
//!
//! # Filtering
//!
//! Every query change recomputes the visible list from scratch:
//!
//! - empty query: the configured default items (not the catalog)
//! - otherwise: catalog items matching the query, in catalog order, followed
//!   by whatever the suggestion provider returns
//!
//! and the selection resets to the first visible item.

use crate::palette::catalog::Catalog;
use crate::palette::item::{Item, ItemId};
use crate::palette::matcher::TextMatcher;
use crate::palette::selection::Selection;
use log::{debug, warn};

/// Number of rows reachable through quick-select shortcuts
pub const QUICK_SELECT_SLOTS: usize = 9;

// =============================================================================
// Events
// =============================================================================

/// Everything a host can tell the palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEvent {
    /// Activation shortcut: reset the query and show the palette
    Open,
    /// The text field now holds this query
    QueryChanged(String),
    SelectNext,
    SelectPrevious,
    /// Pointer moved over a visible item
    Hover(ItemId),
    /// Pointer clicked a visible item
    Tap(ItemId),
    /// Accept the current selection
    Commit,
    /// Activate the visible item in this slot (0-based)
    QuickSelect(usize),
    /// Escape: clear the query, or close when it is already empty
    Cancel,
    /// Close without activating anything
    Dismiss,
}

// =============================================================================
// State
// =============================================================================

/// Observable palette state
#[derive(Debug, Clone, Default)]
pub struct PaletteState {
    pub active: bool,
    pub query: String,
    pub visible: Vec<Item>,
    pub selection: Selection,
}

impl PaletteState {
    /// Get the selected item
    pub fn selected(&self) -> Option<&Item> {
        let index = self.selection.index_in(&self.visible)?;
        self.visible.get(index)
    }

    /// Get the selected index
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.index_in(&self.visible)
    }

    fn visible_item(&self, id: ItemId) -> Option<&Item> {
        self.visible.iter().find(|item| item.id() == id)
    }

    /// Replace the query and recompute the visible list
    fn refilter(&mut self, query: String, ctx: &mut SearchContext<'_>) {
        self.visible = visible_items(&query, ctx);
        self.selection = Selection::first_of(&self.visible);
        self.query = query;
    }

    /// Close the palette and hand back `item` for activation
    fn activate(&mut self, item: Item) -> Option<Item> {
        self.active = false;
        Some(item)
    }
}

/// What the reducer needs besides the state itself
pub struct SearchContext<'a> {
    pub catalog: &'a Catalog,
    pub default_items: &'a [Item],
    pub match_subtitle: bool,
    pub matcher: &'a mut TextMatcher,
}

/// Result of one reducer step
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: PaletteState,
    /// Item whose action must run; the palette is already closed in `state`
    pub activate: Option<Item>,
}

// =============================================================================
// Reducer
// =============================================================================

/// Compute the visible list for `query`
pub fn visible_items(query: &str, ctx: &mut SearchContext<'_>) -> Vec<Item> {
    if query.is_empty() {
        return ctx.default_items.to_vec();
    }

    let mut visible = ctx
        .catalog
        .matching(query, ctx.matcher, ctx.match_subtitle);
    let matched = visible.len();
    visible.extend(ctx.catalog.suggestions(query));

    debug!(
        "query {:?}: {} catalog match(es), {} suggestion(s)",
        query,
        matched,
        visible.len() - matched
    );
    visible
}

/// Apply one event to the palette state.
///
/// Only `Open` is honored while the palette is inactive.
pub fn reduce(state: PaletteState, event: &PaletteEvent, ctx: &mut SearchContext<'_>) -> Transition {
    let mut state = state;
    let mut activate = None;

    if !state.active && *event != PaletteEvent::Open {
        debug!("ignoring {:?} while the palette is closed", event);
        return Transition { state, activate };
    }

    match event {
        PaletteEvent::Open => {
            state.active = true;
            state.refilter(String::new(), ctx);
        }
        PaletteEvent::QueryChanged(query) => {
            state.refilter(query.clone(), ctx);
        }
        PaletteEvent::SelectNext => {
            state.selection = state.selection.next(&state.visible);
        }
        PaletteEvent::SelectPrevious => {
            state.selection = state.selection.previous(&state.visible);
        }
        PaletteEvent::Hover(id) => {
            if state.visible_item(*id).is_some() {
                state.selection = state.selection.hover(*id, &state.visible);
            } else {
                warn!("hover on item {} which is not visible", id);
            }
        }
        PaletteEvent::Tap(id) => match state.visible_item(*id).cloned() {
            Some(item) => activate = state.activate(item),
            None => warn!("tap on item {} which is not visible", id),
        },
        PaletteEvent::Commit => {
            if let Some(item) = state.selected().cloned() {
                activate = state.activate(item);
            }
        }
        PaletteEvent::QuickSelect(slot) => {
            if *slot < QUICK_SELECT_SLOTS {
                if let Some(item) = state.visible.get(*slot).cloned() {
                    activate = state.activate(item);
                }
            }
        }
        PaletteEvent::Cancel => {
            if state.query.is_empty() {
                state.active = false;
            } else {
                state.refilter(String::new(), ctx);
            }
        }
        PaletteEvent::Dismiss => {
            state.active = false;
        }
    }

    debug_assert!(
        state.selection.is_consistent_with(&state.visible),
        "selection {:?} is not a visible item",
        state.selection
    );

    Transition { state, activate }
}

// =============================================================================
// Tests
// =============================================================================
