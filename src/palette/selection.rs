//! Selection state machine
//!
//! Tracks which visible item is selected, by identity. Navigation wraps in both
//! directions; a selection that is absent or no longer visible counts as index
//! 0 for the wrap math.

use crate::palette::item::{Item, ItemId};

/// The selected item, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Selected(ItemId),
}

impl Selection {
    /// Select the first item of `visible`, or nothing when it is empty
    pub fn first_of(visible: &[Item]) -> Self {
        visible
            .first()
            .map_or(Self::None, |item| Self::Selected(item.id()))
    }

    /// Get the selected id
    pub fn id(&self) -> Option<ItemId> {
        match self {
            Self::None => None,
            Self::Selected(id) => Some(*id),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Position of the selection within `visible`
    pub fn index_in(&self, visible: &[Item]) -> Option<usize> {
        let id = self.id()?;
        visible.iter().position(|item| item.id() == id)
    }

    /// Move to the next item, wrapping to the start
    pub fn next(self, visible: &[Item]) -> Self {
        if visible.is_empty() {
            return self;
        }

        let index = self.index_in(visible).unwrap_or(0);
        Self::Selected(visible[(index + 1) % visible.len()].id())
    }

    /// Move to the previous item, wrapping to the end
    pub fn previous(self, visible: &[Item]) -> Self {
        if visible.is_empty() {
            return self;
        }

        let index = self.index_in(visible).unwrap_or(0);
        Self::Selected(visible[(index + visible.len() - 1) % visible.len()].id())
    }

    /// Select `id` if it is visible; otherwise keep the current selection
    pub fn hover(self, id: ItemId, visible: &[Item]) -> Self {
        if visible.iter().any(|item| item.id() == id) {
            Self::Selected(id)
        } else {
            self
        }
    }

    /// Check the membership invariant against `visible`
    pub fn is_consistent_with(&self, visible: &[Item]) -> bool {
        match self {
            Self::None => visible.is_empty(),
            Self::Selected(_) => self.index_in(visible).is_some(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> Vec<Item> {
        vec![Item::new("a"), Item::new("b"), Item::new("c")]
    }

    #[test]
    fn test_first_of() {
        let items = three();

        assert_eq!(Selection::first_of(&items), Selection::Selected(items[0].id()));
        assert_eq!(Selection::first_of(&[]), Selection::None);
    }

    #[test]
    fn test_next_wraps_to_start() {
        let items = three();
        let selection = Selection::Selected(items[2].id());

        assert_eq!(selection.next(&items).index_in(&items), Some(0));
    }

    #[test]
    fn test_previous_wraps_to_end() {
        let items = three();
        let selection = Selection::Selected(items[0].id());

        assert_eq!(selection.previous(&items).index_in(&items), Some(2));
    }

    #[test]
    fn test_next_and_previous_step() {
        let items = three();
        let selection = Selection::first_of(&items);

        let forward = selection.next(&items);
        assert_eq!(forward.index_in(&items), Some(1));
        assert_eq!(forward.previous(&items).index_in(&items), Some(0));
    }

    #[test]
    fn test_single_item_wraps_to_itself() {
        let items = vec![Item::new("only")];
        let selection = Selection::first_of(&items);

        assert_eq!(selection.next(&items), selection);
        assert_eq!(selection.previous(&items), selection);
    }

    #[test]
    fn test_navigation_on_empty_list_is_noop() {
        assert_eq!(Selection::None.next(&[]), Selection::None);
        assert_eq!(Selection::None.previous(&[]), Selection::None);
    }

    #[test]
    fn test_missing_selection_counts_as_index_zero() {
        let items = three();

        assert_eq!(Selection::None.next(&items).index_in(&items), Some(1));
        assert_eq!(Selection::None.previous(&items).index_in(&items), Some(2));

        let stale = Selection::Selected(ItemId::new());
        assert_eq!(stale.next(&items).index_in(&items), Some(1));
        assert_eq!(stale.previous(&items).index_in(&items), Some(2));
    }

    #[test]
    fn test_hover_selects_visible_item() {
        let items = three();
        let selection = Selection::first_of(&items).hover(items[2].id(), &items);

        assert_eq!(selection.index_in(&items), Some(2));
    }

    #[test]
    fn test_hover_ignores_unknown_item() {
        let items = three();
        let selection = Selection::first_of(&items);

        assert_eq!(selection.hover(ItemId::new(), &items), selection);
    }

    #[test]
    fn test_consistency() {
        let items = three();

        assert!(Selection::first_of(&items).is_consistent_with(&items));
        assert!(Selection::None.is_consistent_with(&[]));
        assert!(!Selection::None.is_consistent_with(&items));
        assert!(!Selection::Selected(ItemId::new()).is_consistent_with(&items));
    }
}
