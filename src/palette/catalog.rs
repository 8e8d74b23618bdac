//! Catalog - static items plus dynamic suggestions
//!
//! The catalog holds the caller's ordered item list and an optional provider
//! that synthesizes extra items from the raw query (for example "create a new
//! entry named X"). The provider runs on every non-empty query change, so its
//! failures never reach the user: they are logged and treated as "no extra
//! items this keystroke".
//!
//! Catalogs can also be loaded from a JSON file of [`CatalogEntry`] records.

use crate::core::error::{PaletteError, Result};
use crate::palette::item::{Item, ItemId};
use crate::palette::matcher::TextMatcher;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::rc::Rc;
use thiserror::Error;
use uuid::Uuid;

/// Failure reported by a suggestion provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("suggestion provider failed: {0}")]
pub struct SuggestionError(pub String);

impl SuggestionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Builds extra items from the raw query
pub type SuggestionProvider = Rc<dyn Fn(&str) -> std::result::Result<Vec<Item>, SuggestionError>>;

// =============================================================================
// Catalog
// =============================================================================

/// Static item list plus an optional suggestion provider
#[derive(Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    provider: Option<SuggestionProvider>,
}

impl Catalog {
    /// Create a catalog from an ordered item list
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            provider: None,
        }
    }

    /// Attach a provider that cannot fail
    pub fn with_provider(self, provider: impl Fn(&str) -> Vec<Item> + 'static) -> Self {
        self.with_fallible_provider(move |query| Ok(provider(query)))
    }

    /// Attach a provider that may fail
    pub fn with_fallible_provider(
        mut self,
        provider: impl Fn(&str) -> std::result::Result<Vec<Item>, SuggestionError> + 'static,
    ) -> Self {
        self.provider = Some(Rc::new(provider));
        self
    }

    /// Get all static items in catalog order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Find a static item by id
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Check if a provider is attached
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Static items matching `query`, in catalog order
    pub fn matching(
        &self,
        query: &str,
        matcher: &mut TextMatcher,
        include_subtitle: bool,
    ) -> Vec<Item> {
        let query_words = matcher.words(query);

        self.items
            .iter()
            .filter(|item| {
                if include_subtitle && item.subtitle_text().is_some() {
                    matcher.matches_words(&item.search_text(true), &query_words)
                } else {
                    matcher.matches_words(item.title(), &query_words)
                }
            })
            .cloned()
            .collect()
    }

    /// Extra items from the provider; empty when there is none or it fails
    pub fn suggestions(&self, query: &str) -> Vec<Item> {
        let Some(provider) = &self.provider else {
            return Vec::new();
        };

        match provider(query) {
            Ok(items) => {
                debug!("provider returned {} item(s) for {:?}", items.len(), query);
                items
            }
            Err(e) => {
                warn!("ignoring suggestions for {:?}: {}", query, e);
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("items", &self.items)
            .field("provider", &self.provider.is_some())
            .finish()
    }
}

// =============================================================================
// Catalog files
// =============================================================================

/// One item as stored in a catalog file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable id; generated when absent
    #[serde(default)]
    pub id: Option<Uuid>,

    pub title: String,

    #[serde(default)]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub badge: Option<String>,
}

impl CatalogEntry {
    /// Build an item; the caller supplies the action
    pub fn to_item(&self) -> Item {
        let mut item = Item::new(self.title.clone());
        if let Some(id) = self.id {
            item = item.with_id(ItemId::from_uuid(id));
        }
        if let Some(subtitle) = &self.subtitle {
            item = item.subtitle(subtitle.clone());
        }
        if let Some(image) = &self.image {
            item = item.image(image.clone());
        }
        if let Some(badge) = &self.badge {
            item = item.badge(badge.clone());
        }
        item
    }
}

/// JSON catalog file: static items plus the empty-query defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    pub items: Vec<CatalogEntry>,
    pub default_items: Vec<CatalogEntry>,
}

impl CatalogFile {
    /// Load a catalog file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .map_err(|e| PaletteError::CatalogRead(path.to_path_buf(), e.to_string()))?;

        Self::from_json(&content)
            .map_err(|e| PaletteError::CatalogParse(path.to_path_buf(), e.to_string()))
    }

    /// Parse a catalog from JSON text
    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fruits() -> Catalog {
        Catalog::new(vec![
            Item::new("apple"),
            Item::new("banana"),
            Item::new("apricot"),
        ])
    }

    fn titles(items: &[Item]) -> Vec<&str> {
        items.iter().map(|item| item.title()).collect()
    }

    #[test]
    fn test_matching_preserves_catalog_order() {
        let catalog = fruits();
        let mut matcher = TextMatcher::new();

        let matched = catalog.matching("ap", &mut matcher, false);

        assert_eq!(titles(&matched), vec!["apple", "apricot"]);
        assert_eq!(matched[0], catalog.items()[0]);
        assert_eq!(matched[1], catalog.items()[2]);
    }

    #[test]
    fn test_matching_title_only_by_default() {
        let catalog = Catalog::new(vec![Item::new("Share").subtitle("Document")]);
        let mut matcher = TextMatcher::new();

        assert!(catalog.matching("doc", &mut matcher, false).is_empty());
        assert_eq!(catalog.matching("doc", &mut matcher, true).len(), 1);
        assert_eq!(catalog.matching("sha doc", &mut matcher, true).len(), 1);
    }

    #[test]
    fn test_suggestions_without_provider() {
        assert!(fruits().suggestions("x").is_empty());
        assert!(!fruits().has_provider());
    }

    #[test]
    fn test_suggestions_from_provider() {
        let catalog = fruits().with_provider(|query| vec![Item::new(format!("Create {query}"))]);

        let extra = catalog.suggestions("kiwi");

        assert_eq!(titles(&extra), vec!["Create kiwi"]);
    }

    #[test]
    fn test_failing_provider_yields_nothing() {
        let catalog =
            fruits().with_fallible_provider(|_| Err(SuggestionError::new("backend offline")));

        assert!(catalog.suggestions("kiwi").is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = fruits();
        let id = catalog.items()[1].id();

        assert_eq!(catalog.get(id).map(Item::title), Some("banana"));
        assert!(catalog.get(ItemId::new()).is_none());
    }

    #[test]
    fn test_catalog_entry_to_item() {
        let id = Uuid::new_v4();
        let entry = CatalogEntry {
            id: Some(id),
            title: "Fix Grammar".to_string(),
            subtitle: Some("Edit".to_string()),
            image: None,
            badge: Some("#".to_string()),
        };

        let item = entry.to_item();

        assert_eq!(item.id(), ItemId::from_uuid(id));
        assert_eq!(item.title(), "Fix Grammar");
        assert_eq!(item.subtitle_text(), Some("Edit"));
        assert_eq!(item.badge_text(), Some("#"));
    }

    #[test]
    fn test_catalog_file_from_json() {
        let json = r##"{
            "items": [{"title": "Fix Grammar"}, {"title": "Fix Spelling", "badge": "#"}],
            "default_items": [{"title": "Emphasize"}]
        }"##;

        let file = CatalogFile::from_json(json).unwrap();

        assert_eq!(file.items.len(), 2);
        assert_eq!(file.items[1].badge.as_deref(), Some("#"));
        assert_eq!(file.default_items[0].title, "Emphasize");
    }

    #[test]
    fn test_catalog_file_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{"items": [{{"title": "apple"}}]}}"#).unwrap();

        let loaded = CatalogFile::load(&path).unwrap();

        assert_eq!(loaded.items.len(), 1);
        assert!(loaded.default_items.is_empty());
    }

    #[test]
    fn test_catalog_file_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = CatalogFile::load(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(PaletteError::CatalogRead(_, _))));

        let path = dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();
        let bad = CatalogFile::load(&path);
        assert!(matches!(bad, Err(PaletteError::CatalogParse(_, _))));
    }
}
