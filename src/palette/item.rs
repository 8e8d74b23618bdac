//! Palette items
//!
//! An [`Item`] is a searchable, activatable entry: a title, optional subtitle,
//! image and badge, and the callback run when the user picks it.

use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

// =============================================================================
// ItemId
// =============================================================================

/// Opaque identity of an item, used for selection tracking only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Item
// =============================================================================

/// Callback run when an item is activated
pub type ItemAction = Rc<dyn Fn()>;

/// A searchable, activatable palette entry
#[derive(Clone)]
pub struct Item {
    id: ItemId,
    title: String,
    subtitle: Option<String>,
    image: Option<String>,
    badge: Option<String>,
    action: ItemAction,
}

impl Item {
    /// Create an item with a fresh id and a no-op action
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            title: title.into(),
            subtitle: None,
            image: None,
            badge: None,
            action: Rc::new(|| {}),
        }
    }

    /// Use a specific id
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }

    /// Set the subtitle
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the image name
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the badge
    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Set the action run on activation
    pub fn action(mut self, action: impl Fn() + 'static) -> Self {
        self.action = Rc::new(action);
        self
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle_text(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn image_name(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn badge_text(&self) -> Option<&str> {
        self.badge.as_deref()
    }

    /// Run the item's action
    pub fn invoke(&self) {
        (self.action)();
    }

    /// Text the matcher sees for this item
    pub fn search_text(&self, include_subtitle: bool) -> String {
        match (&self.subtitle, include_subtitle) {
            (Some(subtitle), true) => format!("{} {}", self.title, subtitle),
            _ => self.title.clone(),
        }
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("image", &self.image)
            .field("badge", &self.badge)
            .finish_non_exhaustive()
    }
}

/// Items compare by identity only
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

// =============================================================================
// Tests
// =============================================================================
