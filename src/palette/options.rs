//! Palette options
//!
//! Runtime options for a [`crate::palette::CommandPalette`]. Most of them are
//! display hints for the host; only `default_items` and `match_subtitle`
//! change what the filter produces.

use crate::core::config::PaletteSettings;
use crate::core::error::Result;
use crate::palette::item::Item;
use crate::palette::keys::KeyCombination;

/// Options for one palette instance
#[derive(Debug, Clone)]
pub struct PaletteOptions {
    /// How many rows the host should show at once (does not affect filtering)
    pub max_items_shown: usize,

    /// Items shown while the query is empty
    pub default_items: Vec<Item>,

    /// Text shown in the empty search field
    pub placeholder_text: String,

    /// Whether rows carry an image
    pub show_images: bool,

    /// Image used for items without their own
    pub default_image: String,

    /// Match the subtitle as well as the title
    pub match_subtitle: bool,

    /// Shortcut that opens the palette
    pub activation_key: Option<KeyCombination>,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            max_items_shown: 6,
            default_items: Vec::new(),
            placeholder_text: "Search".to_string(),
            show_images: true,
            default_image: "circle.fill".to_string(),
            match_subtitle: false,
            activation_key: KeyCombination::parse("cmd+k").ok(),
        }
    }
}

impl PaletteOptions {
    /// Build options from the `[palette]` config section
    pub fn from_settings(settings: &PaletteSettings) -> Result<Self> {
        let activation_key = match settings.activation_key.trim() {
            "" => None,
            key => Some(KeyCombination::parse(key)?),
        };

        Ok(Self {
            max_items_shown: settings.max_items_shown,
            default_items: Vec::new(),
            placeholder_text: settings.placeholder_text.clone(),
            show_images: settings.show_images,
            default_image: settings.default_image.clone(),
            match_subtitle: settings.match_subtitle,
            activation_key,
        })
    }

    /// Set the items shown for an empty query
    pub fn default_items(mut self, items: Vec<Item>) -> Self {
        self.default_items = items;
        self
    }

    /// Set the placeholder text
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text = text.into();
        self
    }

    /// Set the number of rows shown
    pub fn max_items_shown(mut self, max: usize) -> Self {
        self.max_items_shown = max;
        self
    }

    /// Enable or disable images
    pub fn show_images(mut self, show: bool) -> Self {
        self.show_images = show;
        self
    }

    /// Enable or disable subtitle matching
    pub fn match_subtitle(mut self, enabled: bool) -> Self {
        self.match_subtitle = enabled;
        self
    }

    /// Set or remove the activation shortcut
    pub fn activation_key(mut self, key: Option<KeyCombination>) -> Self {
        self.activation_key = key;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::PaletteError;
    use crate::palette::keys::{KeyCode, Modifiers};

    #[test]
    fn test_defaults() {
        let options = PaletteOptions::default();

        assert_eq!(options.max_items_shown, 6);
        assert_eq!(options.placeholder_text, "Search");
        assert!(options.show_images);
        assert!(!options.match_subtitle);
        assert_eq!(
            options.activation_key,
            Some(KeyCombination::new(KeyCode::Char('k'), Modifiers::META))
        );
    }

    #[test]
    fn test_from_settings() {
        let settings = PaletteSettings {
            max_items_shown: 5,
            placeholder_text: "Type a number to get started".to_string(),
            show_images: false,
            activation_key: "ctrl+space".to_string(),
            match_subtitle: true,
            ..PaletteSettings::default()
        };

        let options = PaletteOptions::from_settings(&settings).unwrap();

        assert_eq!(options.max_items_shown, 5);
        assert_eq!(options.placeholder_text, "Type a number to get started");
        assert!(!options.show_images);
        assert!(options.match_subtitle);
        assert_eq!(
            options.activation_key,
            Some(KeyCombination::new(KeyCode::Char(' '), Modifiers::CTRL))
        );
    }

    #[test]
    fn test_empty_activation_key_disables_shortcut() {
        let settings = PaletteSettings {
            activation_key: String::new(),
            ..PaletteSettings::default()
        };

        let options = PaletteOptions::from_settings(&settings).unwrap();

        assert!(options.activation_key.is_none());
    }

    #[test]
    fn test_invalid_activation_key() {
        let settings = PaletteSettings {
            activation_key: "hyper+k".to_string(),
            ..PaletteSettings::default()
        };

        let result = PaletteOptions::from_settings(&settings);

        assert!(matches!(result, Err(PaletteError::InvalidKeybinding(_))));
    }
}
