//! Text Matcher - Prefix Token Search
//!
//! Decides whether a candidate text matches a query. Both sides are split into
//! lowercase words on the space character, and the candidate matches when every
//! query word is a prefix of at least one candidate word.
//!
//! # Example
//!
//! ```rust
//! use kbar::palette::matcher::TextMatcher;
//!
//! let mut matcher = TextMatcher::new();
//! assert!(matcher.matches("Fix Grammar", "gram"));
//! assert!(!matcher.matches("Fix Grammar", "fix spell"));
//! ```

use log::trace;
use std::collections::HashMap;
use std::rc::Rc;

// =============================================================================
// Tokenizer
// =============================================================================

/// Split text into lowercase words on the single space character.
///
/// Repeated spaces produce empty words and nothing is trimmed. The empty string
/// has no words at all.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    text.to_lowercase().split(' ').map(str::to_string).collect()
}

/// Returns true if every query word prefixes at least one text word
pub fn covers(text_words: &[String], query_words: &[String]) -> bool {
    query_words.iter().all(|query_word| {
        text_words
            .iter()
            .any(|text_word| text_word.starts_with(query_word.as_str()))
    })
}

// =============================================================================
// WordCache
// =============================================================================

/// Hit/miss counters for a [`WordCache`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Memoized tokenization keyed by the exact text.
///
/// Entries are never evicted; the number of distinct texts is bounded by the
/// catalog plus the queries typed into one palette.
#[derive(Debug, Default)]
pub struct WordCache {
    entries: HashMap<String, Rc<[String]>>,
    stats: CacheStats,
}

impl WordCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the words of `text`, tokenizing on first use
    pub fn words(&mut self, text: &str) -> Rc<[String]> {
        if let Some(words) = self.entries.get(text) {
            self.stats.hits += 1;
            return Rc::clone(words);
        }

        self.stats.misses += 1;
        trace!("word cache miss for {:?}", text);

        let words: Rc<[String]> = tokenize(text).into();
        self.entries.insert(text.to_string(), Rc::clone(&words));
        words
    }

    /// Number of distinct texts cached
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current hit/miss counters
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drop every cached entry and reset the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }
}

// =============================================================================
// TextMatcher
// =============================================================================

/// Prefix-covering matcher backed by a [`WordCache`]
#[derive(Debug, Default)]
pub struct TextMatcher {
    cache: WordCache,
}

impl TextMatcher {
    /// Create a matcher with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize through the cache
    pub fn words(&mut self, text: &str) -> Rc<[String]> {
        self.cache.words(text)
    }

    /// Check whether `text` matches `query`
    pub fn matches(&mut self, text: &str, query: &str) -> bool {
        let query_words = self.cache.words(query);
        self.matches_words(text, &query_words)
    }

    /// Check `text` against an already tokenized query
    pub fn matches_words(&mut self, text: &str, query_words: &[String]) -> bool {
        if query_words.is_empty() {
            return true;
        }

        let text_words = self.cache.words(text);
        covers(&text_words, query_words)
    }

    /// Get the underlying cache
    pub fn cache(&self) -> &WordCache {
        &self.cache
    }
}

// =============================================================================
// Tests
// =============================================================================
