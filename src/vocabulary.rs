// VOCABULARY EXTRACTION - "word /pronunciation/" pairs from page text
//
// Page text comes from naive extraction that drops horizontal layout, so a long
// pronunciation can wrap onto the following lines. Matching runs over the whole
// page with line anchors instead of line by line.
use crate::types::{Result, VocabError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Line start, a letter, non-slash word text, horizontal whitespace, then a
/// `/.../` span (newlines allowed inside) closed by `/` and trailing whitespace.
pub const DEFAULT_PATTERN: &str = r"(?m)^(\p{L}[^/\n]*?)[^\S\n]+/([^/]*?)/[^\S\n]*$";

static DEFAULT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_PATTERN).expect("default vocabulary pattern compiles"));

static WRAPPED_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\n\s*").expect("whitespace pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VocabularyEntry {
    word: String,
    pronunciation: String,
}

impl VocabularyEntry {
    /// Trims both parts and rejoins wrapped pronunciation lines.
    /// Returns `None` when either part ends up empty.
    pub fn new(word: &str, pronunciation: &str) -> Option<Self> {
        let word = word.trim();
        let pronunciation = WRAPPED_WHITESPACE.replace_all(pronunciation.trim(), " ");
        if word.is_empty() || pronunciation.is_empty() {
            return None;
        }
        Some(Self {
            word: word.to_string(),
            pronunciation: pronunciation.into_owned(),
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn pronunciation(&self) -> &str {
        &self.pronunciation
    }

    /// `word /pronunciation/`
    pub fn rendered(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VocabularyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} /{}/", self.word, self.pronunciation)
    }
}

/// Scans text for vocabulary entries. Holds no state between calls.
#[derive(Debug, Clone)]
pub struct VocabularyExtractor {
    pattern: Regex,
}

impl Default for VocabularyExtractor {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_REGEX.clone(),
        }
    }
}

impl VocabularyExtractor {
    /// Use a custom pattern. Group 1 is the word, group 2 the pronunciation.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)?;
        // captures_len counts the implicit whole-match group
        let groups = pattern.captures_len() - 1;
        if groups < 2 {
            return Err(VocabError::PatternGroups(groups));
        }
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Entries in document order
    pub fn entries<'a>(&'a self, text: &'a str) -> impl Iterator<Item = VocabularyEntry> + 'a {
        self.pattern.captures_iter(text).filter_map(|caps| {
            let word = caps.get(1).map_or("", |m| m.as_str());
            let pronunciation = caps.get(2).map_or("", |m| m.as_str());
            VocabularyEntry::new(word, pronunciation)
        })
    }

    pub fn extract(&self, text: &str) -> Vec<VocabularyEntry> {
        self.entries(text).collect()
    }
}

/// Extract with the default pattern
pub fn extract_vocabulary(text: &str) -> Vec<VocabularyEntry> {
    VocabularyExtractor::default().extract(text)
}
