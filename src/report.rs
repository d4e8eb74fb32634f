// Vocabulary report - the JSON document written by `pdfvocab vocab`
// Field names are the ones the dictionary importer reads.
use crate::types::Result;
use crate::vocabulary::VocabularyEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyReport {
    pub metadata: ReportMetadata,
    /// Keyed by page number, serialized as string keys in ascending order
    pub pages: BTreeMap<u32, PageReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub regex_pattern: String,
    pub pages_requested: String,
    pub pages_found: Vec<u32>,
    pub total_matches: usize,
    pub timestamp: String,
    /// Split directory, or the PDF itself for PDF sources
    pub input_directory: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageReport {
    pub file_path: String,
    pub file_name: String,
    pub match_count: usize,
    pub vocabulary: Vec<MatchRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub word: String,
    pub pronunciation: String,
    pub full_match: String,
}

impl From<&VocabularyEntry> for MatchRecord {
    fn from(entry: &VocabularyEntry) -> Self {
        Self {
            word: entry.word().to_string(),
            pronunciation: entry.pronunciation().to_string(),
            full_match: entry.rendered(),
        }
    }
}

impl VocabularyReport {
    pub fn new(pattern: &str, pages_requested: &str, source: &Path) -> Self {
        Self {
            metadata: ReportMetadata {
                regex_pattern: pattern.to_string(),
                pages_requested: pages_requested.to_string(),
                pages_found: Vec::new(),
                total_matches: 0,
                timestamp: chrono::Local::now().to_rfc3339(),
                input_directory: source.display().to_string(),
            },
            pages: BTreeMap::new(),
        }
    }

    /// Record one page's entries. A page with no entries still counts as found.
    pub fn record_page(
        &mut self,
        page: u32,
        file_path: String,
        file_name: String,
        entries: &[VocabularyEntry],
    ) {
        let vocabulary: Vec<MatchRecord> = entries.iter().map(MatchRecord::from).collect();
        self.pages.insert(
            page,
            PageReport {
                file_path,
                file_name,
                match_count: vocabulary.len(),
                vocabulary,
            },
        );
        self.metadata.pages_found = self.pages.keys().copied().collect();
        self.metadata.total_matches = self.pages.values().map(|p| p.match_count).sum();
    }

    pub fn total_matches(&self) -> usize {
        self.metadata.total_matches
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
