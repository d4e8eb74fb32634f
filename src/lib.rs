//! Split PDFs into per-page text and pull `word /pronunciation/` vocabulary
//! entries out of the pages.
//!
//! The two core pieces are [`page_range`] (turns `"1,3,5-8"` into a sorted page
//! set) and [`vocabulary`] (matches entries, including pronunciations that wrap
//! across lines). Both are pure functions of their input.
pub mod commands;
pub mod config;
pub mod logging;
pub mod page_range;
pub mod pdf_extraction;
pub mod report;
pub mod sequencer;
pub mod types;
pub mod vocabulary;

pub use page_range::{parse_page_ranges, PageSet, PageSpan, ParsePolicy, RangeParser};
pub use sequencer::page_number_of;
pub use types::{Result, VocabError};
pub use vocabulary::{extract_vocabulary, VocabularyEntry, VocabularyExtractor};
