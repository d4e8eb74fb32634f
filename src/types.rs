// Core error types for pdfvocab
use crate::page_range::{format_spans, PageSpan};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed page tokens: {}", .tokens.iter().map(|t| format!("{t:?}")).collect::<Vec<_>>().join(", "))]
    MalformedRange { tokens: Vec<String> },

    #[error("Pages [{}] are out of range (1-{max})", format_spans(.pages))]
    OutOfRange { pages: Vec<PageSpan>, max: u32 },

    #[error("Invalid vocabulary pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Vocabulary pattern needs at least two capture groups, found {0}")]
    PatternGroups(usize),

    #[error("Page {page} not found in {}", .source_path.display())]
    PageNotFound { page: u32, source_path: PathBuf },

    #[error("No valid page numbers provided")]
    NoPagesSelected,

    #[error("Invalid page number. Must be between 1 and {max}")]
    InvalidPage { page: u32, max: u32 },

    #[error("File '{}' does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error("Directory '{}' does not exist", .0.display())]
    MissingDirectory(PathBuf),

    #[error("No text files found in '{}'", .0.display())]
    NoTextFiles(PathBuf),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, VocabError>;
