// Page text sources - a live PDF or a directory of split page files
pub mod pdf_source;
pub mod split_directory;

pub use pdf_source::PdfSource;
pub use split_directory::SplitDirectory;

use crate::types::Result;
use std::path::{Path, PathBuf};

/// "Given a 1-based page number, return its raw text"
pub trait PageTextSource {
    /// Number of pages available, page numbers run `1..=page_count()`
    fn page_count(&self) -> u32;

    fn page_text(&self, page: u32) -> Result<String>;

    /// File identifier recorded for a page in vocabulary reports
    fn page_label(&self, page: u32) -> String;

    /// Full path of the file a page's text lives in
    fn page_path(&self, page: u32) -> PathBuf;

    /// Where the pages come from
    fn location(&self) -> &Path;
}

/// Open `path` as a split directory if it is one, otherwise as a PDF
pub fn open_source(path: &Path) -> Result<Box<dyn PageTextSource>> {
    if path.is_dir() {
        Ok(Box::new(SplitDirectory::open(path)?))
    } else {
        Ok(Box::new(PdfSource::open(path)?))
    }
}
