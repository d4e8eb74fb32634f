// lopdf-backed page source - Pure Rust PDF reading
use super::PageTextSource;
use crate::sequencer::split_file_name;
use crate::types::{Result, VocabError};
use lopdf::{Document, Object};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct PdfSource {
    path: PathBuf,
    document: Document,
}

impl PdfSource {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(VocabError::MissingFile(path.to_path_buf()));
        }
        let document = Document::load(path)?;
        tracing::debug!(
            "loaded {} ({} pages)",
            path.display(),
            document.get_pages().len()
        );
        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    pub fn is_encrypted(&self) -> bool {
        self.document.trailer.get(b"Encrypt").is_ok()
    }

    /// File name without extension, used to name split pages
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string())
    }

    /// Entries of the trailer's Info dictionary as `(key, value)` strings
    pub fn metadata(&self) -> Vec<(String, String)> {
        let info = match self.document.trailer.get(b"Info") {
            Ok(Object::Reference(id)) => self.document.get_dictionary(*id).ok(),
            Ok(Object::Dictionary(dict)) => Some(dict),
            _ => None,
        };

        let Some(info) = info else {
            return Vec::new();
        };

        info.iter()
            .map(|(key, value)| {
                (
                    format!("/{}", String::from_utf8_lossy(key)),
                    self.describe_value(value),
                )
            })
            .collect()
    }

    fn describe_value(&self, value: &Object) -> String {
        match value {
            Object::String(bytes, _) => decode_pdf_string(bytes),
            Object::Name(name) => format!("/{}", String::from_utf8_lossy(name)),
            Object::Integer(i) => i.to_string(),
            Object::Real(f) => f.to_string(),
            Object::Boolean(b) => b.to_string(),
            Object::Reference(id) => match self.document.get_object(*id) {
                Ok(Object::Reference(_)) | Err(_) => format!("{} {} R", id.0, id.1),
                Ok(inner) => self.describe_value(inner),
            },
            other => format!("{other:?}"),
        }
    }
}

/// The `info` summary: file, page count, encryption and Info dictionary
impl fmt::Display for PdfSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File: {}", self.path.display())?;
        writeln!(f, "Pages: {}", self.page_count())?;
        writeln!(f, "Encrypted: {}", if self.is_encrypted() { "Yes" } else { "No" })?;

        let metadata = self.metadata();
        if metadata.is_empty() {
            return writeln!(f, "\nNo metadata available");
        }
        writeln!(f, "\nMetadata:")?;
        for (key, value) in metadata {
            writeln!(f, "  {key}: {value}")?;
        }
        Ok(())
    }
}

impl PageTextSource for PdfSource {
    fn page_count(&self) -> u32 {
        self.document.get_pages().len() as u32
    }

    fn page_text(&self, page: u32) -> Result<String> {
        if page < 1 || page > self.page_count() {
            return Err(VocabError::PageNotFound {
                page,
                source_path: self.path.clone(),
            });
        }
        Ok(self.document.extract_text(&[page])?)
    }

    fn page_label(&self, page: u32) -> String {
        split_file_name(&self.stem(), page)
    }

    /// Every page lives in the PDF itself
    fn page_path(&self, _page: u32) -> PathBuf {
        self.path.clone()
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

/// PDF text strings are UTF-16BE when they start with a byte order mark,
/// otherwise treat them as (near enough) Latin-1 / ASCII.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else if let Ok(s) = std::str::from_utf8(bytes) {
        s.to_string()
    } else {
        bytes.iter().map(|&b| b as char).collect()
    }
}
