// Split page directory - previously written `*_page_N.txt` files
use super::PageTextSource;
use crate::sequencer::sequence_text_files;
use crate::types::{Result, VocabError};
use std::fs;
use std::path::{Path, PathBuf};

/// Page N is the N-th text file in page-number order
#[derive(Debug, Clone)]
pub struct SplitDirectory {
    dir: PathBuf,
    files: Vec<PathBuf>,
}

impl SplitDirectory {
    pub fn open(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(VocabError::MissingDirectory(dir.to_path_buf()));
        }
        let files = sequence_text_files(dir)?;
        if files.is_empty() {
            return Err(VocabError::NoTextFiles(dir.to_path_buf()));
        }
        Ok(Self {
            dir: dir.to_path_buf(),
            files,
        })
    }

    pub fn file_for(&self, page: u32) -> Option<&Path> {
        let index = usize::try_from(page).ok()?.checked_sub(1)?;
        self.files.get(index).map(PathBuf::as_path)
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl PageTextSource for SplitDirectory {
    fn page_count(&self) -> u32 {
        self.files.len() as u32
    }

    fn page_text(&self, page: u32) -> Result<String> {
        let path = self.file_for(page).ok_or_else(|| VocabError::PageNotFound {
            page,
            source_path: self.dir.clone(),
        })?;
        Ok(fs::read_to_string(path)?)
    }

    fn page_label(&self, page: u32) -> String {
        self.file_for(page)
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn page_path(&self, page: u32) -> PathBuf {
        self.file_for(page)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.dir.clone())
    }

    fn location(&self) -> &Path {
        &self.dir
    }
}
