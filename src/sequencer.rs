// PAGE SEQUENCING - order split text files by the page number in their name
use crate::types::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("digit pattern compiles"));

pub const SPLIT_EXTENSION: &str = "txt";

/// Value of the last run of digits in `stem`, or 0 when there is none.
/// `page_2` sorts before `page_10`. Runs too large for u64 saturate.
pub fn page_number_of(stem: &str) -> u64 {
    DIGIT_RUN
        .find_iter(stem)
        .last()
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// File name for one split page: `{stem}_page_{page}.txt`
pub fn split_file_name(stem: &str, page: u32) -> String {
    format!("{stem}_page_{page}.{SPLIT_EXTENSION}")
}

/// Every `*.txt` file in `dir`, in page order (ties broken by file name)
pub fn sequence_text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_text = path
            .extension()
            .is_some_and(|ext| ext == SPLIT_EXTENSION);
        if is_text && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by_cached_key(|path| {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        (page_number_of(&stem), path.file_name().map(|n| n.to_os_string()))
    });

    tracing::debug!("found {} text files in {}", files.len(), dir.display());
    Ok(files)
}
