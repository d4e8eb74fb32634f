// Command orchestration - wires page sources, range parsing and extraction together.
// Everything here returns data; printing is left to the binary.
use crate::page_range::{PageSet, PageSpan, RangeParser};
use crate::pdf_extraction::{PageTextSource, PdfSource, SplitDirectory};
use crate::report::VocabularyReport;
use crate::sequencer::split_file_name;
use crate::types::{Result, VocabError};
use crate::vocabulary::VocabularyExtractor;
use std::fs;
use std::path::{Path, PathBuf};

/// Banner width used by `read-pages`
pub const BANNER_WIDTH: usize = 50;

/// Text of one page, or every page under `--- Page N ---` headers
pub fn extract_text(source: &dyn PageTextSource, page: Option<u32>) -> Result<String> {
    let count = source.page_count();
    let mut text = String::new();

    match page {
        Some(page) => {
            if page < 1 || page > count {
                return Err(VocabError::InvalidPage { page, max: count });
            }
            text.push_str(&source.page_text(page)?);
            text.push('\n');
        }
        None => {
            for page in 1..=count {
                text.push_str(&format!("\n--- Page {page} ---\n"));
                text.push_str(&source.page_text(page)?);
                text.push('\n');
            }
        }
    }
    Ok(text)
}

#[derive(Debug, Default)]
pub struct SplitSummary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

/// Resolve which pages to act on. No expression means every page; an
/// expression that selects nothing is an error, as is any page past the end.
pub fn select_pages(expression: Option<&str>, parser: &RangeParser, page_count: u32) -> Result<PageSet> {
    let Some(expression) = expression else {
        return Ok(PageSet::all(page_count));
    };
    let pages = parser.with_max_page(page_count).parse(expression)?;
    if pages.is_empty() {
        return Err(VocabError::NoPagesSelected);
    }
    pages.validate(page_count)?;
    Ok(pages)
}

/// Write each selected page's text to `{stem}_page_{n}.txt` in `output_dir`.
/// A page that fails to write is recorded and the rest carry on.
pub fn split_pdf(
    source: &PdfSource,
    output_dir: &Path,
    expression: Option<&str>,
    parser: &RangeParser,
) -> Result<SplitSummary> {
    let pages = select_pages(expression, parser, source.page_count())?;
    fs::create_dir_all(output_dir)?;

    let stem = source.stem();
    let mut summary = SplitSummary::default();

    for page in pages.iter() {
        let text = source.page_text(page)?;
        let path = output_dir.join(split_file_name(&stem, page));
        match fs::write(&path, text) {
            Ok(()) => {
                tracing::debug!("wrote page {} to {}", page, path.display());
                summary.written.push(path);
            }
            Err(e) => {
                tracing::warn!("failed to write {}: {}", path.display(), e);
                summary.failed.push((path, e.to_string()));
            }
        }
    }

    Ok(summary)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Content { page: u32, file: String, text: String },
    OutOfRange { pages: PageSpan, max: u32 },
    Unreadable { page: u32, file: String, error: String },
}

impl PageView {
    /// Banner + content, matching what `read-pages` prints to stdout
    pub fn render(&self) -> Option<String> {
        let PageView::Content { page, file, text } = self else {
            return None;
        };
        let rule = "=".repeat(BANNER_WIDTH);
        let body = if text.trim().is_empty() {
            "(Empty page)"
        } else {
            text.as_str()
        };
        Some(format!("\n{rule}\nPage {page}: {file}\n{rule}\n{body}"))
    }

    /// Warning line for pages that could not be shown
    pub fn warning(&self) -> Option<String> {
        match self {
            PageView::Content { .. } => None,
            PageView::OutOfRange { pages, max } if pages.is_single() => {
                Some(format!("Warning: Page {pages} is out of range (1-{max})"))
            }
            PageView::OutOfRange { pages, max } => {
                Some(format!("Warning: Pages {pages} are out of range (1-{max})"))
            }
            PageView::Unreadable { file, error, .. } => Some(format!("Error reading {file}: {error}")),
        }
    }

    fn first_page(&self) -> u32 {
        match self {
            PageView::Content { page, .. } | PageView::Unreadable { page, .. } => *page,
            PageView::OutOfRange { pages, .. } => pages.start,
        }
    }
}

/// Read selected pages out of a split directory. Pages past the end become
/// warnings rather than errors.
pub fn read_pages(dir: &Path, expression: &str, parser: &RangeParser) -> Result<Vec<PageView>> {
    if !dir.is_dir() {
        return Err(VocabError::MissingDirectory(dir.to_path_buf()));
    }
    let source = SplitDirectory::open(dir)?;
    let max = source.page_count();
    let pages = parser.with_max_page(max).parse(expression)?;
    if pages.is_empty() {
        return Err(VocabError::NoPagesSelected);
    }

    let mut views: Vec<PageView> = pages
        .iter()
        .filter(|&page| page >= 1 && page <= max)
        .map(|page| {
            let file = source.page_label(page);
            match source.page_text(page) {
                Ok(text) => PageView::Content { page, file, text },
                Err(e) => PageView::Unreadable {
                    page,
                    file,
                    error: e.to_string(),
                },
            }
        })
        .collect();
    views.extend(
        pages
            .out_of_range(max)
            .into_iter()
            .map(|span| PageView::OutOfRange { pages: span, max }),
    );
    views.sort_by_key(PageView::first_page);

    Ok(views)
}

/// Run the extractor over the selected pages of `source` and collect a report.
/// Requested pages the source does not have are skipped with a warning.
pub fn build_vocabulary_report(
    source: &dyn PageTextSource,
    expression: Option<&str>,
    parser: &RangeParser,
    extractor: &VocabularyExtractor,
) -> Result<VocabularyReport> {
    let count = source.page_count();
    let pages = match expression {
        Some(expression) => {
            let pages = parser.with_max_page(count).parse(expression)?;
            if pages.is_empty() {
                return Err(VocabError::NoPagesSelected);
            }
            pages
        }
        None => PageSet::all(count),
    };

    let mut report = VocabularyReport::new(
        extractor.pattern(),
        expression.unwrap_or("all"),
        source.location(),
    );

    for span in pages.out_of_range(count) {
        tracing::warn!("page {} is out of range (1-{}), skipping", span, count);
    }

    for page in pages.iter().filter(|&page| page >= 1 && page <= count) {
        let text = match source.page_text(page) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("could not read page {}: {}", page, e);
                continue;
            }
        };
        let entries = extractor.extract(&text);
        tracing::debug!("page {}: {} matches", page, entries.len());
        report.record_page(
            page,
            source.page_path(page).display().to_string(),
            source.page_label(page),
            &entries,
        );
    }

    Ok(report)
}
