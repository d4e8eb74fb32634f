// End-to-end library tests: PDF -> split files -> vocabulary report
mod common;

use pdfvocab::commands::{build_vocabulary_report, extract_text, read_pages, split_pdf, PageView};
use pdfvocab::pdf_extraction::{open_source, PageTextSource, PdfSource, SplitDirectory};
use pdfvocab::{PageSpan, RangeParser, VocabError, VocabularyExtractor};
use tempfile::TempDir;

#[test]
fn reads_pages_and_metadata() {
    let dir = TempDir::new().unwrap();
    let source = PdfSource::open(&common::lexicon_pdf(dir.path())).unwrap();

    assert_eq!(source.page_count(), 3);
    assert!(!source.is_encrypted());
    assert!(source.page_text(1).unwrap().contains("apple /AP-uhl/"));
    assert_eq!(source.page_label(2), "lexicon_page_2.txt");

    let info = source.to_string();
    assert!(info.contains("Pages: 3"));
    assert!(info.contains("Encrypted: No"));
    assert!(info.contains("/Title: Test Lexicon"));
}

#[test]
fn extract_text_validates_page_number() {
    let dir = TempDir::new().unwrap();
    let source = PdfSource::open(&common::lexicon_pdf(dir.path())).unwrap();

    assert!(extract_text(&source, Some(2)).unwrap().contains("Chapter two"));
    assert!(matches!(
        extract_text(&source, Some(7)),
        Err(VocabError::InvalidPage { page: 7, max: 3 })
    ));
    let all = extract_text(&source, None).unwrap();
    assert!(all.contains("--- Page 3 ---"));
}

#[test]
fn split_then_extract_vocabulary() {
    let dir = TempDir::new().unwrap();
    let source = PdfSource::open(&common::lexicon_pdf(dir.path())).unwrap();
    let out = dir.path().join("pages");

    let summary = split_pdf(&source, &out, None, &RangeParser::default()).unwrap();
    assert_eq!(summary.written.len(), 3);
    assert!(summary.failed.is_empty());
    assert!(out.join("lexicon_page_3.txt").is_file());

    let split = SplitDirectory::open(&out).unwrap();
    let report = build_vocabulary_report(
        &split,
        Some("1-3"),
        &RangeParser::default(),
        &VocabularyExtractor::default(),
    )
    .unwrap();

    assert_eq!(report.metadata.pages_found, vec![1, 2, 3]);
    assert_eq!(report.total_matches(), 3);
    assert_eq!(report.pages[&1].file_name, "lexicon_page_1.txt");
    assert_eq!(
        report.pages[&1].file_path,
        out.join("lexicon_page_1.txt").display().to_string()
    );
    assert_eq!(report.pages[&1].vocabulary[1].word, "cherry");
    assert_eq!(report.pages[&2].match_count, 0);
    assert_eq!(report.pages[&3].vocabulary[0].pronunciation, "buh- NAN-uh");
    assert_eq!(report.pages[&3].vocabulary[0].full_match, "banana /buh- NAN-uh/");
}

#[test]
fn split_selected_pages_only() {
    let dir = TempDir::new().unwrap();
    let source = PdfSource::open(&common::lexicon_pdf(dir.path())).unwrap();
    let out = dir.path().join("pages");

    let summary = split_pdf(&source, &out, Some("3,1"), &RangeParser::default()).unwrap();
    assert_eq!(summary.written.len(), 2);
    assert!(out.join("lexicon_page_1.txt").is_file());
    assert!(!out.join("lexicon_page_2.txt").exists());
}

#[test]
fn split_rejects_bad_selections() {
    let dir = TempDir::new().unwrap();
    let source = PdfSource::open(&common::lexicon_pdf(dir.path())).unwrap();
    let out = dir.path().join("pages");

    assert!(matches!(
        split_pdf(&source, &out, Some("abc"), &RangeParser::default()),
        Err(VocabError::NoPagesSelected)
    ));
    match split_pdf(&source, &out, Some("2,5,9"), &RangeParser::default()) {
        Err(VocabError::OutOfRange { pages, max }) => {
            assert_eq!(pages, vec![PageSpan::single(5), PageSpan::single(9)]);
            assert_eq!(max, 3);
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert!(matches!(
        split_pdf(&source, &out, Some("1,x"), &RangeParser::strict()),
        Err(VocabError::MalformedRange { .. })
    ));
    assert!(!out.exists());
}

#[test]
fn vocabulary_straight_from_pdf() {
    let dir = TempDir::new().unwrap();
    let pdf = common::lexicon_pdf(dir.path());
    let source = open_source(&pdf).unwrap();

    let report = build_vocabulary_report(
        source.as_ref(),
        Some("1"),
        &RangeParser::default(),
        &VocabularyExtractor::default(),
    )
    .unwrap();
    assert_eq!(report.metadata.pages_found, vec![1]);
    assert_eq!(report.pages[&1].vocabulary[0].word, "apple");
    assert_eq!(report.pages[&1].file_name, "lexicon_page_1.txt");
    assert_eq!(report.pages[&1].file_path, pdf.display().to_string());
    assert_eq!(report.metadata.input_directory, pdf.display().to_string());
}

#[test]
fn read_pages_from_split_directory() {
    let dir = TempDir::new().unwrap();
    let split = common::split_dir(dir.path());

    let views = read_pages(&split, "3,1,4", &RangeParser::default()).unwrap();
    assert_eq!(views.len(), 3);
    assert_eq!(
        views[0],
        PageView::Content {
            page: 1,
            file: "book_page_1.txt".into(),
            text: "   \n".into(),
        }
    );
    assert!(views[0].render().unwrap().ends_with("(Empty page)"));
    match &views[1] {
        PageView::Content { file, text, .. } => {
            assert_eq!(file, "book_page_10.txt");
            assert!(text.starts_with("zebra"));
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert_eq!(
        views[2],
        PageView::OutOfRange {
            pages: PageSpan::single(4),
            max: 3,
        }
    );
}

#[test]
fn read_pages_with_huge_span() {
    let dir = TempDir::new().unwrap();
    let split = common::split_dir(dir.path());

    let views = read_pages(&split, "2-4000000000", &RangeParser::default()).unwrap();
    assert_eq!(views.len(), 3);
    assert!(matches!(&views[0], PageView::Content { page: 2, .. }));
    assert!(matches!(&views[1], PageView::Content { page: 3, .. }));
    assert_eq!(
        views[2],
        PageView::OutOfRange {
            pages: PageSpan::new(4, 4000000000),
            max: 3,
        }
    );
}

#[test]
fn read_pages_errors() {
    let dir = TempDir::new().unwrap();
    let split = common::split_dir(dir.path());

    assert!(matches!(
        read_pages(&dir.path().join("missing"), "1", &RangeParser::default()),
        Err(VocabError::MissingDirectory(_))
    ));
    assert!(matches!(
        read_pages(&split, "none", &RangeParser::default()),
        Err(VocabError::NoPagesSelected)
    ));
    let empty = dir.path().join("empty");
    std::fs::create_dir(&empty).unwrap();
    assert!(matches!(
        read_pages(&empty, "1", &RangeParser::default()),
        Err(VocabError::NoTextFiles(_))
    ));
}
