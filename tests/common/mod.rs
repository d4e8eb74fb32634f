// Fixture builders shared by the integration tests
#![allow(dead_code)]
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::fs;
use std::path::{Path, PathBuf};

/// Write a PDF where each page shows the given lines, one BT/ET block per line
pub fn write_pdf(path: &Path, pages: &[&[&str]]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new(
                "Td",
                vec![72.into(), (720 - 16 * i as i64).into()],
            ));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal("Test Lexicon"),
    });
    doc.trailer.set("Info", info_id);

    doc.save(path).unwrap();
}

/// Three page lexicon: two entries, no entries, one wrapped entry
pub fn lexicon_pdf(dir: &Path) -> PathBuf {
    let path = dir.join("lexicon.pdf");
    write_pdf(
        &path,
        &[
            &["apple /AP-uhl/", "cherry /CHER-ee/"],
            &["Chapter two"],
            &["banana /buh-", "NAN-uh/"],
        ],
    );
    path
}

/// Directory of split page files written out of order
pub fn split_dir(dir: &Path) -> PathBuf {
    let split = dir.join("split_pages");
    fs::create_dir_all(&split).unwrap();
    fs::write(split.join("book_page_10.txt"), "zebra /ZEE-bruh/\n").unwrap();
    fs::write(split.join("book_page_2.txt"), "cat /meow/\ndog /woof/\n").unwrap();
    fs::write(split.join("book_page_1.txt"), "   \n").unwrap();
    split
}
