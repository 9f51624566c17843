//! End-to-end extraction scenarios combining predicates, URL extraction,
//! and original-script lookup on realistic records.

mod common;

use common::{online_monograph, print_journal, print_monograph};
use marcfacts::{Field, RecordView, UrlOptions};

#[test]
fn test_online_monograph_is_electronic_ebook() {
    let record = online_monograph();

    assert!(record.is_electronic());
    assert!(record.is_ebook());
    assert!(!record.is_physical_book());
    assert!(!record.is_physical());
}

#[test]
fn test_print_monograph_is_physical() {
    let record = print_monograph();

    assert!(!record.is_electronic());
    assert!(record.is_physical());
    assert!(!record.is_ebook());
}

#[test]
fn test_print_journal_classification() {
    let record = print_journal();

    assert!(record.is_serial());
    assert!(record.is_journal());
    assert!(!record.is_newspaper());
    assert!(!record.is_article());
}

#[test]
fn test_free_licensed_link_is_kept_with_description() {
    let mut record = print_monograph();
    record.add_field(
        Field::builder("856", '4', '0')
            .subfield('u', "http://example.org/x")
            .subfield('z', "Kostenfrei")
            .build(),
    );

    assert!(record.is_free());
    let urls = record.urls(&UrlOptions::default());
    assert_eq!(urls.len(), 1);
    assert_eq!(urls[0].url, "http://example.org/x");
    assert_eq!(urls[0].desc.as_deref(), Some("Full Text"));
}

#[test]
fn test_original_script_short_title() {
    let mut record = print_monograph();
    record.add_field(
        Field::builder("880", '1', '0')
            .subfield('6', "245-01")
            .subfield('a', "Оригинальное заглавие")
            .build(),
    );

    assert_eq!(record.short_title_original(), "Оригинальное заглавие");
}

#[test]
fn test_repeated_identifier_fields_deduplicate() {
    let mut record = print_monograph();
    for _ in 0..2 {
        record.add_field(
            Field::builder("020", ' ', ' ')
                .subfield('a', "9783161484100")
                .build(),
        );
    }
    record.add_field(
        Field::builder("022", ' ', ' ')
            .subfield('a', "1234-5678")
            .build(),
    );
    record.add_field(
        Field::builder("773", '0', ' ')
            .subfield('x', "1234-5678")
            .build(),
    );

    assert_eq!(record.isbns(), vec!["9783161484100"]);
    assert_eq!(record.issns(), vec!["1234-5678"]);
}

#[test]
fn test_extraction_is_idempotent() {
    let mut record = online_monograph();
    record.add_field(
        Field::builder("856", '4', '1')
            .subfield('u', "http://example.org/fulltext")
            .build(),
    );

    assert_eq!(record.is_electronic(), record.is_electronic());
    assert_eq!(
        record.urls(&UrlOptions::default()),
        record.urls(&UrlOptions::default())
    );
    assert_eq!(record.isbns(), record.isbns());
    assert_eq!(record.publication_details(), record.publication_details());
}

#[test]
fn test_sparse_record_extracts_to_empty_everywhere() {
    let record = RecordView::new("00000nam a2200000 a 4500");

    assert!(record.isbns().is_empty());
    assert!(record.issns().is_empty());
    assert!(record.urls(&UrlOptions::default()).is_empty());
    assert!(record.publication_details().is_empty());
    assert!(record.subject_headings().is_empty());
    assert!(record.hierarchy_parent_titles().is_empty());
    assert_eq!(record.short_title_original(), "");
}
