//! Format classification against a realistic rule set covering several
//! base labels with disambiguation variants.

mod common;

use common::{online_monograph, print_journal, print_monograph};
use marcfacts::{MappingError, RecordView, RuleSet};

/// A condensed version of a production format mapping: declaration order
/// and label variants both matter.
const FORMAT_RULES: &str = r#"
EJournal:
  - field: leader
    position: 7
    value: s
  - field: "007"
    value: "/^cr/"
Journal:
  - field: leader
    position: 7
    value: s
  - field: "008"
    position: 21
    value: p
EBook:
  - field: leader
    position: 7
    value: m
  - field: "007"
    value: "/^cr/"
Book1:
  - field: leader
    position: 7
    value: m
  - field: "007"
    value: "/^t/"
Book2:
  - field: leader
    position: 7
    value: m
  - field: "008"
    position: 23
    value: "[s]"
Audio:
  - field: "007"
    value: "/^sd/, /^ss/, /^sz/"
"#;

fn rules() -> RuleSet {
    RuleSet::from_yaml_str(FORMAT_RULES).expect("rule set compiles")
}

#[test]
fn test_online_monograph_classifies_as_ebook() {
    assert_eq!(
        rules().classify(&online_monograph()).as_deref(),
        Some("EBook")
    );
}

#[test]
fn test_print_journal_classifies_as_journal() {
    assert_eq!(
        rules().classify(&print_journal()).as_deref(),
        Some("Journal")
    );
}

#[test]
fn test_earlier_format_wins_when_both_match() {
    // A serial with an online carrier satisfies both EJournal and Journal;
    // the declaration order decides.
    let mut record = print_journal();
    record.add_control_field("007", "cr uuu---uuuuu");
    assert_eq!(rules().classify(&record).as_deref(), Some("EJournal"));
}

#[test]
fn test_label_variant_digits_are_stripped() {
    // Satisfies only the Book2 variant (008/23 = s, no 007 at all).
    let mut record = RecordView::new("00000nam a2200000 a 4500");
    record.add_control_field("008", "210101s2021    gw      s     000 0 ger d");
    assert_eq!(rules().classify(&record).as_deref(), Some("Book"));
}

#[test]
fn test_first_book_variant_also_resolves_to_book() {
    let mut record = RecordView::new("00000nam a2200000 a 4500");
    record.add_control_field("007", "tu");
    assert_eq!(rules().classify(&record).as_deref(), Some("Book"));
}

#[test]
fn test_partial_match_is_not_enough() {
    // Print monograph: leader matches the EBook/Book1 leader rules but no
    // 007 or 008/23 evidence completes any variant.
    assert_eq!(rules().classify(&print_monograph()), None);
}

#[test]
fn test_repeated_007_matches_any_occurrence() {
    let mut record = RecordView::new("00000njm a2200000 a 4500");
    record.add_control_field("007", "ou");
    record.add_control_field("007", "sd fungnnmmned");
    assert_eq!(rules().classify(&record).as_deref(), Some("Audio"));
}

#[test]
fn test_broken_configuration_fails_at_load() {
    let result = RuleSet::from_yaml_str(
        r#"
Book:
  - value: m
"#,
    );
    assert!(matches!(result, Err(MappingError::MissingField { .. })));
}
