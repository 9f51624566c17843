//! Common test fixtures shared across the test suite.

use marcfacts::{Field, RecordView};

/// A monograph available online: leader 7 = `m`, an online-resource 007,
/// and a full-length 008.
pub fn online_monograph() -> RecordView {
    let mut record = RecordView::new("00000nmm a2200000 a 4500");
    record.add_control_field("007", "cr uuu---uuuuu");
    record.add_control_field("008", "210101s2021    gw o    |||| 00||||eng d");
    record.add_field(
        Field::builder("245", '1', '0')
            .subfield('a', "An electronic monograph")
            .build(),
    );
    record
}

/// A plain printed monograph with no electronic evidence anywhere.
pub fn print_monograph() -> RecordView {
    let mut record = RecordView::new("00000nam a2200000 a 4500");
    record.add_control_field("008", "890623s1989    gw      |||| 00||||ger d");
    record.add_field(
        Field::builder("245", '1', '0')
            .subfield('a', "Ein gedrucktes Buch")
            .build(),
    );
    record.add_field(
        Field::builder("300", ' ', ' ')
            .subfield('a', "312 Seiten")
            .build(),
    );
    record
}

/// A printed journal: serial leader, 008/21 = `p`.
pub fn print_journal() -> RecordView {
    let mut record = RecordView::new("00000cas a2200000 a 4500");
    record.add_control_field("008", "980102c19989999gw wr p       0   b0ger d");
    record.add_field(
        Field::builder("245", '0', '0')
            .subfield('a', "Zeitschrift für Beispiele")
            .build(),
    );
    record
}
