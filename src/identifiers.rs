//! Standard-number extraction: ISBN, ISSN, OCLC, LCCN, ZDB, GTIN.
//!
//! Multi-valued extractors deduplicate while preserving field-encounter
//! order; single-valued ones take the first occurrence. As everywhere in
//! this crate, sparse records yield empty results rather than errors.

use indexmap::IndexSet;

use crate::record::RecordView;

/// ISBN source: 020 $a/$z/$9 plus the host-item ISBN in 773 $z.
const ISBN_CODES: [char; 3] = ['a', 'z', '9'];

/// ISSN sources, in extraction order.
const ISSN_SOURCES: [(&str, char); 9] = [
    ("022", 'a'),
    ("029", 'a'),
    ("440", 'x'),
    ("490", 'x'),
    ("730", 'x'),
    ("773", 'x'),
    ("776", 'x'),
    ("780", 'x'),
    ("785", 'x'),
];

const OCLC_PREFIX: &str = "(OCoLC)";

impl RecordView {
    /// All ISBNs associated with the record, deduplicated, in
    /// field-encounter order.
    #[must_use]
    pub fn isbns(&self) -> Vec<String> {
        let mut seen: IndexSet<String> = IndexSet::new();
        seen.extend(self.field_array("020", &ISBN_CODES, false, " "));
        seen.extend(self.field_array("773", &['z'], false, " "));
        seen.into_iter().collect()
    }

    /// All ISSNs associated with the record, deduplicated, drawn from the
    /// record's own numbering as well as series, host-item, and
    /// preceding/succeeding entries.
    #[must_use]
    pub fn issns(&self) -> Vec<String> {
        let mut seen: IndexSet<String> = IndexSet::new();
        for (tag, code) in ISSN_SOURCES {
            seen.extend(self.field_array(tag, &[code], false, " "));
        }
        seen.into_iter().collect()
    }

    /// OCLC numbers: 016 values carrying the `(OCoLC)` prefix, with the
    /// prefix stripped.
    #[must_use]
    pub fn oclc_numbers(&self) -> Vec<String> {
        self.field_array("016", &['a'], true, " ")
            .into_iter()
            .filter_map(|value| {
                let prefix = value.get(..OCLC_PREFIX.len())?;
                prefix
                    .eq_ignore_ascii_case(OCLC_PREFIX)
                    .then(|| value[OCLC_PREFIX.len()..].to_string())
            })
            .collect()
    }

    /// Library of Congress control number (first 010 $a).
    #[must_use]
    pub fn lccn(&self) -> Option<String> {
        let value = self.first_field_value("010", &['a']);
        (!value.is_empty()).then_some(value)
    }

    /// ZDB serial identifier: the $a of a 016 whose assigning agency ($2)
    /// is `DE-600`. With repeated 016 fields the last match wins.
    #[must_use]
    pub fn zdb_id(&self) -> Option<String> {
        let mut zdb = None;
        for field in self.fields_by_tag("016") {
            let mut data = None;
            let mut agency = None;
            for subfield in field.subfields() {
                match subfield.code {
                    'a' => data = Some(subfield.value.as_str()),
                    '2' => agency = Some(subfield.value.as_str()),
                    _ => {}
                }
            }
            if agency == Some("DE-600") {
                zdb = data.map(str::to_string);
            }
        }
        zdb
    }

    /// GTIN/EAN article number (first 024 $a).
    #[must_use]
    pub fn gtin(&self) -> Option<String> {
        let value = self.first_field_value("024", &['a']);
        (!value.is_empty()).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::record::{Field, RecordView};

    #[test]
    fn test_isbns_merge_host_item_and_dedupe() {
        let record = RecordView::builder("00000nam a2200000 a 4500")
            .field(
                Field::builder("020", ' ', ' ')
                    .subfield('a', "9783161484100")
                    .subfield('z', "3161484101")
                    .build(),
            )
            .field(Field::builder("020", ' ', ' ').subfield('a', "9783161484100").build())
            .field(Field::builder("773", '0', ' ').subfield('z', "9780306406157").build())
            .build();

        assert_eq!(
            record.isbns(),
            vec!["9783161484100", "3161484101", "9780306406157"]
        );
    }

    #[test]
    fn test_issns_cover_series_and_linking_fields() {
        let record = RecordView::builder("00000cas a2200000 a 4500")
            .field(Field::builder("022", ' ', ' ').subfield('a', "1234-5678").build())
            .field(Field::builder("490", '0', ' ').subfield('x', "8765-4321").build())
            .field(Field::builder("776", '0', ' ').subfield('x', "1234-5678").build())
            .build();

        assert_eq!(record.issns(), vec!["1234-5678", "8765-4321"]);
    }

    #[test]
    fn test_oclc_prefix_filter() {
        let record = RecordView::builder("00000nam a2200000 a 4500")
            .field(Field::builder("016", '7', ' ').subfield('a', "(OCoLC)987654").build())
            .field(Field::builder("016", '7', ' ').subfield('a', "(DE-101)123456").build())
            .build();

        assert_eq!(record.oclc_numbers(), vec!["987654"]);
    }

    #[test]
    fn test_zdb_id_requires_agency() {
        let record = RecordView::builder("00000cas a2200000 a 4500")
            .field(
                Field::builder("016", '7', ' ')
                    .subfield('a', "123456-1")
                    .subfield('2', "DE-101")
                    .build(),
            )
            .field(
                Field::builder("016", '7', ' ')
                    .subfield('a', "2635524-4")
                    .subfield('2', "DE-600")
                    .build(),
            )
            .build();

        assert_eq!(record.zdb_id().as_deref(), Some("2635524-4"));
        assert_eq!(
            RecordView::new("00000cas a2200000 a 4500").zdb_id(),
            None
        );
    }

    #[test]
    fn test_lccn_and_gtin_first_values() {
        let record = RecordView::builder("00000nam a2200000 a 4500")
            .field(Field::builder("010", ' ', ' ').subfield('a', "2021000123").build())
            .field(Field::builder("024", '3', ' ').subfield('a', "4006381333931").build())
            .field(Field::builder("024", '3', ' ').subfield('a', "9999999999999").build())
            .build();

        assert_eq!(record.lccn().as_deref(), Some("2021000123"));
        assert_eq!(record.gtin().as_deref(), Some("4006381333931"));
    }
}
