//! Generic field-access helpers on [`RecordView`].
//!
//! These are the workhorse accessors the classifiers and extractors are
//! built from. All of them fail soft: absent tags, absent subfields, and
//! out-of-range positions yield empty strings, empty vectors, or `None`.
//! Position-indexed values are lower-cased on return so that downstream
//! matching is case-insensitive by contract.

use regex::Regex;

use crate::record::RecordView;

impl RecordView {
    /// Collect subfield values for the requested codes across every field
    /// with the given tag.
    ///
    /// With `concatenate`, the values of one field occurrence are joined
    /// with `separator` into a single entry, so the result has one entry
    /// per field occurrence that carried any of the codes. Without it, the
    /// result has one entry per matching subfield occurrence. Either way
    /// the output is not 1:1 with the record's field count.
    #[must_use]
    pub fn field_array(
        &self,
        tag: &str,
        codes: &[char],
        concatenate: bool,
        separator: &str,
    ) -> Vec<String> {
        let mut matches = Vec::new();
        for field in self.fields_by_tag(tag) {
            let values = field.subfield_values(codes);
            if values.is_empty() {
                continue;
            }
            if concatenate {
                matches.push(values.join(separator));
            } else {
                matches.extend(values.into_iter().map(str::to_string));
            }
        }
        matches
    }

    /// First entry of [`Self::field_array`] with space-concatenated
    /// subfields, or the empty string when the tag yields nothing.
    #[must_use]
    pub fn first_field_value(&self, tag: &str, codes: &[char]) -> String {
        self.field_array(tag, codes, true, " ")
            .into_iter()
            .next()
            .unwrap_or_default()
    }

    /// Leader character at `position`, lower-cased.
    ///
    /// Out-of-range positions yield `None`, not an error.
    #[must_use]
    pub fn leader_at(&self, position: usize) -> Option<char> {
        self.leader
            .chars()
            .nth(position)
            .map(|c| c.to_ascii_lowercase())
    }

    /// Character at `position` of the first occurrence of a control field,
    /// lower-cased.
    ///
    /// Absent fields and out-of-range positions yield `None`.
    #[must_use]
    pub fn control_at(&self, tag: &str, position: usize) -> Option<char> {
        self.get_control_field(tag)?
            .chars()
            .nth(position)
            .map(|c| c.to_ascii_lowercase())
    }

    /// Entire value of the first occurrence of a control field,
    /// lower-cased; empty string when the field is absent.
    #[must_use]
    pub fn control_value(&self, tag: &str) -> String {
        self.get_control_field(tag)
            .unwrap_or_default()
            .to_lowercase()
    }

    /// Two-character category prefixes of every occurrence of a control
    /// field, filtered by an anchored pattern.
    ///
    /// Each occurrence value is cut to its first two characters, padded
    /// with a space when shorter, and lower-cased; only prefixes matching
    /// `pattern` are returned. This is how the 007 physical-description
    /// category codes are read.
    #[must_use]
    pub fn control_prefixes(&self, tag: &str, pattern: &Regex) -> Vec<String> {
        self.get_control_fields(tag)
            .iter()
            .filter_map(|value| {
                let mut prefix: String = value.chars().take(2).collect();
                while prefix.chars().count() < 2 {
                    prefix.push(' ');
                }
                let prefix = prefix.to_lowercase();
                pattern.is_match(&prefix).then_some(prefix)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;
    use regex::Regex;

    use crate::record::{Field, RecordView};

    lazy_static! {
        static ref ANY: Regex = Regex::new("(?i)^.*").unwrap();
        static ref CR: Regex = Regex::new("(?i)^cr").unwrap();
    }

    fn record_with_020s() -> RecordView {
        RecordView::builder("00000nam a2200000 a 4500")
            .field(
                Field::builder("020", ' ', ' ')
                    .subfield('a', "9783161484100")
                    .subfield('9', "978-3-16-148410-0")
                    .build(),
            )
            .field(Field::builder("020", ' ', ' ').subfield('z', "3161484101").build())
            .build()
    }

    #[test]
    fn test_field_array_concatenated_one_entry_per_field() {
        let record = record_with_020s();
        let values = record.field_array("020", &['a', 'z', '9'], true, " ");
        assert_eq!(
            values,
            vec!["9783161484100 978-3-16-148410-0", "3161484101"]
        );
    }

    #[test]
    fn test_field_array_split_one_entry_per_subfield() {
        let record = record_with_020s();
        let values = record.field_array("020", &['a', 'z', '9'], false, " ");
        assert_eq!(
            values,
            vec!["9783161484100", "978-3-16-148410-0", "3161484101"]
        );
    }

    #[test]
    fn test_first_field_value_empty_when_absent() {
        let record = RecordView::new("00000nam a2200000 a 4500");
        assert_eq!(record.first_field_value("245", &['a']), "");
    }

    #[test]
    fn test_leader_at_lower_cases_and_fails_soft() {
        let record = RecordView::new("00000cAS a2200000 a 4500");
        assert_eq!(record.leader_at(7), Some('a'));
        assert_eq!(record.leader_at(500), None);
    }

    #[test]
    fn test_control_at_uses_first_occurrence() {
        let mut record = RecordView::new("00000cas a2200000 a 4500");
        record.add_control_field("008", "210101c20219999gw wr P       0   b0ger d");
        record.add_control_field("008", "999999x99999999xx xx n       0   x0xxx x");
        assert_eq!(record.control_at("008", 21), Some('p'));
        assert_eq!(record.control_at("008", 200), None);
    }

    #[test]
    fn test_control_prefixes_pads_and_filters() {
        let mut record = RecordView::new("00000nam a2200000 a 4500");
        record.add_control_field("007", "CR uuu---uuuuu");
        record.add_control_field("007", "t");
        record.add_control_field("007", "he amb---baca");

        assert_eq!(record.control_prefixes("007", &ANY), vec!["cr", "t ", "he"]);
        assert_eq!(record.control_prefixes("007", &CR), vec!["cr"]);
    }
}
