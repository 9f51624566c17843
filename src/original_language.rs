//! Original-script title lookup over 880 fields.
//!
//! Unlike the linkage-based pairing in [`crate::linkage`], this lookup
//! deliberately matches loosely: any 880 whose subfield 6 merely mentions
//! the wanted tag is considered, and with several matches the **last one
//! wins**. The rest of the crate resolves multi-matches first-wins; this
//! divergence is long-standing observable behavior and is kept and tested
//! as such.

use crate::record::RecordView;

impl RecordView {
    /// The original-script value for a field/subfield combination, read
    /// from the 880 fields; empty when none carries it.
    ///
    /// Last match wins across repeated 880 fields.
    #[must_use]
    pub fn original_language(&self, target_tag: &str, target_subfield: char) -> String {
        let mut result = String::new();
        for field in self.fields_by_tag("880") {
            let Some(sub6) = field.subfield('6') else {
                continue;
            };
            if !sub6.contains(target_tag) {
                continue;
            }
            if let Some(data) = field.subfield(target_subfield) {
                result = data.to_string();
            }
        }
        result
    }

    /// Original-script short title (880 counterpart of 245 $a).
    #[must_use]
    pub fn short_title_original(&self) -> String {
        self.original_language("245", 'a')
    }

    /// Original-script subtitle (880 counterpart of 245 $b).
    #[must_use]
    pub fn subtitle_original(&self) -> String {
        self.original_language("245", 'b')
    }

    /// Original-script full title: short title and subtitle joined with
    /// the ISBD ` : ` separator, whichever parts exist.
    #[must_use]
    pub fn title_original(&self) -> String {
        let short = self.short_title_original();
        let subtitle = self.subtitle_original();
        match (short.trim(), subtitle.trim()) {
            (title, "") => title.to_string(),
            ("", subtitle) => subtitle.to_string(),
            (title, subtitle) => format!("{title} : {subtitle}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::record::{Field, RecordView};

    fn record_with_880(entries: &[(&str, char, &str)]) -> RecordView {
        let mut record = RecordView::new("00000nam a2200000 a 4500");
        record.add_field(
            Field::builder("245", '1', '0')
                .subfield('6', "880-01")
                .subfield('a', "Romanized title")
                .build(),
        );
        for (sub6, code, value) in entries {
            record.add_field(
                Field::builder("880", '1', '0')
                    .subfield('6', sub6)
                    .subfield(*code, value)
                    .build(),
            );
        }
        record
    }

    #[test]
    fn test_original_language_matches_tag_mention() {
        let record = record_with_880(&[("245-01", 'a', "Оригинальное заглавие")]);
        assert_eq!(record.short_title_original(), "Оригинальное заглавие");
    }

    #[test]
    fn test_last_match_wins() {
        let record = record_with_880(&[
            ("245-01", 'a', "первое"),
            ("245-02", 'a', "второе"),
        ]);
        assert_eq!(record.short_title_original(), "второе");
    }

    #[test]
    fn test_unrelated_880_is_ignored() {
        let record = record_with_880(&[("260-01", 'a', "Москва")]);
        assert_eq!(record.short_title_original(), "");
    }

    #[test]
    fn test_title_original_joins_existing_parts() {
        let record = record_with_880(&[
            ("245-01", 'a', "Заглавие"),
            ("245-01", 'b', "подзаголовок"),
        ]);
        assert_eq!(record.title_original(), "Заглавие : подзаголовок");

        let short_only = record_with_880(&[("245-01", 'a', "Заглавие")]);
        assert_eq!(short_only.title_original(), "Заглавие");
    }
}
