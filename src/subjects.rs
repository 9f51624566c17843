//! Subject heading extraction.
//!
//! Flat headings come from the fixed list of subject-bearing 6XX tags.
//! Field 689 carries ordered heading chains (a regional cataloguing
//! convention): consecutive fields sharing indicator 1 belong to one
//! chain, and a change of indicator 1 starts the next chain.

use indexmap::IndexSet;

use crate::record::RecordView;

/// Tags that may carry subject headings.
const SUBJECT_TAGS: [&str; 10] = [
    "600", "610", "611", "630", "648", "650", "651", "655", "656", "689",
];

/// One 689 heading chain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubjectChain {
    /// Chain members, least to most specific.
    pub subjects: Vec<String>,
    /// Qualifying sub-subject ($9), when catalogued.
    pub sub_subject: Option<String>,
}

impl RecordView {
    /// All subject headings: $a and $x values across the subject-bearing
    /// tags, deduplicated, in field-encounter order.
    #[must_use]
    pub fn subject_headings(&self) -> Vec<String> {
        let mut seen: IndexSet<String> = IndexSet::new();
        for tag in SUBJECT_TAGS {
            for field in self.fields_by_tag(tag) {
                for subfield in field.subfields() {
                    if matches!(subfield.code, 'a' | 'x') {
                        seen.insert(subfield.value.clone());
                    }
                }
            }
        }
        seen.into_iter().collect()
    }

    /// Heading chains from field 689, grouped by indicator-1 continuity.
    ///
    /// Single-character $a values are control noise introduced by
    /// upstream case folding and are skipped.
    #[must_use]
    pub fn subject_chains(&self) -> Vec<SubjectChain> {
        let mut chains: Vec<SubjectChain> = Vec::new();
        let mut current_indicator = None;

        for field in self.fields_by_tag("689") {
            if current_indicator != Some(field.indicator1) {
                chains.push(SubjectChain::default());
                current_indicator = Some(field.indicator1);
            }
            let Some(chain) = chains.last_mut() else {
                continue;
            };

            for value in field.subfields_by_code('a') {
                if value.chars().count() > 1 {
                    chain.subjects.push(value.to_string());
                }
            }
            if let Some(title) = field.subfield('t') {
                chain.subjects.push(title.to_string());
            }
            if let Some(qualifier) = field.subfield('9') {
                chain.sub_subject = Some(qualifier.to_string());
            }
        }
        chains
    }
}
