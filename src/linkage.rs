//! Alternate-script field linkage (MARC 880, subfield 6).
//!
//! An 880 field carries the content of another field in a different script
//! (vernacular paired with romanized form). The pairing is established via
//! subfield 6, whose value has the shape `TAG-OCC[/script][/r]`: a 3-digit
//! tag, an occurrence number, and optional script/orientation suffixes.
//!
//! A field `260 $6 880-01` links to the 880 carrying `$6 260-01`. Records
//! in the wild frequently omit or garble the linkage, so lookups fall back
//! to pairing the n-th 880 that names the wanted tag with the n-th
//! occurrence of that tag.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::record::{Field, RecordView};

lazy_static! {
    static ref LINKAGE: Regex = Regex::new(r"^(\d{3})-(\d{2,3})").unwrap();
}

/// Tag and occurrence number parsed from a subfield 6 value.
///
/// Script-identification and orientation suffixes (`/(3`, `/r`) are
/// accepted and ignored; only the pairing information is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Linkage {
    /// The 3-digit tag of the field on the other end of the link.
    pub tag: String,
    /// Occurrence number shared by both ends of the link.
    pub occurrence: String,
}

impl Linkage {
    /// Parse a subfield 6 value into its linkage parts.
    ///
    /// Returns `None` for values that do not start with `TAG-OCC`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let caps = LINKAGE.captures(value)?;
        Some(Linkage {
            tag: caps[1].to_string(),
            occurrence: caps[2].to_string(),
        })
    }
}

impl RecordView {
    /// Find the 880 field linked to `field`.
    ///
    /// The occurrence number from the field's subfield 6 is matched against
    /// the 880 fields' own linkage subfields. When the field carries no
    /// usable linkage, `index` is used as a positional fallback: the n-th
    /// 880 naming this field's tag pairs with the n-th occurrence of the
    /// tag. Callers iterating a tag's occurrences pass the iteration index.
    #[must_use]
    pub fn linked_field(&self, field: &Field, index: usize) -> Option<&Field> {
        if let Some(linkage) = field.subfield('6').and_then(Linkage::parse) {
            for candidate in self.fields_by_tag("880") {
                let Some(sub6) = candidate.subfield('6') else {
                    continue;
                };
                match Linkage::parse(sub6) {
                    Some(back) => {
                        if back.tag == field.tag && back.occurrence == linkage.occurrence {
                            return Some(candidate);
                        }
                    }
                    None => debug!(sub6, "unparseable linkage on 880 field"),
                }
            }
        }

        // Positional fallback for records without usable linkage codes.
        self.fields_by_tag("880")
            .filter(|candidate| {
                candidate
                    .subfield('6')
                    .and_then(Linkage::parse)
                    .is_some_and(|back| back.tag == field.tag)
            })
            .nth(index)
    }

    /// Collect subfield values from the 880 fields linked to every
    /// occurrence of `tag`.
    ///
    /// Mirrors [`Self::field_array`], but reads the linked alternate-script
    /// fields instead of the base fields. Occurrences without a linked 880
    /// contribute nothing.
    #[must_use]
    pub fn linked_field_array(
        &self,
        tag: &str,
        codes: &[char],
        concatenate: bool,
        separator: &str,
    ) -> Vec<String> {
        let mut matches = Vec::new();
        for (index, field) in self.fields_by_tag(tag).enumerate() {
            let Some(linked) = self.linked_field(field, index) else {
                continue;
            };
            let values = linked.subfield_values(codes);
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
}
