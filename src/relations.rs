//! Record-to-record relations: other editions, series links, title
//! succession.
//!
//! The linking-entry fields 775/776/780/785/787 name related records by
//! title and by `$w` control-number linkage. Linkage values pointing into
//! excluded union catalogues (DE-576, DE-609, ZDB numbering under DE-600)
//! are dropped, since they cannot be resolved locally.

use crate::record::RecordView;

/// A related physical or electronic edition (775/776).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedEdition {
    /// Relationship wording ($i), or the conventional default.
    pub description: String,
    /// Title of the related record ($t).
    pub title: Option<String>,
    /// Control-number linkage ($w).
    pub id: String,
    /// Main entry heading of the related record ($a).
    pub author: Option<String>,
}

/// A parallel edition taken from 776 with indicator 1 = 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelEdition {
    /// Control-number linkage ($w).
    pub id: String,
    /// Title of the parallel edition ($t).
    pub label: String,
    /// Relationship wording shown before the label ($i).
    pub prefix: Option<String>,
    /// Note shown after the label ($n).
    pub postfix: Option<String>,
}

impl RecordView {
    /// Related editions from 775 (other-edition entry) and 776
    /// (additional-physical-form entry).
    ///
    /// Entries need a usable id; ZDB-scoped ids (`DE-600`) are excluded.
    /// An entry without relationship wording gets the conventional
    /// "Parallelausgabe" label.
    #[must_use]
    pub fn related_editions(&self) -> Vec<RelatedEdition> {
        let mut editions = Vec::new();
        for tag in ["775", "776"] {
            for field in self.fields_by_tag(tag) {
                let Some(id) = field.subfield('w') else {
                    continue;
                };
                if id.contains("DE-600") {
                    continue;
                }
                editions.push(RelatedEdition {
                    description: field
                        .subfield('i')
                        .unwrap_or("Parallelausgabe")
                        .to_string(),
                    title: field.subfield('t').map(str::to_string),
                    id: id.to_string(),
                    author: field.subfield('a').map(str::to_string),
                });
            }
        }
        editions
    }

    /// Parallel editions: 776 entries with indicator 1 = 0 carrying both a
    /// linkage and a title.
    #[must_use]
    pub fn parallel_editions(&self) -> Vec<ParallelEdition> {
        self.fields_by_tag("776")
            .filter(|field| field.indicator1 == '0')
            .filter_map(|field| {
                let id = field.subfield('w')?;
                let label = field.subfield('t')?;
                Some(ParallelEdition {
                    id: id.to_string(),
                    label: label.to_string(),
                    prefix: field.subfield('i').map(str::to_string),
                    postfix: field.subfield('n').map(str::to_string),
                })
            })
            .collect()
    }

    /// Series record ids: the first whitespace token of each 830 $w,
    /// excluding union-catalogue linkage.
    #[must_use]
    pub fn series_ids(&self) -> Vec<String> {
        self.linkage_ids("830")
    }

    /// Ids of records related via 787 (other-relationship entry), with the
    /// same union-catalogue exclusion as [`Self::series_ids`].
    #[must_use]
    pub fn biblio_relation_ids(&self) -> Vec<String> {
        self.linkage_ids("787")
    }

    /// Display lines for other-relationship entries (787 $i$a$t$d).
    #[must_use]
    pub fn biblio_relations(&self) -> Vec<String> {
        self.field_array("787", &['i', 'a', 't', 'd'], true, " ")
    }

    /// Titles this record continues (780 $a$s$t, one line per field).
    #[must_use]
    pub fn previous_titles(&self) -> Vec<String> {
        self.field_array("780", &['a', 's', 't'], true, " ")
    }

    /// Titles continuing this record (785 $a$s$t, one line per field).
    #[must_use]
    pub fn newer_titles(&self) -> Vec<String> {
        self.field_array("785", &['a', 's', 't'], true, " ")
    }

    fn linkage_ids(&self, tag: &str) -> Vec<String> {
        self.field_array(tag, &['w'], true, " ")
            .iter()
            .filter_map(|value| value.split_whitespace().next())
            .filter(|token| allowed_network_id(token))
            .map(str::to_string)
            .collect()
    }
}

/// Whether a linkage token points somewhere resolvable: not the DE-576 or
/// DE-609 union catalogues, and not ZDB numbering (DE-600 followed by a
/// dashed number).
fn allowed_network_id(token: &str) -> bool {
    if token.contains("DE-576") || token.contains("DE-609") {
        return false;
    }
    match token.find("DE-600") {
        Some(position) => !token[position + "DE-600".len()..].contains('-'),
        None => true,
    }
}
