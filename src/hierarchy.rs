//! Hierarchy parent derivation: which record does this one belong to?
//!
//! Parent candidates are drawn from series statements (490/830), the
//! host-item entry (773), and series added entries (800/810/811), in that
//! fixed priority order. The $w linkage values carry an optional
//! parenthesized ISIL-like prefix (`(DE-627)123456`) that is stripped
//! before the bare id is handed to the caller-injected
//! [`RecordIdResolver`]. Resolution failures degrade to "no match" and
//! never abort extraction.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::record::{Field, RecordView};

lazy_static! {
    /// Optional `(ISIL)` prefix followed by the bare record id.
    static ref LINKAGE_ID: Regex =
        Regex::new(r"^(\([A-Za-z]*-[A-Za-z0-9]*\))?\s*([A-Za-z0-9]*)\s*$").unwrap();
}

/// Parent-id field groups; order must stay aligned with the title
/// assembly in [`RecordView::hierarchy_parent_titles`].
const PARENT_ID_TAGS: [&[&str]; 4] = [&["490"], &["773"], &["800", "810", "811"], &["830"]];

/// Caller-injected lookup resolving raw $w linkage values to record ids.
///
/// Implementations typically query a search index scoped to
/// [`Self::current_source_id`]; that, including timeouts and retries, is
/// entirely the implementation's concern.
pub trait RecordIdResolver {
    /// Resolve a bare linkage id (ISIL prefix already stripped) to an
    /// internal record id.
    fn resolve_record_id(&self, raw_linkage: &str) -> Option<String>;

    /// Source collection the current record belongs to, when relevant to
    /// resolution.
    fn current_source_id(&self) -> Option<String> {
        None
    }
}

impl RecordView {
    /// Parent record ids, in field priority order.
    ///
    /// `None` entries keep alignment with
    /// [`Self::hierarchy_parent_titles`]: an unresolvable linkage or an
    /// untitled 490 series statement still occupies its slot. When no
    /// field yields anything, the caller-supplied `fallback` ids are
    /// returned instead.
    #[must_use]
    pub fn hierarchy_parent_ids<R: RecordIdResolver>(
        &self,
        resolver: &R,
        fallback: &[String],
    ) -> Vec<Option<String>> {
        let mut parent_ids = Vec::new();

        for group in PARENT_ID_TAGS {
            for tag in group {
                for field in self.fields_by_tag(tag) {
                    if let Some(linkage) = field.subfield('w') {
                        parent_ids.push(resolve_linkage(resolver, linkage));
                    } else if *tag == "490"
                        && field.indicator1 == '0'
                        && field.subfield('a').is_some()
                    {
                        // Unlinked series statement: placeholder keeps the
                        // id list aligned with the title list.
                        parent_ids.push(None);
                    }
                }
            }
        }

        if parent_ids.is_empty() {
            return fallback.iter().cloned().map(Some).collect();
        }
        parent_ids
    }

    /// Parent record titles, assembled per source tag:
    ///
    /// - 490 (indicator 1 = 0): the series statement itself
    /// - 773: for component parts (leader 7 `a`/`s`) `a: t, g`, otherwise
    ///   the record's own 245 $a followed by the 773 $g numbering
    /// - 800/810/811: `a: t ; v` (or $g when $v is absent)
    /// - 830: `a ; v` (or $g)
    #[must_use]
    pub fn hierarchy_parent_titles(&self) -> Vec<String> {
        let mut titles = Vec::new();

        for field in self.fields_by_tag("490") {
            if field.indicator1 == '0' {
                if let Some(statement) = field.subfield('a') {
                    titles.push(statement.to_string());
                }
            }
        }

        let component_part = matches!(self.leader_at(7), Some('a' | 's'));
        for field in self.fields_by_tag("773") {
            if component_part {
                let mut title = field.subfield('a').unwrap_or_default().to_string();
                if let Some(host_title) = field.subfield('t') {
                    title.push_str(": ");
                    title.push_str(host_title);
                }
                if let Some(numbering) = field.subfield('g') {
                    title.push_str(", ");
                    title.push_str(numbering);
                }
                titles.push(title);
            } else if let Some(own_title) = self.get_field("245").and_then(|f| f.subfield('a')) {
                let mut title = own_title.to_string();
                if let Some(numbering) = field.subfield('g') {
                    title.push_str("; ");
                    title.push_str(numbering);
                }
                titles.push(title);
            }
        }

        for tag in ["800", "810", "811"] {
            for field in self.fields_by_tag(tag) {
                let mut title = field.subfield('a').unwrap_or_default().to_string();
                if let Some(series_title) = field.subfield('t') {
                    title.push_str(": ");
                    title.push_str(series_title);
                }
                if let Some(volume) = volume_or_numbering(field) {
                    title.push_str(" ; ");
                    title.push_str(volume);
                }
                titles.push(title);
            }
        }

        for field in self.fields_by_tag("830") {
            let mut title = field.subfield('a').unwrap_or_default().to_string();
            if let Some(volume) = volume_or_numbering(field) {
                title.push_str(" ; ");
                title.push_str(volume);
            }
            titles.push(title);
        }

        titles
    }
}

/// $v when present, $g otherwise.
fn volume_or_numbering(field: &Field) -> Option<&str> {
    field.subfield('v').or_else(|| field.subfield('g'))
}

fn resolve_linkage<R: RecordIdResolver>(resolver: &R, linkage: &str) -> Option<String> {
    let bare = LINKAGE_ID
        .captures(linkage)
        .map(|caps| caps[2].to_string())
        .unwrap_or_default();

    if bare.is_empty() {
        debug!(linkage, "no bare id in parent linkage");
        return Some(linkage.to_string());
    }

    let resolved = resolver.resolve_record_id(&bare);
    if resolved.is_none() {
        debug!(linkage, %bare, "parent id did not resolve");
    }
    resolved
}
