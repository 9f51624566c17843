//! Online-access URL extraction from fields 856 and 555.
//!
//! Links flagged as licensed content (856 indicators 4,0) are skipped
//! unless the access note marks them as free or the caller's institution
//! is allowed to show licensed links. Bare URN/handle identifiers are
//! expanded to their public resolvers, and legacy DOI proxy addresses are
//! rewritten to `doi.org`.

use tracing::debug;

use crate::record::{Field, RecordView};

/// Tags carrying online-access links: standard electronic location plus
/// cumulative index/finding aids.
const URL_TAGS: [&str; 2] = ["856", "555"];

const NBN_RESOLVER: &str = "https://nbn-resolving.org/";
const HDL_RESOLVER: &str = "https://hdl.handle.net/";

/// One extracted link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    /// Fully-qualified URL.
    pub url: String,
    /// Display description, when one could be derived.
    pub desc: Option<String>,
}

/// Caller-supplied extraction options.
///
/// Replaces the ambient session/institution state the logic historically
/// read; whether licensed links may be shown is an explicit input.
#[derive(Debug, Clone, Default)]
pub struct UrlOptions {
    /// Show links even when their indicators mark licensed content
    /// (e.g. for allow-listed aggregator institutions).
    pub licensed_allowed: bool,
}

impl RecordView {
    /// Extract online-access links with derived descriptions.
    ///
    /// Exact (url, description) duplicates are dropped; order follows the
    /// record.
    #[must_use]
    pub fn urls(&self, options: &UrlOptions) -> Vec<UrlEntry> {
        let mut entries: Vec<UrlEntry> = Vec::new();

        for tag in URL_TAGS {
            for field in self.fields_by_tag(tag) {
                let Some(address) = field.subfield('u') else {
                    continue;
                };
                if !options.licensed_allowed && is_licensed_only(field) {
                    debug!(tag, address, "skipping licensed-content link");
                    continue;
                }

                let (url, mut desc) = expand_resolvers(field, address);
                if let Some(derived) = derive_description(field) {
                    desc = Some(derived);
                }

                let entry = UrlEntry { url, desc };
                if !entries.contains(&entry) {
                    entries.push(entry);
                }
            }
        }
        entries
    }
}

/// Indicators 4,0 mark licensed content; such links are kept only when the
/// access note says the resource is free.
fn is_licensed_only(field: &Field) -> bool {
    field.indicator1 == '4'
        && field.indicator2 == '0'
        && !field
            .subfield('z')
            .is_some_and(|note| note.to_lowercase().contains("kostenfrei"))
}

/// Expand bare `urn:nbn` and handle identifiers into resolver URLs and
/// normalize the legacy DOI proxy. Returns the final URL and, for expanded
/// identifiers, the raw identifier as a provisional description.
fn expand_resolvers(field: &Field, address: &str) -> (String, Option<String>) {
    let mut url = address.to_string();
    let mut desc = None;

    if url.contains("urn:nbn") && !url.contains("http") {
        desc = Some(url.clone());
        url = format!("{NBN_RESOLVER}{url}");
    } else if field.subfield('2') == Some("hdl") && !url.contains("http") {
        desc = Some(url.clone());
        url = format!("{HDL_RESOLVER}{url}");
    }

    if let Some(rest) = url.strip_prefix("http://dx.doi.org") {
        url = format!("https://doi.org{rest}");
    }

    (url, desc)
}

/// Description priority: $3 (when longer than two characters), $y, a free
/// note in $z, $n, then the generic label for 856 4,0 / 4,1 links.
fn derive_description(field: &Field) -> Option<String> {
    if let Some(materials) = field.subfield('3') {
        if materials.len() > 2 {
            return Some(materials.to_string());
        }
    }
    if let Some(link_text) = field.subfield('y') {
        return Some(link_text.to_string());
    }
    if let Some(note) = field.subfield('z') {
        if note.to_lowercase().contains("kostenfrei") {
            return Some("Full Text".to_string());
        }
    }
    if let Some(note) = field.subfield('n') {
        return Some(note.to_string());
    }
    if field.indicator1 == '4' && matches!(field.indicator2, '0' | '1') {
        return Some("Online Access".to_string());
    }
    None
}
