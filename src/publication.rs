//! Publication facts: imprint details, dates, places, coverage.
//!
//! Imprint data lives in 260 and, for RDA records, in 264 (where only
//! indicator 2 = 1, the publisher function, is wanted). When an imprint
//! field has a linked alternate-script 880, a second parallel entry is
//! emitted right after the base entry, preserving field order.

use lazy_static::lazy_static;
use regex::Regex;

use crate::record::RecordView;

lazy_static! {
    /// Leading fixed-length segment of 008: entry date, date type, date 1.
    static ref F008_DATE: Regex = Regex::new(r"^(\d{2})(\d{2})(\d{2})([a-z])(\d{4})").unwrap();
    static ref YEAR: Regex = Regex::new(r"\d{4}").unwrap();
}

/// Imprint fields, in extraction order.
const IMPRINT_TAGS: [&str; 2] = ["260", "264"];

/// Vague German date words occasionally catalogued into $c; they carry no
/// usable year.
const VAGUE_DATES: [&str; 3] = ["anfangs", "früher", "teils"];

/// One publication statement: place, publisher name, date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationDetails {
    /// Place of publication ($a).
    pub place: Option<String>,
    /// Publisher name ($b).
    pub name: Option<String>,
    /// Publication date ($c).
    pub date: Option<String>,
}

impl PublicationDetails {
    /// Extract the publication year: the first run of four digits in the
    /// date statement.
    #[must_use]
    pub fn publication_year(&self) -> Option<u32> {
        let date = self.date.as_deref()?;
        YEAR.find(date)?.as_str().parse().ok()
    }

    /// Render the statement as `place : name, date`, omitting absent
    /// parts.
    #[must_use]
    pub fn format_statement(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(place) = self.place.as_deref() {
            if !place.is_empty() {
                parts.push(place);
            }
        }
        if let Some(name) = self.name.as_deref() {
            if !name.is_empty() {
                parts.push(name);
            }
        }
        let base = parts.join(" : ");
        match self.date.as_deref() {
            Some(date) if !date.is_empty() => {
                if base.is_empty() {
                    date.to_string()
                } else {
                    format!("{base}, {date}")
                }
            }
            _ => base,
        }
    }
}

impl RecordView {
    /// Publication statements from 260 and 264 (indicator 2 = 1), each
    /// followed by its alternate-script parallel entry when a linked 880
    /// exists.
    #[must_use]
    pub fn publication_details(&self) -> Vec<PublicationDetails> {
        let mut details = Vec::new();
        for tag in IMPRINT_TAGS {
            for (index, field) in self.fields_by_tag(tag).enumerate() {
                if tag == "264" && field.indicator2 != '1' {
                    continue;
                }
                details.push(PublicationDetails {
                    place: field.subfield('a').map(str::to_string),
                    name: field.subfield('b').map(str::to_string),
                    date: field.subfield('c').map(str::to_string),
                });
                if let Some(linked) = self.linked_field(field, index) {
                    details.push(PublicationDetails {
                        place: linked.subfield('a').map(str::to_string),
                        name: linked.subfield('b').map(str::to_string),
                        date: linked.subfield('c').map(str::to_string),
                    });
                }
            }
        }
        details
    }

    /// Publication years: the year encoded in 008 when present, otherwise
    /// the imprint dates of 260/264 $c with vague-date words dropped and
    /// everything but digits and interior dashes stripped. Deduplicated.
    #[must_use]
    pub fn publication_dates(&self) -> Vec<String> {
        if let Some(f008) = self.get_control_field("008") {
            if let Some(caps) = F008_DATE.captures(f008) {
                return vec![caps[5].to_string()];
            }
        }

        let mut years: Vec<String> = Vec::new();
        for tag in IMPRINT_TAGS {
            for raw in self.field_array(tag, &['c'], false, " ") {
                if VAGUE_DATES.contains(&raw.as_str()) {
                    continue;
                }
                let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '-').collect();
                let cleaned = cleaned.trim_end_matches('-').to_string();
                if !cleaned.is_empty() && !years.contains(&cleaned) {
                    years.push(cleaned);
                }
            }
        }
        years
    }

    /// Places of publication from 260/264 $a, with the ISBD ` :` separator
    /// stripped.
    #[must_use]
    pub fn places_of_publication(&self) -> Vec<String> {
        let mut places = Vec::new();
        for tag in IMPRINT_TAGS {
            for place in self.field_array(tag, &['a'], false, " ") {
                places.push(place.replace(" :", ""));
            }
        }
        places
    }

    /// Date coverage of a running resource (362 $a).
    #[must_use]
    pub fn date_span(&self) -> Vec<String> {
        self.field_array("362", &['a'], true, " ")
    }

    /// Edition statement (first 250 $a).
    #[must_use]
    pub fn edition(&self) -> Option<String> {
        let value = self.first_field_value("250", &['a']);
        (!value.is_empty()).then_some(value)
    }
}
