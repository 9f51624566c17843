//! Boolean record predicates.
//!
//! Each predicate is a pure function of the record view, derived from
//! leader positions, control-field positions, and a handful of data fields.
//! They underpin both display logic and the coarse pre-classification that
//! runs before the configurable rule engine.
//!
//! The corpus this crate descends from carried two `is_serial` variants,
//! one comparing lower-case and one upper-case; the canonical behavior
//! here is case-insensitive throughout, matching the lower-casing contract
//! of the position accessors.

use lazy_static::lazy_static;
use regex::Regex;

use crate::record::RecordView;

lazy_static! {
    static ref CARRIER_ONLINE: Regex = Regex::new("(?i)^cr").unwrap();
    static ref CARRIER_TEXT: Regex = Regex::new("(?i)^t").unwrap();
    static ref FREE_MARKER: Regex = Regex::new("(?i)^(kostenlos|kostenfrei)$").unwrap();
}

impl RecordView {
    /// Whether this record describes an electronic resource.
    ///
    /// True when any 007 carries an online-resource category (`cr`), 008
    /// position 23 is `o`, an RDA carrier code (338 $b) is `cr`, or the
    /// physical description (300 $a) reads "1 online resource".
    #[must_use]
    pub fn is_electronic(&self) -> bool {
        !self.control_prefixes("007", &CARRIER_ONLINE).is_empty()
            || self.control_at("008", 23) == Some('o')
            || self.rda_carrier().iter().any(|code| code == "cr")
            || self.physical_description('a') == "1 online resource"
    }

    /// Everything that is not electronic is physical.
    #[must_use]
    pub fn is_physical(&self) -> bool {
        !self.is_electronic()
    }

    /// Whether this is a serial (leader position 7 is `s`, compared
    /// case-insensitively).
    ///
    /// More exact are [`Self::is_journal`], [`Self::is_newspaper`] and
    /// [`Self::is_monographic_serial`].
    #[must_use]
    pub fn is_serial(&self) -> bool {
        self.leader_at(7) == Some('s')
    }

    /// Whether this is a journal; implies [`Self::is_serial`].
    #[must_use]
    pub fn is_journal(&self) -> bool {
        self.is_serial() && self.control_at("008", 21) == Some('p')
    }

    /// Whether this is a newspaper; implies [`Self::is_serial`].
    #[must_use]
    pub fn is_newspaper(&self) -> bool {
        self.is_serial() && self.control_at("008", 21) == Some('n')
    }

    /// Whether this is a monographic series; implies [`Self::is_serial`].
    #[must_use]
    pub fn is_monographic_serial(&self) -> bool {
        self.is_serial() && self.control_at("008", 21) == Some('m')
    }

    /// Whether this is a component part of a monograph or serial
    /// (leader position 7 is `a` or `b`).
    #[must_use]
    pub fn is_article(&self) -> bool {
        matches!(self.leader_at(7), Some('a' | 'b'))
    }

    /// Whether this is an electronic book: a monograph with at least one
    /// online-resource 007.
    #[must_use]
    pub fn is_ebook(&self) -> bool {
        self.leader_at(7) == Some('m')
            && !self.control_prefixes("007", &CARRIER_ONLINE).is_empty()
    }

    /// Whether this is a printed book: a monograph with at least one
    /// text-carrier 007.
    #[must_use]
    pub fn is_physical_book(&self) -> bool {
        self.leader_at(7) == Some('m')
            && !self.control_prefixes("007", &CARRIER_TEXT).is_empty()
    }

    /// Whether the record is freely available: an 856 with indicator 2 of
    /// `0` whose $z note reads "kostenlos" or "kostenfrei".
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.fields_by_tag("856").any(|field| {
            field.indicator2 == '0'
                && field
                    .subfield('z')
                    .is_some_and(|note| FREE_MARKER.is_match(note))
        })
    }

    /// Whether the record was catalogued under RDA (040 $e is `rda`).
    #[must_use]
    pub fn is_rda(&self) -> bool {
        self.first_field_value("040", &['e']) == "rda"
    }

    /// RDA content type codes (336 $b), lower-cased, one entry per field.
    #[must_use]
    pub fn rda_content(&self) -> Vec<String> {
        self.rda_codes("336")
    }

    /// RDA media type codes (337 $b), lower-cased, one entry per field.
    #[must_use]
    pub fn rda_media(&self) -> Vec<String> {
        self.rda_codes("337")
    }

    /// RDA carrier type codes (338 $b), lower-cased, one entry per field.
    #[must_use]
    pub fn rda_carrier(&self) -> Vec<String> {
        self.rda_codes("338")
    }

    /// A subfield of the first physical-description field (300),
    /// lower-cased; empty when absent.
    #[must_use]
    pub fn physical_description(&self, subfield: char) -> String {
        self.get_field("300")
            .and_then(|field| field.subfield(subfield))
            .unwrap_or_default()
            .to_lowercase()
    }

    fn rda_codes(&self, tag: &str) -> Vec<String> {
        self.fields_by_tag(tag)
            .map(|field| field.subfield('b').unwrap_or_default().to_lowercase())
            .collect()
    }
}
