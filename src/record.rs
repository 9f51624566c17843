//! Read-only MARC record view and its building blocks.
//!
//! This module provides the record model the extraction engine operates on:
//! - [`RecordView`] — an immutable-by-convention view over one parsed record
//! - [`Field`] — variable data fields (010+)
//! - [`Subfield`] — named data elements within fields
//!
//! The view is constructed once per bibliographic record from an upstream
//! MARC parser, handed to the extractors by reference, and discarded
//! afterwards. Field and subfield order is preserved exactly as encoded;
//! every "first" lookup is deterministic in encoding order.
//!
//! # Examples
//!
//! Build a record with the builder API:
//!
//! ```
//! use marcfacts::{Field, RecordView};
//!
//! let record = RecordView::builder("00000nam a2200000 a 4500")
//!     .control_field("001", "12345")
//!     .control_field("008", "210101s2021    gw ||||| |||| 00||||ger d")
//!     .field(
//!         Field::builder("245", '1', '0')
//!             .subfield('a', "Ein Titel")
//!             .build(),
//!     )
//!     .build();
//!
//! assert_eq!(record.get_field("245").and_then(|f| f.subfield('a')), Some("Ein Titel"));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A read-only view over one parsed MARC bibliographic record.
///
/// Control fields and data fields are stored in insertion order using
/// `IndexMap`, and both are repeatable: a tag maps to the ordered sequence
/// of its occurrences. Lookups never fail for absent data; they return
/// empty slices or `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordView {
    /// Record leader; position 7 carries the bibliographic level used by
    /// the serial/article/monograph predicates.
    pub leader: String,
    /// Control fields (000-009): tag -> ordered occurrence values.
    pub control_fields: IndexMap<String, Vec<String>>,
    /// Data fields (010+): tag -> ordered occurrences.
    pub data_fields: IndexMap<String, Vec<Field>>,
}

/// A data field in a MARC record (fields 010 and higher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field tag (3 digits).
    pub tag: String,
    /// First indicator.
    pub indicator1: char,
    /// Second indicator.
    pub indicator2: char,
    /// Subfields, in encoding order. Codes may repeat.
    pub subfields: SmallVec<[Subfield; 4]>,
}

/// A subfield within a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subfield {
    /// Subfield code (single character).
    pub code: char,
    /// Subfield value.
    pub value: String,
}

impl RecordView {
    /// Create an empty record view with the given leader.
    #[must_use]
    pub fn new(leader: impl Into<String>) -> Self {
        RecordView {
            leader: leader.into(),
            control_fields: IndexMap::new(),
            data_fields: IndexMap::new(),
        }
    }

    /// Create a builder for fluently constructing record views.
    #[must_use]
    pub fn builder(leader: impl Into<String>) -> RecordViewBuilder {
        RecordViewBuilder {
            record: RecordView::new(leader),
        }
    }

    /// Append a control field occurrence (000-009).
    pub fn add_control_field(&mut self, tag: impl Into<String>, value: impl Into<String>) {
        self.control_fields
            .entry(tag.into())
            .or_default()
            .push(value.into());
    }

    /// Append a data field occurrence.
    pub fn add_field(&mut self, field: Field) {
        self.data_fields
            .entry(field.tag.clone())
            .or_default()
            .push(field);
    }

    /// Get all occurrence values of a control field, in encoding order.
    ///
    /// Returns an empty slice for an absent tag.
    #[must_use]
    pub fn get_control_fields(&self, tag: &str) -> &[String] {
        self.control_fields.get(tag).map_or(&[], Vec::as_slice)
    }

    /// Get the first occurrence value of a control field.
    #[must_use]
    pub fn get_control_field(&self, tag: &str) -> Option<&str> {
        self.control_fields
            .get(tag)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// Get all fields with a given tag, in encoding order.
    ///
    /// Returns an empty slice for an absent tag, never an error.
    #[must_use]
    pub fn get_fields(&self, tag: &str) -> &[Field] {
        self.data_fields.get(tag).map_or(&[], Vec::as_slice)
    }

    /// Get the first field with a given tag.
    #[must_use]
    pub fn get_field(&self, tag: &str) -> Option<&Field> {
        self.data_fields.get(tag).and_then(|v| v.first())
    }

    /// Iterate over all data fields in tag insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.data_fields.values().flat_map(|v| v.iter())
    }

    /// Iterate over fields matching a specific tag.
    pub fn fields_by_tag(&self, tag: &str) -> impl Iterator<Item = &Field> {
        self.data_fields
            .get(tag)
            .map(|v| v.iter())
            .into_iter()
            .flatten()
    }
}

impl Field {
    /// Create a new data field.
    #[must_use]
    pub fn new(tag: impl Into<String>, indicator1: char, indicator2: char) -> Self {
        Field {
            tag: tag.into(),
            indicator1,
            indicator2,
            subfields: SmallVec::new(),
        }
    }

    /// Create a builder for constructing fields fluently.
    ///
    /// # Examples
    ///
    /// ```
    /// use marcfacts::Field;
    ///
    /// let field = Field::builder("245", '1', '0')
    ///     .subfield('a', "The Great Gatsby")
    ///     .subfield('c', "F. Scott Fitzgerald")
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder(tag: impl Into<String>, indicator1: char, indicator2: char) -> FieldBuilder {
        FieldBuilder {
            field: Field::new(tag, indicator1, indicator2),
        }
    }

    /// Append a subfield.
    pub fn add_subfield(&mut self, code: char, value: impl Into<String>) {
        self.subfields.push(Subfield {
            code,
            value: value.into(),
        });
    }

    /// Get the first subfield value for a code.
    #[must_use]
    pub fn subfield(&self, code: char) -> Option<&str> {
        self.subfields
            .iter()
            .find(|sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }

    /// Iterate over the values of every subfield with a given code.
    pub fn subfields_by_code(&self, code: char) -> impl Iterator<Item = &str> {
        self.subfields
            .iter()
            .filter(move |sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }

    /// Get all subfield values matching any of the given codes, in
    /// encoding order.
    #[must_use]
    pub fn subfield_values(&self, codes: &[char]) -> Vec<&str> {
        self.subfields
            .iter()
            .filter(|sf| codes.contains(&sf.code))
            .map(|sf| sf.value.as_str())
            .collect()
    }

    /// Iterate over all subfields.
    pub fn subfields(&self) -> impl Iterator<Item = &Subfield> {
        self.subfields.iter()
    }
}

/// Builder for fluently constructing record views.
#[derive(Debug)]
pub struct RecordViewBuilder {
    record: RecordView,
}

impl RecordViewBuilder {
    /// Append a control field occurrence.
    #[must_use]
    pub fn control_field(mut self, tag: &str, value: &str) -> Self {
        self.record.add_control_field(tag, value);
        self
    }

    /// Append a data field occurrence.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.record.add_field(field);
        self
    }

    /// Build the record view.
    #[must_use]
    pub fn build(self) -> RecordView {
        self.record
    }
}

/// Builder for fluently constructing fields.
#[derive(Debug)]
pub struct FieldBuilder {
    field: Field,
}

impl FieldBuilder {
    /// Append a subfield.
    #[must_use]
    pub fn subfield(mut self, code: char, value: &str) -> Self {
        self.field.add_subfield(code, value);
        self
    }

    /// Build the field.
    #[must_use]
    pub fn build(self) -> Field {
        self.field
    }
}
