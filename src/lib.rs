#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Crate layout
//!
//! The caller supplies a [`RecordView`] (built by an external MARC parser)
//! plus, for format classification, a [`RuleSet`] loaded once from YAML
//! configuration. Everything else is pure derivation:
//!
//! - [`record`] — the record view: leader, control fields, data fields
//! - [`field_access`] — generic fail-soft accessors the extractors build on
//! - [`linkage`] — alternate-script (880) field pairing via subfield 6
//! - [`rules`] — declarative format classification
//! - [`classify`] — boolean predicates (electronic, serial, journal, ...)
//! - [`identifiers`] — ISBN/ISSN/OCLC/LCCN/ZDB/GTIN extraction
//! - [`urls`] — online-access links with descriptions
//! - [`publication`] — imprint details, dates, places, coverage
//! - [`original_language`] — original-script titles from 880 fields
//! - [`hierarchy`] — parent record ids and titles
//! - [`subjects`] — subject headings and 689 chains
//! - [`relations`] — related/parallel editions and title succession
//! - [`error`] — the configuration-error type
//!
//! A record view is cheap to hand around by reference and is never
//! mutated by extraction; rule sets are immutable after loading, so both
//! can be shared freely across threads.

pub mod classify;
pub mod error;
pub mod field_access;
pub mod hierarchy;
pub mod identifiers;
pub mod linkage;
pub mod original_language;
pub mod publication;
pub mod record;
pub mod relations;
pub mod rules;
pub mod subjects;
pub mod urls;

pub use error::{MappingError, Result};
pub use hierarchy::RecordIdResolver;
pub use linkage::Linkage;
pub use publication::PublicationDetails;
pub use record::{Field, FieldBuilder, RecordView, RecordViewBuilder, Subfield};
pub use relations::{ParallelEdition, RelatedEdition};
pub use rules::{FieldProbe, Rule, RuleSet};
pub use subjects::SubjectChain;
pub use urls::{UrlEntry, UrlOptions};
