//! Error types for rule-configuration handling.
//!
//! This module provides the [`MappingError`] type raised when a format rule
//! set is malformed, and the [`Result`] convenience type.
//!
//! Missing record data is never an error anywhere in this crate: absent
//! fields, subfields, and out-of-range positions resolve to empty values so
//! that sparse records extract cleanly. Only broken configuration fails.

use thiserror::Error;

/// Error type for malformed format-rule configuration.
///
/// A rule set that cannot be compiled must fail loudly at load time;
/// skipping a broken rule would silently misclassify every record.
#[derive(Error, Debug)]
pub enum MappingError {
    /// A rule is missing its required `field` entry.
    #[error("format '{format}': rule mappings must have a field entry")]
    MissingField {
        /// Format label the broken rule belongs to.
        format: String,
    },

    /// A leader rule was declared without a `position` entry.
    #[error("format '{format}': leader rules require a position entry")]
    MissingPosition {
        /// Format label the broken rule belongs to.
        format: String,
    },

    /// The `field` entry names neither a MARC tag nor a known probe alias.
    #[error("format '{format}': unknown field '{field}' in rule mapping")]
    UnknownField {
        /// Format label the broken rule belongs to.
        format: String,
        /// The unrecognized `field` value.
        field: String,
    },

    /// An allowed-value fragment did not compile to a valid pattern.
    #[error("format '{format}': invalid value pattern '{pattern}'")]
    InvalidPattern {
        /// Format label the broken rule belongs to.
        format: String,
        /// The offending pattern fragment, after delimiter stripping.
        pattern: String,
        /// Compile error reported by the regex engine.
        source: regex::Error,
    },

    /// The rule document itself could not be deserialized.
    #[error("rule configuration could not be parsed: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`MappingError`].
pub type Result<T> = std::result::Result<T, MappingError>;
