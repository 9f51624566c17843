//! Declarative format classification.
//!
//! A [`RuleSet`] maps format labels to ordered lists of rules, each rule
//! pairing a record probe with a list of allowed value patterns. Rule sets
//! are written as YAML:
//!
//! ```yaml
//! EBook1:
//!   - field: leader
//!     position: 7
//!     value: m
//!   - field: "007"
//!     value: "/^cr/"
//! Book:
//!   - field: leader
//!     position: 7
//!     value: m
//! ```
//!
//! Formats are evaluated in declaration order; the first format whose
//! entire rule list matches wins, and trailing digits are stripped from its
//! label so the same base label can be declared repeatedly with different
//! rule variants (`Book1`, `Book2` both resolve to `Book`).
//!
//! RDA-style rule sheets work the same way: the `rdacontent`, `rdamedia`
//! and `rdacarrier` field aliases probe the 336/337/338 $b codes, so a
//! carrier-based format mapping needs no knowledge of the underlying tags.
//!
//! Where the original configuration dispatched on method names built from
//! the `field` entry at call time, the probe here is an explicit enum
//! resolved when the rule set is loaded: unknown fields, missing positions,
//! and broken patterns are configuration errors surfaced by
//! [`RuleSet::from_yaml_str`], never per-record failures.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use crate::error::{MappingError, Result};
use crate::record::RecordView;

lazy_static! {
    static ref ANY_PREFIX: Regex = Regex::new("^").unwrap();
}

/// One record probe a rule can test, resolved at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProbe {
    /// Leader character at a position.
    Leader {
        /// Zero-based leader position.
        position: usize,
    },
    /// Character at a position of the first occurrence of a control field.
    ControlPosition {
        /// Control field tag.
        tag: String,
        /// Zero-based position within the field value.
        position: usize,
    },
    /// Entire value of the first occurrence of a control field.
    ControlValue {
        /// Control field tag.
        tag: String,
    },
    /// Two-character category prefixes of every occurrence of a control
    /// field (the 007 convention).
    ControlPrefixes {
        /// Control field tag.
        tag: String,
    },
    /// A subfield's values across every occurrence of a data field.
    DataSubfield {
        /// Data field tag.
        tag: String,
        /// Subfield code.
        subfield: char,
    },
}

/// A compiled rule: a probe plus the patterns its value must match.
#[derive(Debug)]
pub struct Rule {
    probe: FieldProbe,
    allowed: Vec<Regex>,
}

/// An ordered, immutable set of format-classification rules.
///
/// Loaded once at startup and shared read-only across all classification
/// calls; it holds no per-record state.
#[derive(Debug)]
pub struct RuleSet {
    formats: Vec<(String, Vec<Rule>)>,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    field: Option<String>,
    position: Option<usize>,
    subfield: Option<char>,
    #[serde(default)]
    value: String,
}

impl RuleSet {
    /// Load and compile a rule set from its YAML representation.
    ///
    /// # Errors
    ///
    /// Returns a [`MappingError`] when the document cannot be parsed, a
    /// rule lacks its `field` entry, the field is not recognized, a leader
    /// rule lacks a position, or a value pattern does not compile.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let raw: IndexMap<String, Vec<RawRule>> = serde_yaml::from_str(source)?;
        let mut formats = Vec::with_capacity(raw.len());
        for (label, raw_rules) in raw {
            let mut rules = Vec::with_capacity(raw_rules.len());
            for raw_rule in raw_rules {
                rules.push(Rule::compile(&label, &raw_rule)?);
            }
            formats.push((label, rules));
        }
        Ok(RuleSet { formats })
    }

    /// Number of configured formats, counting label variants separately.
    #[must_use]
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Whether the rule set declares no formats at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Classify a record against the configured formats.
    ///
    /// Formats are tried in declaration order and a format's rules in rule
    /// order; the first rule that fails abandons the format. A format is
    /// selected only when every one of its rules matched. The winning label
    /// is returned with trailing digits stripped; `None` means no format
    /// matched, which is an ordinary outcome, not an error.
    #[must_use]
    pub fn classify(&self, record: &RecordView) -> Option<String> {
        for (label, rules) in &self.formats {
            if rules.iter().all(|rule| rule.matches(record)) {
                let stripped = label.trim_end_matches(|c: char| c.is_ascii_digit());
                return Some(stripped.to_string());
            }
        }
        None
    }
}

impl Rule {
    fn compile(format: &str, raw: &RawRule) -> Result<Self> {
        let Some(field) = raw.field.as_deref() else {
            return Err(MappingError::MissingField {
                format: format.to_string(),
            });
        };

        let probe = Self::resolve_probe(format, field, raw)?;
        let allowed = Self::compile_patterns(format, &raw.value)?;
        Ok(Rule { probe, allowed })
    }

    fn resolve_probe(format: &str, field: &str, raw: &RawRule) -> Result<FieldProbe> {
        if field.eq_ignore_ascii_case("leader") {
            return match raw.position {
                Some(position) => Ok(FieldProbe::Leader { position }),
                None => Err(MappingError::MissingPosition {
                    format: format.to_string(),
                }),
            };
        }

        // Aliases for the RDA content/media/carrier type fields.
        let alias = match field.to_ascii_lowercase().as_str() {
            "rdacontent" => Some(("336", 'b')),
            "rdamedia" => Some(("337", 'b')),
            "rdacarrier" => Some(("338", 'b')),
            _ => None,
        };
        if let Some((tag, subfield)) = alias {
            return Ok(FieldProbe::DataSubfield {
                tag: tag.to_string(),
                subfield,
            });
        }

        if field.len() == 3 && field.bytes().all(|b| b.is_ascii_digit()) {
            if field < "010" {
                return Ok(match raw.position {
                    Some(position) => FieldProbe::ControlPosition {
                        tag: field.to_string(),
                        position,
                    },
                    // 007 carries repeatable two-character category codes;
                    // other control fields are tested as whole values.
                    None if field == "007" => FieldProbe::ControlPrefixes {
                        tag: field.to_string(),
                    },
                    None => FieldProbe::ControlValue {
                        tag: field.to_string(),
                    },
                });
            }
            return Ok(FieldProbe::DataSubfield {
                tag: field.to_string(),
                subfield: raw.subfield.unwrap_or('a'),
            });
        }

        Err(MappingError::UnknownField {
            format: format.to_string(),
            field: field.to_string(),
        })
    }

    fn compile_patterns(format: &str, value: &str) -> Result<Vec<Regex>> {
        let mut allowed = Vec::new();
        for fragment in value.split(',') {
            let fragment: String = fragment
                .trim()
                .chars()
                .filter(|c| !matches!(c, '/' | '[' | ']'))
                .collect();
            let fragment = fragment.trim_start_matches('^');
            let regex = RegexBuilder::new(&format!("^{fragment}"))
                .case_insensitive(true)
                .build()
                .map_err(|source| MappingError::InvalidPattern {
                    format: format.to_string(),
                    pattern: fragment.to_string(),
                    source,
                })?;
            allowed.push(regex);
        }
        Ok(allowed)
    }

    fn matches(&self, record: &RecordView) -> bool {
        match &self.probe {
            FieldProbe::Leader { position } => {
                self.check_one(&record.leader_at(*position).map(String::from).unwrap_or_default())
            }
            FieldProbe::ControlPosition { tag, position } => self.check_one(
                &record
                    .control_at(tag, *position)
                    .map(String::from)
                    .unwrap_or_default(),
            ),
            FieldProbe::ControlValue { tag } => self.check_one(&record.control_value(tag)),
            FieldProbe::ControlPrefixes { tag } => self.check_many(
                record.control_prefixes(tag, &ANY_PREFIX),
            ),
            FieldProbe::DataSubfield { tag, subfield } => self.check_many(
                record
                    .field_array(tag, &[*subfield], false, " ")
                    .into_iter()
                    .map(|v| v.to_lowercase())
                    .collect(),
            ),
        }
    }

    fn check_one(&self, value: &str) -> bool {
        self.allowed.iter().any(|pattern| pattern.is_match(value))
    }

    fn check_many(&self, values: Vec<String>) -> bool {
        values.iter().any(|value| self.check_one(value))
    }
}
