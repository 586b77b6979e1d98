//! Reader configuration
//!
//! The format knobs the historian exports vary on: field delimiter, decimal
//! separator, and what to do with a value field that is not a number. The
//! defaults match the reference export convention (`;`-delimited, `,` as
//! the decimal separator, non-numeric values read as zero).

use serde::{Deserialize, Serialize};

/// Configuration for tag file reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Character separating fields on a line
    #[serde(default = "default_field_delimiter")]
    pub field_delimiter: char,

    /// Fractional separator used by value fields (`.` is always tolerated)
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,

    /// What to do when a value field has no numeric prefix
    #[serde(default)]
    pub value_policy: ValuePolicy,
}

fn default_field_delimiter() -> char {
    ';'
}

fn default_decimal_separator() -> char {
    ','
}

/// Handling of non-numeric value fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValuePolicy {
    /// Read the value as `0.0`, matching the historical reader behavior.
    /// Silently masks malformed data; kept as the default because existing
    /// consumers may depend on it.
    #[default]
    Legacy,
    /// Fail the read with `InvalidValue`
    Strict,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            field_delimiter: default_field_delimiter(),
            decimal_separator: default_decimal_separator(),
            value_policy: ValuePolicy::default(),
        }
    }
}

impl ReaderConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the field delimiter
    pub fn with_field_delimiter(mut self, delimiter: char) -> Self {
        self.field_delimiter = delimiter;
        self
    }

    /// Builder method: set the decimal separator
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Builder method: set the non-numeric value policy
    pub fn with_value_policy(mut self, policy: ValuePolicy) -> Self {
        self.value_policy = policy;
        self
    }

    /// Builder method: fail on non-numeric value fields
    pub fn strict(self) -> Self {
        self.with_value_policy(ValuePolicy::Strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_export_convention() {
        let config = ReaderConfig::new();
        assert_eq!(config.field_delimiter, ';');
        assert_eq!(config.decimal_separator, ',');
        assert_eq!(config.value_policy, ValuePolicy::Legacy);
    }

    #[test]
    fn test_builder() {
        let config = ReaderConfig::new()
            .with_field_delimiter('\t')
            .with_decimal_separator('.')
            .strict();
        assert_eq!(config.field_delimiter, '\t');
        assert_eq!(config.decimal_separator, '.');
        assert_eq!(config.value_policy, ValuePolicy::Strict);
    }
}
