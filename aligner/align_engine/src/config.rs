//! Engine configuration.
//!
//! Hosts hand the engine a validated [`AlignConfig`]. The only fallible part
//! is the fill character: host configuration surfaces take it as a string,
//! and anything other than exactly one character is rejected here, before
//! any scope is evaluated. Past validation the `char` type makes an invalid
//! fill unrepresentable.

use std::fmt;

/// Default fill character for padding.
pub const DEFAULT_FILL: char = ' ';

/// Invalid engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Fill value is not exactly one character.
    InvalidFill(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFill(value) => write!(
                f,
                "spacing character must be exactly one character, got {value:?}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// How padding is rendered.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Padding {
    /// Raw fill characters (enum alignment).
    Spaces,
    /// Comment-delimited fill (object and type alignment).
    #[default]
    Comment,
}

/// Where the padding comment goes for computed keys.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ComputedKeyPolicy {
    /// Inside the brackets, after the key expression: `["key" /**/]`.
    #[default]
    InsideBrackets,
    /// Outside the brackets, after the closing bracket: `["key"] /**/`.
    OutsideBrackets,
}

/// Configuration for one evaluation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct AlignConfig {
    /// Fill character for padding.
    pub fill: char,
    /// Padding rendering mode.
    pub padding: Padding,
    /// Computed-key placement policy.
    pub computed_key: ComputedKeyPolicy,
}

impl Default for AlignConfig {
    fn default() -> Self {
        AlignConfig {
            fill: DEFAULT_FILL,
            padding: Padding::default(),
            computed_key: ComputedKeyPolicy::default(),
        }
    }
}

impl AlignConfig {
    /// Override the fill character.
    #[must_use]
    pub const fn with_fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    /// Override the padding mode.
    #[must_use]
    pub const fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Override the computed-key policy.
    #[must_use]
    pub const fn with_computed_key(mut self, policy: ComputedKeyPolicy) -> Self {
        self.computed_key = policy;
        self
    }
}

/// Validate a host-supplied fill string.
///
/// Rejects anything that is not exactly one character.
pub fn parse_fill(value: &str) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(fill), None) => Ok(fill),
        _ => Err(ConfigError::InvalidFill(value.to_string())),
    }
}
