//! Display configuration
//!
//! Selects how integer parts are grouped and how signs and infinities are
//! rendered. A locale supplies the defaults; individual fields override it.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::core::{CalcError, CalcResult};

/// Number rendering conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum NumberLocale {
    /// Swedish: `1 234` grouped with a no-break space, `−` for minus
    #[default]
    #[serde(rename = "sv")]
    Swedish,
    /// English: `1,234` grouped with a comma, ASCII `-` for minus
    #[serde(rename = "en")]
    English,
    /// No grouping, ASCII `-` for minus
    #[serde(rename = "plain")]
    Plain,
}

impl NumberLocale {
    /// Thousands separator, if the locale groups digits
    #[must_use]
    pub const fn group_separator(self) -> Option<char> {
        match self {
            Self::Swedish => Some('\u{a0}'),
            Self::English => Some(','),
            Self::Plain => None,
        }
    }

    /// Character placed before negative numbers
    #[must_use]
    pub const fn minus_sign(self) -> char {
        match self {
            Self::Swedish => '\u{2212}',
            Self::English | Self::Plain => '-',
        }
    }

    /// Short tag used on the command line and in config files
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Swedish => "sv",
            Self::English => "en",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for NumberLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for NumberLocale {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sv" | "sv-se" | "swedish" => Ok(Self::Swedish),
            "en" | "en-us" | "english" => Ok(Self::English),
            "plain" | "none" => Ok(Self::Plain),
            other => Err(CalcError::Config(format!("unknown locale {other:?}"))),
        }
    }
}

/// Display settings for a calculator session
///
/// The overrides are private; read the effective values through
/// [`group_separator`](Self::group_separator), [`minus_sign`](Self::minus_sign)
/// and [`infinity`](Self::infinity).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Locale providing the defaults
    pub locale: NumberLocale,
    group_separator: Option<char>,
    minus_sign: Option<char>,
    infinity: Option<String>,
}

impl DisplayConfig {
    /// Symbol used when no infinity override is set
    pub const DEFAULT_INFINITY: &'static str = "∞";

    /// Create the default configuration (Swedish locale)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration for a locale with no overrides
    #[must_use]
    pub fn for_locale(locale: NumberLocale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// Set the locale
    #[must_use]
    pub const fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Override the thousands separator
    #[must_use]
    pub const fn with_group_separator(mut self, separator: char) -> Self {
        self.group_separator = Some(separator);
        self
    }

    /// Override the minus sign
    #[must_use]
    pub const fn with_minus_sign(mut self, minus: char) -> Self {
        self.minus_sign = Some(minus);
        self
    }

    /// Override the infinity text
    #[must_use]
    pub fn with_infinity(mut self, infinity: impl Into<String>) -> Self {
        self.infinity = Some(infinity.into());
        self
    }

    /// Effective thousands separator
    #[must_use]
    pub fn group_separator(&self) -> Option<char> {
        self.group_separator.or_else(|| self.locale.group_separator())
    }

    /// Effective minus sign
    #[must_use]
    pub fn minus_sign(&self) -> char {
        self.minus_sign.unwrap_or_else(|| self.locale.minus_sign())
    }

    /// Effective infinity text
    #[must_use]
    pub fn infinity(&self) -> &str {
        self.infinity.as_deref().unwrap_or(Self::DEFAULT_INFINITY)
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json).map_err(|e| CalcError::Config(e.to_string()))
    }
}
