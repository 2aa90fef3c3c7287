//! Operand stringification, parsing and display formatting
//!
//! Operands live as strings inside [`CalculatorState`](super::CalculatorState).
//! Results are written back with [`number_to_string`] and read with
//! [`parse_operand`]; [`DisplayFormatter`] turns either into the text shown
//! to the user.

use crate::config::DisplayConfig;
use crate::core::{CalculatorState, Operator};

/// Canonical text form of a computed result.
///
/// Shortest round-trip decimal with no exponent. Infinities become
/// `Infinity`/`-Infinity`, NaN becomes `NaN` and negative zero becomes `0`.
#[must_use]
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

/// Parses the leading decimal number of `text`.
///
/// Accepts an optional sign followed by either `Infinity` or digits with at
/// most one decimal point; trailing text is ignored. Returns `None` when no
/// digits are present, so empty input, a lone `.` and `NaN` all fail.
#[must_use]
pub fn parse_operand(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (negative, rest) = match text.chars().next() {
        Some('-') => (true, &text[1..]),
        Some('+') => (false, &text[1..]),
        _ => (false, text),
    };

    let magnitude = if rest.starts_with("Infinity") {
        f64::INFINITY
    } else {
        let mut end = 0;
        let mut digits = 0;
        let mut seen_point = false;
        for (i, c) in rest.char_indices() {
            match c {
                '0'..='9' => {
                    digits += 1;
                    end = i + 1;
                }
                '.' if !seen_point => {
                    seen_point = true;
                    end = i + 1;
                }
                _ => break,
            }
        }
        if digits == 0 {
            return None;
        }
        rest[..end].parse::<f64>().ok()?
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// Inserts `separator` between every group of three digits
fn group_digits(digits: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return digits.to_string();
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// Formats operands for display according to a [`DisplayConfig`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayFormatter {
    config: DisplayConfig,
}

impl DisplayFormatter {
    /// Creates a formatter using the default (Swedish) conventions
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a formatter with the given configuration
    #[must_use]
    pub fn with_config(config: DisplayConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration
    #[must_use]
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Formats an operand string for display.
    ///
    /// The integer part (text before the first `.`) is grouped into
    /// thousands with no fraction digits; if it does not parse it renders as
    /// an empty string. Text after the first `.` is appended verbatim.
    ///
    /// ```rust
    /// use keycalc::config::{DisplayConfig, NumberLocale};
    /// use keycalc::core::DisplayFormatter;
    ///
    /// let fmt = DisplayFormatter::with_config(DisplayConfig::for_locale(NumberLocale::English));
    /// assert_eq!(fmt.format("1234567.250"), "1,234,567.250");
    /// assert_eq!(fmt.format(".5"), ".5");
    /// assert_eq!(fmt.format(""), "");
    /// ```
    #[must_use]
    pub fn format(&self, value: &str) -> String {
        let mut parts = value.split('.');
        let integer = parts.next().unwrap_or_default();
        let fraction = parts.next();

        let integer_display = parse_operand(integer)
            .map(|n| self.format_integer(n))
            .unwrap_or_default();

        match fraction {
            Some(fraction) => format!("{integer_display}.{fraction}"),
            None => integer_display,
        }
    }

    /// Formats a numeric value through its canonical string form
    #[must_use]
    pub fn format_number(&self, value: f64) -> String {
        self.format(&number_to_string(value))
    }

    /// Text for the current-operand line
    #[must_use]
    pub fn current_display(&self, state: &CalculatorState) -> String {
        self.format(state.current_operand())
    }

    /// Text for the previous-operand line: the operand followed by the
    /// pending operator, or empty when no operator is pending
    #[must_use]
    pub fn previous_display(&self, state: &CalculatorState) -> String {
        match state.operation() {
            Some(op) => self.pending_display(state.previous_operand(), op),
            None => String::new(),
        }
    }

    fn pending_display(&self, previous: &str, op: Operator) -> String {
        format!("{} {}", self.format(previous), op.symbol())
    }

    fn format_integer(&self, value: f64) -> String {
        let magnitude = if value.is_infinite() {
            self.config.infinity().to_string()
        } else {
            group_digits(
                &format!("{}", value.abs().trunc()),
                self.config.group_separator(),
            )
        };

        if value.is_sign_negative() {
            format!("{}{magnitude}", self.config.minus_sign())
        } else {
            magnitude
        }
    }
}

/// Formats an operand string with the default conventions.
///
/// Shorthand for [`DisplayFormatter::format`] on a default formatter.
#[must_use]
pub fn format_for_display(value: &str) -> String {
    DisplayFormatter::new().format(value)
}
