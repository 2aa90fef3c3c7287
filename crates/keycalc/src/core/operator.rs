//! Binary operators offered on the keypad
//!
//! The set is closed: once a symbol has been parsed into an [`Operator`]
//! there is no way to hold an unrecognized operator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::CalcError;

/// One of the four arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order (top to bottom in the right column)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Add, Self::Subtract];

    /// Returns the symbol shown on the keypad and in the previous-operand line
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Short name used for element ids
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divide",
        }
    }

    /// Applies the operator with IEEE-754 semantics.
    ///
    /// Division by zero yields an infinity (or NaN for `0 ÷ 0`); it is not
    /// an error.
    #[must_use]
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Self::Add),
            // U+2212 is the minus sign the Swedish display prints
            '-' | '\u{2212}' => Ok(Self::Subtract),
            '×' | 'x' | 'X' | '*' => Ok(Self::Multiply),
            '÷' | '/' => Ok(Self::Divide),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(CalcError::UnknownOperator(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(Operator::Add.symbol(), '+');
        assert_eq!(Operator::Subtract.symbol(), '-');
        assert_eq!(Operator::Multiply.symbol(), '×');
        assert_eq!(Operator::Divide.symbol(), '÷');
    }

    #[test]
    fn test_display_matches_symbol() {
        for op in Operator::ALL {
            assert_eq!(op.to_string(), op.symbol().to_string());
        }
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(3.0, 4.0), 7.0);
        assert_eq!(Operator::Subtract.apply(3.0, 4.0), -1.0);
        assert_eq!(Operator::Multiply.apply(3.0, 4.0), 12.0);
        assert_eq!(Operator::Divide.apply(6.0, 3.0), 2.0);
    }

    #[test]
    fn test_divide_by_zero_is_not_an_error() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.apply(-5.0, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_parse_keypad_symbols() {
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("-".parse::<Operator>().unwrap(), Operator::Subtract);
        assert_eq!("×".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("÷".parse::<Operator>().unwrap(), Operator::Divide);
    }

    #[test]
    fn test_parse_ascii_stand_ins() {
        assert_eq!("*".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("x".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("/".parse::<Operator>().unwrap(), Operator::Divide);
        assert_eq!(" + ".parse::<Operator>().unwrap(), Operator::Add);
    }

    #[test]
    fn test_parse_unicode_minus() {
        assert_eq!(Operator::try_from('\u{2212}').unwrap(), Operator::Subtract);
        assert_eq!("\u{2212}".parse::<Operator>().unwrap(), Operator::Subtract);
        assert!(Operator::try_from('\u{2013}').is_err());
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(
            "%".parse::<Operator>(),
            Err(CalcError::UnknownOperator(s)) if s == "%"
        ));
        assert!("++".parse::<Operator>().is_err());
        assert!("".parse::<Operator>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Operator::Multiply).unwrap();
        assert_eq!(json, "\"multiply\"");
        let op: Operator = serde_json::from_str("\"divide\"").unwrap();
        assert_eq!(op, Operator::Divide);
    }
}
