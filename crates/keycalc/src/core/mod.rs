//! Calculator core: operand state machine, operators and display formatting
//!
//! Nothing in here fails at runtime. Malformed or incomplete input is
//! silently ignored by [`CalculatorState`]; errors only arise when text is
//! parsed into the typed inputs the state machine accepts.

pub mod display;
mod operator;
pub mod state;

pub use display::{format_for_display, number_to_string, parse_operand, DisplayFormatter};
pub use operator::Operator;
pub use state::{CalculatorState, Phase};

use thiserror::Error;

/// Result type for parsing and configuration
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised at the text boundary of the calculator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Symbol is not one of `+ - × ÷` (or an ASCII stand-in)
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),

    /// Digit button value outside `0`-`9`
    #[error("Invalid digit: {0} (expected 0-9)")]
    InvalidDigit(u8),

    /// Label does not name any keypad button
    #[error("Unknown button: {0:?}")]
    UnknownButton(String),

    /// Display configuration could not be read
    #[error("Invalid configuration: {0}")]
    Config(String),
}
