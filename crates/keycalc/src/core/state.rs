//! Two-operand calculator state machine
//!
//! Operands are kept as text so that partial input such as `"12."` or a
//! lone `"."` survives until it is needed as a number. Every operation is
//! either a guarded no-op or a pure transformation of the three fields.

use std::mem;

use tracing::{debug, trace};

use crate::core::display::{number_to_string, parse_operand};
use crate::core::Operator;

/// The decimal-point token accepted by [`CalculatorState::append_digit`]
pub const DECIMAL_POINT: char = '.';

/// Informal phase of the state machine, derived from the operand slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing entered
    Empty,
    /// Typing the left operand
    EnteringFirst,
    /// Operator chosen, right operand not started
    OperatorChosen,
    /// Typing the right operand
    EnteringSecond,
    /// Current operand holds a computed value
    Result,
}

/// Running state of the calculator.
///
/// ```rust
/// use keycalc::core::{CalculatorState, Operator};
///
/// let mut calc = CalculatorState::new();
/// calc.append_digit('3');
/// calc.choose_operation(Operator::Add);
/// calc.append_digit('4');
/// calc.choose_operation(Operator::Add); // folds 3 + 4
/// calc.append_digit('5');
/// calc.compute();
/// assert_eq!(calc.current_operand(), "12");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorState {
    current: String,
    previous: String,
    operation: Option<Operator>,
    holds_result: bool,
}

impl CalculatorState {
    /// Creates a calculator in the cleared state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Operand being typed (or the last result)
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.current
    }

    /// Captured left operand of the pending operation
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        &self.previous
    }

    /// Pending operator, if any
    #[must_use]
    pub const fn operation(&self) -> Option<Operator> {
        self.operation
    }

    /// True when all three fields hold their initial values
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.current.is_empty() && self.previous.is_empty() && self.operation.is_none()
    }

    /// Current phase of the state machine
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.operation.is_some(), self.current.is_empty()) {
            (true, true) => Phase::OperatorChosen,
            (true, false) => Phase::EnteringSecond,
            (false, true) => Phase::Empty,
            (false, false) if self.holds_result => Phase::Result,
            (false, false) => Phase::EnteringFirst,
        }
    }

    /// Resets every field
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Removes the last character of the current operand
    pub fn delete(&mut self) {
        if self.current.pop().is_some() {
            self.holds_result = false;
        }
    }

    /// Appends a digit or the decimal point to the current operand.
    ///
    /// A second decimal point is ignored, as is any token that is neither
    /// `0`-`9` nor `.`.
    pub fn append_digit(&mut self, token: char) {
        if !token.is_ascii_digit() && token != DECIMAL_POINT {
            trace!(?token, "ignoring non-digit token");
            return;
        }
        if token == DECIMAL_POINT && self.current.contains(DECIMAL_POINT) {
            trace!(current = %self.current, "ignoring duplicate decimal point");
            return;
        }
        self.current.push(token);
        self.holds_result = false;
    }

    /// Selects the operator to apply to the current operand.
    ///
    /// Ignored while nothing has been typed. A pending operation is folded
    /// first, so `3 + 4 +` leaves `7` as the new left operand. The fold is
    /// itself a no-op when the right operand is incomplete, in which case
    /// the incomplete text becomes the left operand.
    pub fn choose_operation(&mut self, op: Operator) {
        if self.current.is_empty() {
            trace!(%op, "ignoring operator with no operand");
            return;
        }
        if !self.previous.is_empty() {
            self.compute();
        }
        self.operation = Some(op);
        self.previous = mem::take(&mut self.current);
        self.holds_result = false;
    }

    /// Applies the pending operator to both operands.
    ///
    /// No-op when either operand does not parse as a number or when no
    /// operator is pending.
    pub fn compute(&mut self) {
        let (Some(lhs), Some(rhs)) = (parse_operand(&self.previous), parse_operand(&self.current))
        else {
            trace!(previous = %self.previous, current = %self.current, "operands incomplete");
            return;
        };
        let Some(op) = self.operation else {
            trace!("no pending operator");
            return;
        };

        let result = op.apply(lhs, rhs);
        debug!(lhs, %op, rhs, result, "computed");

        self.current = number_to_string(result);
        self.previous.clear();
        self.operation = None;
        self.holds_result = true;
    }
}
