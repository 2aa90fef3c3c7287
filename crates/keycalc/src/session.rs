//! Headless calculator session
//!
//! Owns a [`CalculatorState`] and refreshes a [`DisplaySnapshot`] after
//! every button press, the way a GUI would repaint its two display lines
//! after each click handler runs.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::DisplayConfig;
use crate::core::{CalcResult, CalculatorState, DisplayFormatter};
use crate::keypad::KeypadAction;

/// The two display lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Previous operand and pending operator, or empty
    pub previous: String,
    /// Current operand
    pub current: String,
}

/// Display after a single press
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Label of the button pressed
    pub label: String,
    /// Display after the press
    pub display: DisplaySnapshot,
}

/// A calculator session: state, formatter and current display
#[derive(Debug, Clone, Default)]
pub struct CalculatorSession {
    state: CalculatorState,
    formatter: DisplayFormatter,
    display: DisplaySnapshot,
}

impl CalculatorSession {
    /// Creates a session with the default display configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with a custom display configuration
    #[must_use]
    pub fn with_config(config: DisplayConfig) -> Self {
        Self {
            formatter: DisplayFormatter::with_config(config),
            ..Self::default()
        }
    }

    /// Underlying state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Formatter used for the display
    #[must_use]
    pub fn formatter(&self) -> &DisplayFormatter {
        &self.formatter
    }

    /// Current display
    #[must_use]
    pub fn display(&self) -> &DisplaySnapshot {
        &self.display
    }

    /// Performs the action of one button and refreshes the display
    pub fn press(&mut self, action: KeypadAction) -> &DisplaySnapshot {
        match action {
            KeypadAction::Digit(_) | KeypadAction::Decimal => {
                if let Some(token) = action.to_char() {
                    self.state.append_digit(token);
                } else {
                    trace!(%action, "ignoring out-of-range digit");
                }
            }
            KeypadAction::Operator(op) => self.state.choose_operation(op),
            KeypadAction::Equals => self.state.compute(),
            KeypadAction::Delete => self.state.delete(),
            KeypadAction::AllClear => self.state.clear(),
        }
        self.refresh();
        debug!(%action, previous = %self.display.previous, current = %self.display.current, "pressed");
        &self.display
    }

    /// Parses a button label and presses it
    pub fn press_label(&mut self, label: &str) -> CalcResult<&DisplaySnapshot> {
        let action = label.parse::<KeypadAction>()?;
        Ok(self.press(action))
    }

    /// Presses each label in turn, recording the display after every press.
    ///
    /// Stops at the first unknown label; presses before it have already
    /// taken effect.
    pub fn replay<I, S>(&mut self, labels: I) -> CalcResult<Vec<Frame>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut frames = Vec::new();
        for label in labels {
            let label = label.as_ref();
            let display = self.press_label(label)?.clone();
            frames.push(Frame {
                label: label.to_string(),
                display,
            });
        }
        Ok(frames)
    }

    /// Clears the calculator and the display
    pub fn reset(&mut self) {
        self.press(KeypadAction::AllClear);
    }

    fn refresh(&mut self) {
        self.display = DisplaySnapshot {
            previous: self.formatter.previous_display(&self.state),
            current: self.formatter.current_display(&self.state),
        };
    }
}
