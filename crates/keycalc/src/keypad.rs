//! Calculator keypad
//!
//! Models the buttons of the calculator and the grid they sit in, so that
//! an input layer can turn a click (by element id) or a label into a
//! [`KeypadAction`].
//!
//! Layout:
//! ```text
//! [     AC      ] [ DEL ] [  ÷  ]
//! [  1  ] [  2  ] [  3  ] [  ×  ]
//! [  4  ] [  5  ] [  6  ] [  +  ]
//! [  7  ] [  8  ] [  9  ] [  -  ]
//! [  .  ] [  0  ] [      =      ]
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, Operator};

/// What a keypad button does when pressed
///
/// Deserialization rejects digits above 9; build digit actions from
/// untrusted values with [`KeypadAction::digit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "UncheckedAction")]
pub enum KeypadAction {
    /// Append a digit (0-9)
    Digit(u8),
    /// Append the decimal point
    Decimal,
    /// Choose an operator
    Operator(Operator),
    /// Compute the pending operation
    Equals,
    /// Delete the last character
    Delete,
    /// Clear everything
    AllClear,
}

/// Wire form of [`KeypadAction`] before the digit range is checked
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
enum UncheckedAction {
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Delete,
    AllClear,
}

impl TryFrom<UncheckedAction> for KeypadAction {
    type Error = CalcError;

    fn try_from(action: UncheckedAction) -> Result<Self, Self::Error> {
        Ok(match action {
            UncheckedAction::Digit(d) => return Self::digit(d),
            UncheckedAction::Decimal => Self::Decimal,
            UncheckedAction::Operator(op) => Self::Operator(op),
            UncheckedAction::Equals => Self::Equals,
            UncheckedAction::Delete => Self::Delete,
            UncheckedAction::AllClear => Self::AllClear,
        })
    }
}

impl KeypadAction {
    /// Digit action, or [`CalcError::InvalidDigit`] above 9
    pub const fn digit(d: u8) -> CalcResult<Self> {
        if d <= 9 {
            Ok(Self::Digit(d))
        } else {
            Err(CalcError::InvalidDigit(d))
        }
    }

    /// Label printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::AllClear => "AC".to_string(),
        }
    }

    /// Element id of the button
    #[must_use]
    pub fn element_id(&self) -> String {
        match self {
            Self::Digit(d) => format!("btn-{d}"),
            Self::Decimal => "btn-decimal".to_string(),
            Self::Operator(op) => format!("btn-{}", op.name()),
            Self::Equals => "btn-equals".to_string(),
            Self::Delete => "btn-delete".to_string(),
            Self::AllClear => "btn-all-clear".to_string(),
        }
    }

    /// Digit token for digit and decimal buttons
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            Self::Operator(_) | Self::Equals | Self::Delete | Self::AllClear => None,
        }
    }
}

impl fmt::Display for KeypadAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for KeypadAction {
    type Err = CalcError;

    /// Parses a button label.
    ///
    /// Accepts digits, `.`, `=`, `AC`, `DEL` (any case) and the operator
    /// symbols with their ASCII stand-ins.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.eq_ignore_ascii_case("ac") {
            return Ok(Self::AllClear);
        }
        if label.eq_ignore_ascii_case("del") {
            return Ok(Self::Delete);
        }

        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some('.'), None) => Ok(Self::Decimal),
            (Some('='), None) => Ok(Self::Equals),
            (Some(c), None) => match c.to_digit(10) {
                Some(d) => Self::digit(d as u8),
                None => Operator::try_from(c)
                    .map(Self::Operator)
                    .map_err(|_| CalcError::UnknownButton(s.to_string())),
            },
            _ => Err(CalcError::UnknownButton(s.to_string())),
        }
    }
}

/// A button placed on the keypad grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: KeypadAction,
    /// Element id
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column of the leftmost cell (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
}

impl KeypadButton {
    /// Creates a single-column button
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self::spanning(action, row, col, 1)
    }

    /// Creates a button covering `span` columns
    #[must_use]
    pub fn spanning(action: KeypadAction, row: usize, col: usize, span: usize) -> Self {
        Self {
            action,
            id: action.element_id(),
            row,
            col,
            span,
        }
    }

    /// True if the button covers the given grid cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Width of a single-column cell in [`render_grid`](Self::render_grid)
    const CELL_WIDTH: usize = 5;

    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction::{AllClear, Decimal, Delete, Digit, Equals};
        use Operator::{Add, Divide, Multiply, Subtract};

        let buttons = vec![
            // Row 0: AC AC DEL ÷
            KeypadButton::spanning(AllClear, 0, 0, 2),
            KeypadButton::new(Delete, 0, 2),
            KeypadButton::new(KeypadAction::Operator(Divide), 0, 3),
            // Row 1: 1 2 3 ×
            KeypadButton::new(Digit(1), 1, 0),
            KeypadButton::new(Digit(2), 1, 1),
            KeypadButton::new(Digit(3), 1, 2),
            KeypadButton::new(KeypadAction::Operator(Multiply), 1, 3),
            // Row 2: 4 5 6 +
            KeypadButton::new(Digit(4), 2, 0),
            KeypadButton::new(Digit(5), 2, 1),
            KeypadButton::new(Digit(6), 2, 2),
            KeypadButton::new(KeypadAction::Operator(Add), 2, 3),
            // Row 3: 7 8 9 -
            KeypadButton::new(Digit(7), 3, 0),
            KeypadButton::new(Digit(8), 3, 1),
            KeypadButton::new(Digit(9), 3, 2),
            KeypadButton::new(KeypadAction::Operator(Subtract), 3, 3),
            // Row 4: . 0 = =
            KeypadButton::new(Decimal, 4, 0),
            KeypadButton::new(Digit(0), 4, 1),
            KeypadButton::spanning(Equals, 4, 2, 2),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// All buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Button covering the given cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by label (see [`KeypadAction::from_str`])
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&KeypadButton> {
        let action = label.parse::<KeypadAction>().ok()?;
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Maps a click on an element to the action of its button
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_by_id(element_id).map(|b| b.action)
    }

    /// Renders the keypad as a text grid, one line per row
    #[must_use]
    pub fn render_grid(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            let cells: Vec<String> = self
                .buttons
                .iter()
                .filter(|b| b.row == row)
                .map(|b| {
                    let width = b.span * Self::CELL_WIDTH + (b.span - 1) * 3;
                    format!("[{:^width$}]", b.action.label())
                })
                .collect();
            lines.push(cells.join(" "));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== KeypadAction =====

    #[test]
    fn test_action_labels() {
        assert_eq!(KeypadAction::Digit(5).label(), "5");
        assert_eq!(KeypadAction::Decimal.label(), ".");
        assert_eq!(KeypadAction::Operator(Operator::Multiply).label(), "×");
        assert_eq!(KeypadAction::Equals.label(), "=");
        assert_eq!(KeypadAction::Delete.label(), "DEL");
        assert_eq!(KeypadAction::AllClear.label(), "AC");
    }

    #[test]
    fn test_action_element_ids() {
        assert_eq!(KeypadAction::Digit(0).element_id(), "btn-0");
        assert_eq!(KeypadAction::Decimal.element_id(), "btn-decimal");
        assert_eq!(
            KeypadAction::Operator(Operator::Divide).element_id(),
            "btn-divide"
        );
        assert_eq!(KeypadAction::AllClear.element_id(), "btn-all-clear");
    }

    #[test]
    fn test_action_to_char() {
        for d in 0..=9 {
            assert_eq!(
                KeypadAction::Digit(d).to_char(),
                char::from_digit(u32::from(d), 10)
            );
        }
        assert_eq!(KeypadAction::Decimal.to_char(), Some('.'));
        assert_eq!(KeypadAction::Equals.to_char(), None);
        assert_eq!(KeypadAction::Operator(Operator::Add).to_char(), None);
    }

    #[test]
    fn test_action_from_label() {
        assert_eq!("7".parse::<KeypadAction>().unwrap(), KeypadAction::Digit(7));
        assert_eq!(".".parse::<KeypadAction>().unwrap(), KeypadAction::Decimal);
        assert_eq!("=".parse::<KeypadAction>().unwrap(), KeypadAction::Equals);
        assert_eq!("del".parse::<KeypadAction>().unwrap(), KeypadAction::Delete);
        assert_eq!("AC".parse::<KeypadAction>().unwrap(), KeypadAction::AllClear);
        assert_eq!(
            "*".parse::<KeypadAction>().unwrap(),
            KeypadAction::Operator(Operator::Multiply)
        );
        assert_eq!(
            "÷".parse::<KeypadAction>().unwrap(),
            KeypadAction::Operator(Operator::Divide)
        );
    }

    #[test]
    fn test_action_from_unknown_label() {
        assert!(matches!(
            "%".parse::<KeypadAction>(),
            Err(CalcError::UnknownButton(s)) if s == "%"
        ));
        assert!("12".parse::<KeypadAction>().is_err());
        assert!("".parse::<KeypadAction>().is_err());
    }

    #[test]
    fn test_label_round_trip() {
        let keypad = Keypad::new();
        for btn in keypad.buttons() {
            assert_eq!(btn.action.label().parse::<KeypadAction>().unwrap(), btn.action);
        }
    }

    // ===== Keypad =====

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.dimensions(), (5, 4));
        assert_eq!(keypad.button_count(), 18);
    }

    #[test]
    fn test_spanning_buttons_cover_two_cells() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.get_button_at(0, 0).unwrap().action,
            KeypadAction::AllClear
        );
        assert_eq!(
            keypad.get_button_at(0, 1).unwrap().action,
            KeypadAction::AllClear
        );
        assert_eq!(keypad.get_button_at(4, 2).unwrap().action, KeypadAction::Equals);
        assert_eq!(keypad.get_button_at(4, 3).unwrap().action, KeypadAction::Equals);
    }

    #[test]
    fn test_every_cell_is_covered() {
        let keypad = Keypad::new();
        let (rows, cols) = keypad.dimensions();
        for row in 0..rows {
            for col in 0..cols {
                assert!(keypad.get_button_at(row, col).is_some(), "({row}, {col})");
            }
        }
    }

    #[test]
    fn test_out_of_bounds_cell() {
        let keypad = Keypad::new();
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_find_by_id_and_click() {
        let keypad = Keypad::new();
        assert_eq!(keypad.find_by_id("btn-9").unwrap().row, 3);
        assert_eq!(
            keypad.handle_click("btn-plus"),
            Some(KeypadAction::Operator(Operator::Add))
        );
        assert_eq!(keypad.handle_click("btn-sqrt"), None);
    }

    #[test]
    fn test_find_by_label() {
        let keypad = Keypad::new();
        assert_eq!(keypad.find_by_label("x").unwrap().id, "btn-times");
        assert!(keypad.find_by_label("?").is_none());
    }

    #[test]
    fn test_render_grid() {
        let grid = Keypad::new().render_grid();
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "[     AC      ] [ DEL ] [  ÷  ]");
        assert_eq!(lines[1], "[  1  ] [  2  ] [  3  ] [  ×  ]");
        assert_eq!(lines[4], "[  .  ] [  0  ] [      =      ]");
    }

    #[test]
    fn test_action_serde() {
        let json = serde_json::to_string(&KeypadAction::AllClear).unwrap();
        assert_eq!(json, "\"all-clear\"");
        let json = serde_json::to_string(&KeypadAction::Digit(3)).unwrap();
        assert_eq!(json, "{\"digit\":3}");
        let action: KeypadAction = serde_json::from_str(&json).unwrap();
        assert_eq!(action, KeypadAction::Digit(3));
        let action: KeypadAction = serde_json::from_str("{\"operator\":\"divide\"}").unwrap();
        assert_eq!(action, KeypadAction::Operator(Operator::Divide));
    }

    #[test]
    fn test_digit_constructor_checks_range() {
        assert_eq!(KeypadAction::digit(0), Ok(KeypadAction::Digit(0)));
        assert_eq!(KeypadAction::digit(9), Ok(KeypadAction::Digit(9)));
        assert_eq!(KeypadAction::digit(10), Err(CalcError::InvalidDigit(10)));
        assert_eq!(KeypadAction::digit(u8::MAX), Err(CalcError::InvalidDigit(255)));
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_digit() {
        let err = serde_json::from_str::<KeypadAction>("{\"digit\":12}").unwrap_err();
        assert!(err.to_string().contains("Invalid digit: 12"));
    }
}
