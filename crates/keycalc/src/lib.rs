//! keycalc - a two-operand keypad calculator
//!
//! The core is a small state machine holding a current operand, a previous
//! operand and a pending operator. Operators fold left to right: pressing
//! `+` after `3 + 4` first computes `7`. Malformed input is ignored rather
//! than reported, and division by zero yields an infinity.
//!
//! Around the core sit a keypad model, a headless session that refreshes
//! the two display lines after every press, and locale-aware formatting.
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut session = CalculatorSession::with_config(DisplayConfig::for_locale(NumberLocale::English));
//! for label in ["1", "2", "3", "4", "+", "1", "="] {
//!     session.press_label(label).unwrap();
//! }
//! assert_eq!(session.display().current, "1,235");
//! assert_eq!(session.display().previous, "");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod keypad;
pub mod session;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{DisplayConfig, NumberLocale};
    pub use crate::core::{
        format_for_display, CalcError, CalcResult, CalculatorState, DisplayFormatter, Operator,
        Phase,
    };
    pub use crate::driver::{CalculatorDriver, HeadlessDriver};
    pub use crate::keypad::{Keypad, KeypadAction, KeypadButton};
    pub use crate::session::{CalculatorSession, DisplaySnapshot, Frame};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut calc = CalculatorState::new();
        calc.append_digit('2');
        calc.choose_operation(Operator::Add);
        calc.append_digit('3');
        calc.compute();
        assert_eq!(calc.current_operand(), "5");
    }

    #[test]
    fn test_clear_matches_initial_display() {
        let mut session = CalculatorSession::new();
        session.replay(["9", "×", "9"]).unwrap();
        session.press(KeypadAction::AllClear);
        assert_eq!(session.display(), &DisplaySnapshot::default());
        assert!(session.state().operation().is_none());
    }

    #[test]
    fn test_format_for_display_default_locale() {
        assert_eq!(format_for_display("1234.5"), "1\u{a0}234.5");
    }

    #[test]
    fn test_keypad_drives_session() {
        let keypad = Keypad::new();
        let mut session = CalculatorSession::new();
        for id in ["btn-6", "btn-divide", "btn-3", "btn-equals"] {
            let action = keypad.handle_click(id).unwrap();
            session.press(action);
        }
        assert_eq!(session.display().current, "2");
    }
}
