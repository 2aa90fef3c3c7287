//! Calculator drivers
//!
//! A [`CalculatorDriver`] presses buttons and reads the two display lines.
//! The `verify_*` routines describe expected calculator behavior once and
//! can be run against any driver.

use crate::config::DisplayConfig;
use crate::core::{CalcError, CalcResult};
use crate::session::{CalculatorSession, Frame};

/// Abstract driver for button-level interaction
///
/// # Example
///
/// ```rust
/// use keycalc::driver::{CalculatorDriver, HeadlessDriver};
///
/// let mut driver = HeadlessDriver::new();
/// driver.press_sequence("1 2 + 3 =").unwrap();
/// assert_eq!(driver.current_display(), "15");
/// ```
pub trait CalculatorDriver {
    /// Presses the button with the given label
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// Text of the current-operand line
    fn current_display(&self) -> String;

    /// Text of the previous-operand line
    fn previous_display(&self) -> String;

    /// Presses AC
    fn clear(&mut self);

    /// Presses every whitespace-separated label in `sequence`
    fn press_sequence(&mut self, sequence: &str) -> CalcResult<()> {
        for label in sequence.split_whitespace() {
            self.press(label)?;
        }
        Ok(())
    }
}

/// Driver backed by an in-memory [`CalculatorSession`]
///
/// Keeps a transcript of every press.
#[derive(Debug, Clone, Default)]
pub struct HeadlessDriver {
    session: CalculatorSession,
    transcript: Vec<Frame>,
}

impl HeadlessDriver {
    /// Creates a driver with the default display configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver with a custom display configuration
    #[must_use]
    pub fn with_config(config: DisplayConfig) -> Self {
        Self {
            session: CalculatorSession::with_config(config),
            transcript: Vec::new(),
        }
    }

    /// Underlying session
    #[must_use]
    pub fn session(&self) -> &CalculatorSession {
        &self.session
    }

    /// Every press so far, oldest first
    #[must_use]
    pub fn transcript(&self) -> &[Frame] {
        &self.transcript
    }

    /// Removes and returns the transcript
    pub fn take_transcript(&mut self) -> Vec<Frame> {
        std::mem::take(&mut self.transcript)
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        let mut frames = self.session.replay([label])?;
        self.transcript.append(&mut frames);
        Ok(())
    }

    fn current_display(&self) -> String {
        self.session.display().current.clone()
    }

    fn previous_display(&self) -> String {
        self.session.display().previous.clone()
    }

    fn clear(&mut self) {
        self.session.reset();
    }
}

// ===== Driver-independent verification routines =====
// Display assertions use values below 1000 so they hold for every locale.

/// Verifies the four operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press_sequence("2 + 3 =")?;
    assert_eq!(driver.current_display(), "5");
    driver.clear();

    driver.press_sequence("1 0 - 4 =")?;
    assert_eq!(driver.current_display(), "6");
    driver.clear();

    driver.press_sequence("6 × 7 =")?;
    assert_eq!(driver.current_display(), "42");
    driver.clear();

    driver.press_sequence("2 0 ÷ 4 =")?;
    assert_eq!(driver.current_display(), "5");
    driver.clear();
    Ok(())
}

/// Verifies left-to-right folding on each operator press
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press_sequence("3 + 4 +")?;
    assert_eq!(driver.previous_display(), "7 +");
    assert_eq!(driver.current_display(), "");
    driver.press_sequence("5 =")?;
    assert_eq!(driver.current_display(), "12");
    driver.clear();

    driver.press_sequence("2 + 3 × 4 =")?;
    assert_eq!(driver.current_display(), "20");
    driver.clear();
    Ok(())
}

/// Verifies division results, including division by zero
pub fn verify_division_semantics<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press_sequence("6 ÷ 3 =")?;
    assert_eq!(driver.current_display(), "2");
    driver.clear();

    driver.press_sequence("5 ÷ 0 =")?;
    assert!(driver.current_display().ends_with('∞'));
    assert_eq!(driver.previous_display(), "");
    driver.clear();

    driver.press_sequence("1 ÷ 4 =")?;
    assert_eq!(driver.current_display(), "0.25");
    driver.clear();
    Ok(())
}

/// Verifies delete, duplicate decimal points and ignored presses
pub fn verify_editing<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press_sequence("1 2 DEL")?;
    assert_eq!(driver.current_display(), "1");
    driver.press_sequence("DEL DEL")?;
    assert_eq!(driver.current_display(), "");
    driver.clear();

    driver.press_sequence("1 . . 5 .")?;
    assert_eq!(driver.current_display(), "1.5");
    driver.clear();

    driver.press_sequence("+ =")?;
    assert_eq!(driver.current_display(), "");
    assert_eq!(driver.previous_display(), "");

    assert!(matches!(
        driver.press("%"),
        Err(CalcError::UnknownButton(_))
    ));
    driver.clear();
    Ok(())
}

/// Runs every verification routine
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_basic_arithmetic(driver)?;
    verify_chaining(driver)?;
    verify_division_semantics(driver)?;
    verify_editing(driver)
}
