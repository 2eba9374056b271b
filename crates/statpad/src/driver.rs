//! The action surface a shell drives the calculator through.
//!
//! A shell — terminal, test harness, anything — forwards discrete
//! [`Action`]s and reads the display, the log, and the statistics report
//! back. The [`CalculatorDriver`] trait keeps shell-independent test
//! specifications reusable: write the verification once, run it against any
//! driver implementation.

use tracing::debug;

use crate::core::{CalcError, CalcResult, CalculatorState, Operation};

/// A discrete user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A digit or decimal-point press.
    Digit(char),
    /// Remove the last display character.
    Backspace,
    /// Flip the display's sign.
    ToggleSign,
    /// Capture the display as the left operand of an operator.
    Operator(Operation),
    /// Apply the pending operation.
    Equals,
    /// Append the display value to the sample list.
    AddSample,
    /// Reset the display and empty the sample list.
    Clear,
    /// Request the statistics report.
    Statistics,
}

/// Abstract driver surface implemented by every shell binding.
pub trait CalculatorDriver {
    /// Dispatches one action. Recoverable errors come back to the caller
    /// for display; state stays intact.
    fn press(&mut self, action: Action) -> CalcResult<()>;

    /// Current display text.
    fn display(&self) -> String;

    /// Action log lines, newest first.
    fn log_lines(&self) -> Vec<String>;

    /// The statistics report, or the error message when no samples exist.
    fn statistics_report(&self) -> String;
}

/// Driver over a plain [`CalculatorState`], used directly by the terminal
/// shell and by tests.
#[derive(Debug, Clone, Default)]
pub struct StateDriver {
    state: CalculatorState,
}

impl StateDriver {
    /// Creates a driver over a fresh state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying state.
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the underlying state mutably.
    pub fn state_mut(&mut self) -> &mut CalculatorState {
        &mut self.state
    }
}

impl CalculatorDriver for StateDriver {
    fn press(&mut self, action: Action) -> CalcResult<()> {
        debug!(?action, "dispatch");
        match action {
            Action::Digit(token) => self.state.press_digit(token),
            Action::Backspace => self.state.backspace(),
            Action::ToggleSign => self.state.toggle_sign(),
            Action::Operator(op) => self.state.set_operator(op)?,
            Action::Equals => {
                self.state.evaluate()?;
            }
            Action::AddSample => {
                self.state.add_current()?;
            }
            Action::Clear => self.state.clear(),
            Action::Statistics => {
                // Validated here so a shell treating every action uniformly
                // still sees the empty-samples error.
                self.state.statistics()?;
            }
        }
        Ok(())
    }

    fn display(&self) -> String {
        self.state.display().to_string()
    }

    fn log_lines(&self) -> Vec<String> {
        self.state.log().iter().map(str::to_string).collect()
    }

    fn statistics_report(&self) -> String {
        match self.state.statistics() {
            Ok(summary) => summary.report(),
            Err(e) => format!("Error: {e}"),
        }
    }
}

// ===== Reusable driver specifications =====
// These run against ANY CalculatorDriver implementation.

/// Types a number one token at a time.
pub fn type_number<D: CalculatorDriver>(driver: &mut D, text: &str) {
    for token in text.chars() {
        driver.press(Action::Digit(token)).unwrap();
    }
}

/// Verifies the display-editing rules.
pub fn verify_display_editing<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Action::Clear).unwrap();
    type_number(driver, "12.5");
    assert_eq!(driver.display(), "12.5");

    // Second point ignored.
    driver.press(Action::Digit('.')).unwrap();
    assert_eq!(driver.display(), "12.5");

    driver.press(Action::Backspace).unwrap();
    assert_eq!(driver.display(), "12.");

    driver.press(Action::ToggleSign).unwrap();
    assert_eq!(driver.display(), "-12.");
    driver.press(Action::ToggleSign).unwrap();
    assert_eq!(driver.display(), "12.");
}

/// Verifies the arithmetic path: operator, equals, sample accumulation.
pub fn verify_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Action::Clear).unwrap();
    type_number(driver, "6");
    driver.press(Action::Operator(Operation::Multiply)).unwrap();
    type_number(driver, "7");
    driver.press(Action::Equals).unwrap();
    assert_eq!(driver.display(), "42");
    assert_eq!(driver.log_lines().first().map(String::as_str), Some("Result: 42"));
}

/// Verifies that errors are reported without disturbing state.
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Action::Clear).unwrap();
    type_number(driver, "10");
    driver.press(Action::Operator(Operation::Divide)).unwrap();
    let err = driver.press(Action::Equals).unwrap_err();
    assert_eq!(err, CalcError::DivisionByZero);
    assert_eq!(driver.display(), "0");
}

/// Verifies the statistics report and its empty-samples error.
pub fn verify_statistics<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Action::Clear).unwrap();
    assert_eq!(
        driver.press(Action::Statistics).unwrap_err(),
        CalcError::EmptySamples
    );
    assert!(driver.statistics_report().starts_with("Error:"));

    for text in ["3", "1", "2"] {
        type_number(driver, text);
        driver.press(Action::AddSample).unwrap();
    }
    driver.press(Action::Statistics).unwrap();
    let report = driver.statistics_report();
    assert!(report.contains("Count:    3"));
    assert!(report.contains("Mean:     2"));
}

/// Runs the complete driver specification.
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_display_editing(driver);
    verify_arithmetic(driver);
    verify_error_handling(driver);
    verify_statistics(driver);
}
