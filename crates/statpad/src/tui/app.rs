//! Shell application state.
//!
//! Wraps the core driver with the bits only the terminal cares about: a
//! status line for the last error, a dismissable statistics popup, keypad
//! highlighting, and the quit flag.

use crate::driver::{Action, CalculatorDriver, StateDriver};
use crate::tui::keypad::Keypad;

/// Terminal application state.
#[derive(Debug, Default)]
pub struct CalculatorApp {
    driver: StateDriver,
    keypad: Keypad,
    /// Error message from the most recent failed action.
    status: Option<String>,
    /// Statistics report currently shown as a popup.
    report: Option<String>,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a fresh application.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current display text.
    #[must_use]
    pub fn display(&self) -> String {
        self.driver.display()
    }

    /// Returns the action log lines, newest first.
    #[must_use]
    pub fn log_lines(&self) -> Vec<String> {
        self.driver.log_lines()
    }

    /// Returns the number of accumulated samples.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.driver.state().samples().len()
    }

    /// Returns the pending operator symbol, if an operation is in flight.
    #[must_use]
    pub fn pending_symbol(&self) -> Option<&'static str> {
        self.driver.state().pending().map(|p| p.op.symbol())
    }

    /// Returns the current error message, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the statistics report popup content, if open.
    #[must_use]
    pub fn report(&self) -> Option<&str> {
        self.report.as_deref()
    }

    /// Returns the keypad (for rendering).
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies one calculator action.
    ///
    /// While the statistics popup is open, the first action only dismisses
    /// it.
    pub fn apply(&mut self, action: Action) {
        if self.report.take().is_some() {
            self.keypad.release_all();
            return;
        }

        self.highlight(action);

        if action == Action::Statistics {
            match self.driver.state().statistics() {
                Ok(summary) => {
                    self.status = None;
                    self.report = Some(summary.report());
                }
                Err(e) => self.status = Some(format!("Error: {e}")),
            }
            return;
        }

        match self.driver.press(action) {
            Ok(()) => self.status = None,
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    /// Highlights the keypad button matching `action`, if it has one.
    fn highlight(&mut self, action: Action) {
        let label = match action {
            Action::Digit(c) => Some(c),
            Action::Operator(op) => op.symbol().chars().next(),
            Action::Equals => Some('='),
            Action::Clear => Some('C'),
            Action::Backspace => Some('←'),
            Action::ToggleSign => Some('±'),
            Action::Statistics => Some('Σ'),
            Action::AddSample => None,
        };
        match label {
            Some(label) => self.keypad.highlight_label(label),
            None => self.keypad.release_all(),
        }
    }
}
