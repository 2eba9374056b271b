//! Keyboard mapping for the terminal shell.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Operation;
use crate::driver::Action;

/// What a key press means to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an action to the calculator.
    Calculator(Action),
    /// Quit the application.
    Quit,
    /// Key carries no meaning here.
    Ignored,
}

/// Maps key events to shell actions.
///
/// Digits and `.` type into the display; `+ - * / %` select an operator;
/// Enter or `=` evaluates; `a` adds the display value to the samples;
/// `s` flips the sign; `m` shows statistics; `c` or Esc clears;
/// `q` or Ctrl+C quits.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to a shell action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::Ignored,
            };
        }

        match code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                KeyAction::Calculator(Action::Digit(c))
            }
            KeyCode::Char(c) => match Operation::from_symbol(c) {
                Some(op) => KeyAction::Calculator(Action::Operator(op)),
                None => match c {
                    '=' => KeyAction::Calculator(Action::Equals),
                    'a' => KeyAction::Calculator(Action::AddSample),
                    's' => KeyAction::Calculator(Action::ToggleSign),
                    'm' => KeyAction::Calculator(Action::Statistics),
                    'c' => KeyAction::Calculator(Action::Clear),
                    'q' => KeyAction::Quit,
                    _ => KeyAction::Ignored,
                },
            },
            KeyCode::Enter => KeyAction::Calculator(Action::Equals),
            KeyCode::Backspace => KeyAction::Calculator(Action::Backspace),
            KeyCode::Esc => KeyAction::Calculator(Action::Clear),
            _ => KeyAction::Ignored,
        }
    }
}
