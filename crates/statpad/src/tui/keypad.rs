//! The button grid.
//!
//! ```text
//! [ C ] [ ← ] [ ± ] [ / ]
//! [ 7 ] [ 8 ] [ 9 ] [ * ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ . ] [ = ] [ Σ ]
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::Operation;
use crate::driver::Action;

/// A single keypad button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The symbol on the button.
    pub label: char,
    /// Whether the button is currently highlighted.
    pub pressed: bool,
    /// The action this button performs.
    pub action: ButtonAction,
}

/// What a keypad button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Insert a digit (0-9).
    Digit(u8),
    /// Insert the decimal point.
    Decimal,
    /// Select a binary operator.
    Operator(Operation),
    /// Apply the pending operation.
    Equals,
    /// Remove the last display character.
    Backspace,
    /// Flip the display's sign.
    ToggleSign,
    /// Clear display and samples.
    Clear,
    /// Show the statistics report.
    Statistics,
}

impl ButtonAction {
    /// Maps the button to its calculator action.
    #[must_use]
    pub fn to_action(self) -> Action {
        match self {
            Self::Digit(d) => Action::Digit(char::from(b'0' + d)),
            Self::Decimal => Action::Digit('.'),
            Self::Operator(op) => Action::Operator(op),
            Self::Equals => Action::Equals,
            Self::Backspace => Action::Backspace,
            Self::ToggleSign => Action::ToggleSign,
            Self::Clear => Action::Clear,
            Self::Statistics => Action::Statistics,
        }
    }
}

impl KeypadButton {
    fn new(label: char, action: ButtonAction) -> Self {
        Self {
            label,
            pressed: false,
            action,
        }
    }

    /// Creates a digit button.
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self::new(char::from(b'0' + d), ButtonAction::Digit(d))
    }

    /// Creates an operator button.
    #[must_use]
    pub fn operator(op: Operation) -> Self {
        let label = op.symbol().chars().next().unwrap_or('?');
        Self::new(label, ButtonAction::Operator(op))
    }

    /// Sets the highlight state.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// A 5x4 grid of buttons with hit-testing and key-press highlighting.
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order.
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: C ← ± /
            KeypadButton::new('C', ButtonAction::Clear),
            KeypadButton::new('←', ButtonAction::Backspace),
            KeypadButton::new('±', ButtonAction::ToggleSign),
            KeypadButton::operator(Operation::Divide),
            // Row 2: 7 8 9 *
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator(Operation::Multiply),
            // Row 3: 4 5 6 -
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator(Operation::Subtract),
            // Row 4: 1 2 3 +
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::operator(Operation::Add),
            // Row 5: 0 . = Σ
            KeypadButton::digit(0),
            KeypadButton::new('.', ButtonAction::Decimal),
            KeypadButton::new('=', ButtonAction::Equals),
            KeypadButton::new('Σ', ButtonAction::Statistics),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols).
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index.
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column.
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by its label.
    #[must_use]
    pub fn find_button_by_label(&self, label: char) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Highlights a button by index.
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Removes every highlight.
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the single button matching `label`, if any.
    pub fn highlight_label(&mut self, label: char) {
        self.release_all();
        if let Some(idx) = self.find_button_by_label(label) {
            self.press_button(idx);
        }
    }

    /// Iterates over all buttons.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Iterates over buttons with their (row, col) positions.
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position inside `area` to a button index.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // The outer border occupies one cell on each side.
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;

        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

/// Renders the keypad grid.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget over `keypad`.
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < 4 || inner.height < 5 {
            return;
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.action {
                    ButtonAction::Digit(_) | ButtonAction::Decimal => {
                        Style::default().fg(Color::White)
                    }
                    ButtonAction::Operator(_) => Style::default().fg(Color::Yellow),
                    ButtonAction::Equals => Style::default().fg(Color::Green),
                    ButtonAction::Clear | ButtonAction::Backspace => {
                        Style::default().fg(Color::Red)
                    }
                    ButtonAction::ToggleSign | ButtonAction::Statistics => {
                        Style::default().fg(Color::Magenta)
                    }
                }
            };

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                let label_x = x + (btn_width.saturating_sub(3)) / 2;
                let label_y = y + btn_height / 2;
                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
