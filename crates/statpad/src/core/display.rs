//! The display value: the string being edited as the in-progress operand.
//!
//! Editing works on the textual representation, not a parsed number, so
//! intermediate states like `"-"` or `"1."` are valid and expected. The
//! display parses lazily, only when an operation needs its numeric value.

use crate::core::{CalcError, CalcResult};

/// The string shown and edited by the user, anchored at `"0"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayValue {
    text: String,
}

impl Default for DisplayValue {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayValue {
    /// Creates a display reading `"0"`.
    #[must_use]
    pub fn new() -> Self {
        Self { text: "0".into() }
    }

    /// Returns the current display text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Appends a digit or decimal point.
    ///
    /// A `"0"` display is replaced by a digit token (a point yields `"0."`).
    /// A second point, or any token outside `'0'..='9'` and `'.'`, is a
    /// silent no-op.
    pub fn press(&mut self, token: char) {
        if token != '.' && !token.is_ascii_digit() {
            return;
        }
        if token == '.' && self.text.contains('.') {
            return;
        }
        if self.text == "0" && token != '.' {
            self.text = token.to_string();
        } else {
            self.text.push(token);
        }
    }

    /// Removes the last character, falling back to `"0"` once one character
    /// (or nothing) remains.
    pub fn backspace(&mut self) {
        if self.text.len() > 1 {
            self.text.pop();
        } else {
            self.text = "0".into();
        }
    }

    /// Flips the sign prefix. `"0"` stays unsigned; applying twice restores
    /// any other display.
    pub fn toggle_sign(&mut self) {
        if let Some(stripped) = self.text.strip_prefix('-') {
            self.text = stripped.to_string();
        } else if self.text != "0" {
            self.text.insert(0, '-');
        }
    }

    /// Parses the display as an `f64`, leaving the text untouched either way.
    pub fn parse(&self) -> CalcResult<f64> {
        self.text
            .parse()
            .map_err(|_| CalcError::ParseError(self.text.clone()))
    }

    /// Replaces the display with the formatted form of `value`.
    pub fn set_value(&mut self, value: f64) {
        self.text = format_number(value);
    }

    /// Resets the display to `"0"`.
    pub fn reset(&mut self) {
        self.text = "0".into();
    }
}

/// Formats a number for display: integral values render without a fraction,
/// others with up to ten decimals and trailing zeros trimmed.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.10}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
