//! The calculator state machine.
//!
//! Owns the display editor, the pending binary operation, the sample list,
//! and the action log. A UI shell holds one instance and drives it one
//! action at a time; every method either completes or returns an error
//! leaving all state untouched.

use tracing::{debug, warn};

use crate::core::display::DisplayValue;
use crate::core::history::ActionLog;
use crate::core::stats::Summary;
use crate::core::{CalcResult, Operation};

/// A captured left operand and operator awaiting a right operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pending {
    /// Left operand, captured when the operator was pressed.
    pub left: f64,
    /// The operator awaiting its right operand.
    pub op: Operation,
}

/// Display, pending operation, sample list, and action log in one place.
#[derive(Debug, Clone, Default)]
pub struct CalculatorState {
    display: DisplayValue,
    pending: Option<Pending>,
    samples: Vec<f64>,
    log: ActionLog,
}

impl CalculatorState {
    /// Creates a fresh state: display `"0"`, no pending operation, no
    /// samples, empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current display text.
    #[must_use]
    pub fn display(&self) -> &str {
        self.display.as_str()
    }

    /// Returns the pending operation, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// Returns the accumulated samples, in insertion order.
    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Returns the action log.
    #[must_use]
    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Handles a digit or decimal-point press. Invalid tokens and second
    /// points are silently ignored; samples are never touched.
    pub fn press_digit(&mut self, token: char) {
        self.display.press(token);
    }

    /// Removes the last display character, resetting to `"0"` once nothing
    /// meaningful remains.
    pub fn backspace(&mut self) {
        self.display.backspace();
    }

    /// Flips the sign of the display value.
    pub fn toggle_sign(&mut self) {
        self.display.toggle_sign();
    }

    /// Captures the display as the left operand of `op` and resets the
    /// display for the right operand.
    ///
    /// On a parse failure the display text is left as typed.
    pub fn set_operator(&mut self, op: Operation) -> CalcResult<()> {
        let left = self.display.parse()?;
        debug!(left, op = op.symbol(), "operator set");
        self.pending = Some(Pending { left, op });
        self.display.reset();
        Ok(())
    }

    /// Applies the pending operation to the display value.
    ///
    /// On success the display shows the result, the result joins the sample
    /// list, and the log records it. The pending operation is consumed; a
    /// later `=` without a new operator is a no-op returning `Ok(None)`.
    /// Errors leave the pending operation, display, and samples untouched.
    pub fn evaluate(&mut self) -> CalcResult<Option<f64>> {
        let Some(Pending { left, op }) = self.pending else {
            debug!("evaluate with no pending operation ignored");
            return Ok(None);
        };
        let right = self.display.parse()?;
        let result = op.apply(left, right)?;
        if result.is_nan() {
            warn!(left, right, op = op.symbol(), "operation produced NaN");
        }
        self.pending = None;
        self.display.set_value(result);
        self.samples.push(result);
        self.log.record_result(result);
        debug!(left, right, op = op.symbol(), result, "evaluated");
        Ok(Some(result))
    }

    /// Appends the display value to the sample list and resets the display.
    pub fn add_current(&mut self) -> CalcResult<f64> {
        let value = self.display.parse()?;
        self.samples.push(value);
        self.log.record_added(value);
        self.display.reset();
        debug!(value, total = self.samples.len(), "sample added");
        Ok(value)
    }

    /// Resets the display and empties the sample list.
    ///
    /// The pending operation survives a clear: an operator pressed before
    /// `C` still applies to the next `=`.
    pub fn clear(&mut self) {
        self.display.reset();
        self.samples.clear();
        self.log.record_cleared();
        debug!("cleared");
    }

    /// Computes summary statistics over the accumulated samples.
    pub fn statistics(&self) -> CalcResult<Summary> {
        Summary::compute(&self.samples)
    }
}
