//! Core calculator state machine and statistics engine.
//!
//! Everything in this module is synchronous and shell-agnostic: a UI front
//! end forwards discrete user actions into [`state::CalculatorState`] and
//! reads the display, the action log, and (on request) a statistics report
//! back out. No action crosses a thread boundary.

pub mod display;
pub mod history;
mod operations;
pub mod state;
pub mod stats;

pub use operations::Operation;
pub use state::CalculatorState;

use thiserror::Error;

/// Result type for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types.
///
/// Every variant is recoverable: the caller reports a message and the state
/// machine stays usable with all prior state intact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The display text does not parse as a number.
    #[error("not a number: {0:?}")]
    ParseError(String),
    /// Division with a zero right operand.
    #[error("division by zero")]
    DivisionByZero,
    /// Statistics requested over an empty sample list.
    #[error("no samples accumulated")]
    EmptySamples,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = CalcError::ParseError("1.2.3".into());
        assert_eq!(format!("{err}"), "not a number: \"1.2.3\"");
    }

    #[test]
    fn test_division_by_zero_display() {
        assert_eq!(format!("{}", CalcError::DivisionByZero), "division by zero");
    }

    #[test]
    fn test_empty_samples_display() {
        assert_eq!(
            format!("{}", CalcError::EmptySamples),
            "no samples accumulated"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("zero"));
    }
}
