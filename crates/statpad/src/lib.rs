//! statpad - a calculator that remembers what you computed.
//!
//! Every entered or computed value accumulates into an in-memory sample
//! list; on demand the crate reports descriptive statistics over it (sum,
//! mean, median, quartiles, min/max, sign counts, mode). The core is a
//! shell-agnostic state machine; a ratatui terminal shell ships behind the
//! default `tui` feature.
//!
//! # Example
//!
//! ```rust
//! use statpad::prelude::*;
//!
//! let mut state = CalculatorState::new();
//! state.press_digit('6');
//! state.set_operator(Operation::Multiply).unwrap();
//! state.press_digit('7');
//! state.evaluate().unwrap();
//! assert_eq!(state.display(), "42");
//!
//! // The result joined the sample list.
//! let summary = state.statistics().unwrap();
//! assert_eq!(summary.count, 1);
//! assert_eq!(summary.mean, 42.0);
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

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::core::display::{format_number, DisplayValue};
    pub use crate::core::history::ActionLog;
    pub use crate::core::state::Pending;
    pub use crate::core::stats::Summary;
    pub use crate::core::{CalcError, CalcResult, CalculatorState, Operation};
    pub use crate::driver::{Action, CalculatorDriver, StateDriver};

    #[cfg(feature = "tui")]
    pub use crate::tui::CalculatorApp;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut state = CalculatorState::new();
        state.press_digit('5');
        state.add_current().unwrap();
        assert_eq!(state.statistics().unwrap().sum, 5.0);
    }

    #[test]
    fn test_driver_through_prelude() {
        let mut driver = StateDriver::new();
        driver.press(Action::Digit('8')).unwrap();
        assert_eq!(driver.display(), "8");
    }

    #[test]
    fn test_spec_example_session() {
        // 10 + 5 =, then add 3, then statistics over [15, 3].
        let mut state = CalculatorState::new();
        state.press_digit('1');
        state.press_digit('0');
        state.set_operator(Operation::Add).unwrap();
        state.press_digit('5');
        assert_eq!(state.evaluate().unwrap(), Some(15.0));

        // The result stays on the display; erase it before typing the next
        // sample so it is not concatenated onto "15".
        state.backspace();
        state.backspace();
        state.press_digit('3');
        state.add_current().unwrap();

        let summary = state.statistics().unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.sum, 18.0);
        assert_eq!(summary.median, 9.0);
        assert_eq!(summary.min, 3.0);
        assert_eq!(summary.max, 15.0);
    }
}
