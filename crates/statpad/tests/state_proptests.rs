//! Property-based tests for the display editor and the state machine.

use proptest::prelude::*;
use statpad::prelude::*;

// ===== Strategy definitions =====

/// Any digit or decimal-point token.
fn token_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('0', '9'),
        Just('.'),
    ]
}

/// A sequence of display tokens.
fn token_seq_strategy() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(token_strategy(), 0..20)
}

/// Any binary operator.
fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
        Just(Operation::Modulo),
    ]
}

/// Any calculator action, weighted toward typing.
fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => token_strategy().prop_map(Action::Digit),
        1 => Just(Action::Backspace),
        1 => Just(Action::ToggleSign),
        1 => operation_strategy().prop_map(Action::Operator),
        1 => Just(Action::Equals),
        1 => Just(Action::AddSample),
        1 => Just(Action::Clear),
        1 => Just(Action::Statistics),
    ]
}

fn type_tokens(state: &mut CalculatorState, tokens: &[char]) {
    for &t in tokens {
        state.press_digit(t);
    }
}

// ===== Display editing properties =====

proptest! {
    /// Digit entry always leaves a parseable display with at most one '.'.
    #[test]
    fn prop_digit_entry_always_parses(tokens in token_seq_strategy()) {
        let mut state = CalculatorState::new();
        type_tokens(&mut state, &tokens);
        prop_assert!(state.display().parse::<f64>().is_ok());
        let points = state.display().matches('.').count();
        prop_assert!(points <= 1);
    }

    /// Toggling the sign twice restores any digit-entered display.
    #[test]
    fn prop_toggle_sign_involution(tokens in token_seq_strategy()) {
        let mut state = CalculatorState::new();
        type_tokens(&mut state, &tokens);
        let before = state.display().to_string();
        state.toggle_sign();
        state.toggle_sign();
        prop_assert_eq!(state.display(), before);
    }

    /// Backspace never leaves the display shorter than "0".
    #[test]
    fn prop_backspace_floors_at_zero(tokens in token_seq_strategy(), extra in 0usize..30) {
        let mut state = CalculatorState::new();
        type_tokens(&mut state, &tokens);
        for _ in 0..tokens.len() + extra {
            state.backspace();
        }
        prop_assert_eq!(state.display(), "0");
    }

    /// Typing never touches the sample list.
    #[test]
    fn prop_typing_never_accumulates(tokens in token_seq_strategy()) {
        let mut state = CalculatorState::new();
        type_tokens(&mut state, &tokens);
        state.toggle_sign();
        state.backspace();
        prop_assert!(state.samples().is_empty());
    }
}

// ===== State machine properties =====

proptest! {
    /// A successful evaluation grows the sample list by exactly one.
    #[test]
    fn prop_evaluate_appends_exactly_one(
        left in token_seq_strategy(),
        right in token_seq_strategy(),
        op in operation_strategy(),
    ) {
        let mut state = CalculatorState::new();
        type_tokens(&mut state, &left);
        state.set_operator(op).unwrap();
        type_tokens(&mut state, &right);

        let before = state.samples().len();
        match state.evaluate() {
            Ok(Some(_)) => prop_assert_eq!(state.samples().len(), before + 1),
            Ok(None) | Err(_) => prop_assert_eq!(state.samples().len(), before),
        }
    }

    /// The action log never exceeds its cap, whatever the action mix.
    #[test]
    fn prop_log_never_exceeds_cap(actions in prop::collection::vec(action_strategy(), 0..200)) {
        let mut driver = StateDriver::new();
        for action in actions {
            let _ = driver.press(action);
            prop_assert!(driver.log_lines().len() <= ActionLog::DEFAULT_MAX_ENTRIES);
        }
    }

    /// The state machine survives any action sequence without panicking and
    /// stays usable afterwards.
    #[test]
    fn prop_state_machine_is_total(actions in prop::collection::vec(action_strategy(), 0..100)) {
        let mut driver = StateDriver::new();
        for action in actions {
            let _ = driver.press(action);
        }
        driver.press(Action::Clear).unwrap();
        prop_assert_eq!(driver.display(), "0");
    }
}

// ===== Statistics properties =====

proptest! {
    /// Count, sign counts, and min/max ordering hold for any finite input.
    #[test]
    fn prop_summary_basic_invariants(
        samples in prop::collection::vec(-1e9f64..1e9f64, 1..50)
    ) {
        let s = Summary::compute(&samples).unwrap();
        prop_assert_eq!(s.count, samples.len());
        prop_assert!(s.positive_count + s.negative_count <= s.count);
        prop_assert!(s.min <= s.max);
        prop_assert!(s.min <= s.median && s.median <= s.max);
        // Tolerance for summation rounding.
        prop_assert!(s.mean >= s.min - 1e-3 && s.mean <= s.max + 1e-3);
    }

    /// The statistics are insensitive to input order (mode aside).
    #[test]
    fn prop_summary_order_insensitive(
        mut samples in prop::collection::vec(-1e6f64..1e6f64, 2..30)
    ) {
        let forward = Summary::compute(&samples).unwrap();
        samples.reverse();
        let backward = Summary::compute(&samples).unwrap();
        prop_assert_eq!(forward.median, backward.median);
        prop_assert_eq!(forward.q1, backward.q1);
        prop_assert_eq!(forward.q3, backward.q3);
        prop_assert_eq!(forward.min, backward.min);
        prop_assert_eq!(forward.max, backward.max);
    }

    /// The mode is always one of the samples.
    #[test]
    fn prop_mode_is_a_sample(samples in prop::collection::vec(-100f64..100f64, 1..30)) {
        let s = Summary::compute(&samples).unwrap();
        prop_assert!(samples.contains(&s.mode));
    }
}

// ===== Invariant tests =====

#[test]
fn invariant_fresh_state_reads_zero() {
    assert_eq!(CalculatorState::new().display(), "0");
}

#[test]
fn invariant_log_cap_is_ten() {
    assert_eq!(ActionLog::DEFAULT_MAX_ENTRIES, 10);
}
