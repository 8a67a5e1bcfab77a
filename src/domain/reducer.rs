//! The calculator state machine.
//!
//! [`reduce`] is the only way a [`CalculatorState`] changes. It is total:
//! inputs that make no sense in the current state (a second decimal point,
//! evaluating an incomplete expression, ...) are absorbed and the state is
//! returned unchanged.

use super::actions::Action;
use super::models::{CalculatorState, Digit, Operation};
use super::services::evaluate;

/// Computes the state that follows `state` after `action`.
///
/// Operators are applied strictly left to right: choosing a second operator
/// while a full pair is pending evaluates that pair first.
///
/// # Examples
///
/// ```
/// use tcalc::domain::{reduce, Action, CalculatorState, Operation};
///
/// let mut state = CalculatorState::default();
/// for action in [
///     Action::add_digit('5').unwrap(),
///     Action::choose_operation(Operation::Add),
///     Action::add_digit('3').unwrap(),
///     Action::Evaluate,
/// ] {
///     state = reduce(state, action);
/// }
/// assert_eq!(state.current_operand.as_deref(), Some("8"));
/// assert!(state.overwrite);
/// ```
pub fn reduce(state: CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::AddDigit { digit } => add_digit(state, digit),
        Action::ChooseOperation { operation } => choose_operation(state, operation),
        Action::Clear => clear(state),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate_pending(state),
    }
}

fn add_digit(state: CalculatorState, digit: Digit) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            overwrite: false,
            ..state
        };
    }

    let current = state.current_operand.as_deref();
    let redundant_zero = digit.is_zero() && current == Some("0");
    let misplaced_point = digit.is_decimal_point()
        && current.is_none_or(|operand| operand.contains('.'));
    if redundant_zero || misplaced_point {
        return state;
    }

    let mut state = state;
    let operand = state.current_operand.get_or_insert_with(String::new);
    operand.push(digit.as_char());
    state
}

fn choose_operation(state: CalculatorState, operation: Operation) -> CalculatorState {
    match (state.current_operand.is_some(), state.previous_operand.is_some()) {
        (false, false) => state,
        (false, true) => CalculatorState {
            operation: Some(operation),
            ..state
        },
        (true, false) => CalculatorState {
            operation: Some(operation),
            previous_operand: state.current_operand,
            current_operand: None,
            ..state
        },
        (true, true) => CalculatorState {
            previous_operand: Some(evaluate(&state)),
            operation: Some(operation),
            current_operand: None,
            ..state
        },
    }
}

fn clear(state: CalculatorState) -> CalculatorState {
    CalculatorState {
        current_operand: Some("0".to_string()),
        previous_operand: None,
        operation: None,
        ..state
    }
}

fn delete_digit(state: CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            overwrite: false,
            current_operand: None,
            ..state
        };
    }

    let mut state = state;
    let Some(mut operand) = state.current_operand.take() else {
        return state;
    };

    operand.pop();
    state.current_operand = (!operand.is_empty()).then_some(operand);
    state
}

fn evaluate_pending(state: CalculatorState) -> CalculatorState {
    let pending = state.operation.is_some()
        && state.current_operand.is_some()
        && state.previous_operand.is_some();
    if !pending {
        return state;
    }

    CalculatorState {
        current_operand: Some(evaluate(&state)),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}
