use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{DomainError, DomainResult};

/// A single keypad character that can be appended to an operand.
///
/// Only `0`-`9` and `.` are valid; construction goes through [`Digit::new`]
/// (or `TryFrom<char>`), so a `Digit` value is always one of those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(char);

impl Digit {
    pub fn new(c: char) -> DomainResult<Self> {
        if c.is_ascii_digit() || c == '.' {
            Ok(Self(c))
        } else {
            Err(DomainError::InvalidDigit(c))
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == '0'
    }

    pub fn is_decimal_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = DomainError;

    fn try_from(c: char) -> DomainResult<Self> {
        Self::new(c)
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> char {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of binary operators the calculator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Returns the symbol shown on the keypad and in the display.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "÷",
        }
    }

    /// Looks up an operation by its keypad symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use tcalc::domain::Operation;
    ///
    /// assert_eq!(Operation::from_symbol("÷").unwrap(), Operation::Divide);
    /// assert!(Operation::from_symbol("/").is_err());
    /// ```
    pub fn from_symbol(symbol: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == symbol)
            .ok_or_else(|| DomainError::InvalidOperation(symbol.to_string()))
    }

    /// Applies the operation with plain floating-point semantics.
    ///
    /// Division by zero is not guarded and yields infinity or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The complete state of one calculator.
///
/// Operands are kept as text so that exactly what was entered (leading
/// zeros, a trailing decimal point) survives until evaluation. The state is
/// replaced wholesale on every action; see [`reduce`](super::reduce).
///
/// # Examples
///
/// ```
/// use tcalc::domain::CalculatorState;
///
/// let state = CalculatorState::default();
/// assert!(state.current_operand.is_none());
/// assert!(state.previous_operand.is_none());
/// assert!(state.operation.is_none());
/// assert!(!state.overwrite);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Characters typed since the last operator or clear
    pub current_operand: Option<String>,
    /// Operand captured by the last operator, or a chained intermediate result
    pub previous_operand: Option<String>,
    /// Pending operator
    pub operation: Option<Operation>,
    /// Set right after an evaluation; the next digit replaces the result
    pub overwrite: bool,
}

impl CalculatorState {
    /// Creates the empty state a fresh calculator starts in.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_accepts_keypad_characters() {
        for c in "0123456789.".chars() {
            assert_eq!(Digit::new(c).unwrap().as_char(), c);
        }
    }

    #[test]
    fn test_digit_rejects_other_characters() {
        assert_eq!(Digit::new('a'), Err(DomainError::InvalidDigit('a')));
        assert_eq!(Digit::new(','), Err(DomainError::InvalidDigit(',')));
        assert!(Digit::try_from('-').is_err());
    }

    #[test]
    fn test_operation_symbols_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_symbol(op.symbol()).unwrap(), op);
        }
        assert_eq!(
            Operation::from_symbol("%"),
            Err(DomainError::InvalidOperation("%".to_string()))
        );
    }

    #[test]
    fn test_operation_apply() {
        assert_eq!(Operation::Add.apply(5.0, 3.0), 8.0);
        assert_eq!(Operation::Subtract.apply(5.0, 3.0), 2.0);
        assert_eq!(Operation::Multiply.apply(5.0, 3.0), 15.0);
        assert_eq!(Operation::Divide.apply(6.0, 3.0), 2.0);
        assert!(Operation::Divide.apply(4.0, 0.0).is_infinite());
        assert!(Operation::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_state_new_is_empty() {
        assert_eq!(CalculatorState::new(), CalculatorState::default());
    }
}
