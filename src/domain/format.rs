use serde::Serialize;

use super::models::{CalculatorState, Operation};

const GROUP_SEPARATOR: char = ',';

/// Formats an operand for display.
///
/// The integer part gets thousands grouping; anything after the first
/// decimal point is reattached verbatim, so `"1234."` keeps its trailing
/// point while the user is still typing.
///
/// # Examples
///
/// ```
/// use tcalc::domain::format_operand;
///
/// assert_eq!(format_operand(Some("1234.5")).as_deref(), Some("1,234.5"));
/// assert_eq!(format_operand(Some("1234.")).as_deref(), Some("1,234."));
/// assert_eq!(format_operand(Some("Infinity")).as_deref(), Some("Infinity"));
/// assert_eq!(format_operand(None), None);
/// ```
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    let operand = operand?;
    if operand.is_empty() {
        return Some(String::new());
    }

    match operand.split_once('.') {
        Some((integer, decimal)) => Some(format!("{}.{}", group_integer(integer), decimal)),
        None => Some(group_integer(operand)),
    }
}

/// Formats the "previous operand and operator" line of the display.
pub fn format_previous(state: &CalculatorState) -> String {
    let previous = format_operand(state.previous_operand.as_deref());
    match (previous, state.operation) {
        (Some(previous), Some(operation)) => format!("{} {}", previous, operation),
        (Some(previous), None) => previous,
        (None, Some(operation)) => operation.to_string(),
        (None, None) => String::new(),
    }
}

/// What a front end shows for a given state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySnapshot {
    pub previous: Option<String>,
    pub operation: Option<Operation>,
    pub current: Option<String>,
}

impl From<&CalculatorState> for DisplaySnapshot {
    fn from(state: &CalculatorState) -> Self {
        Self {
            previous: format_operand(state.previous_operand.as_deref()),
            operation: state.operation,
            current: format_operand(state.current_operand.as_deref()),
        }
    }
}

fn group_integer(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer.strip_prefix('+').unwrap_or(integer)),
    };

    if digits.bytes().all(|b| b.is_ascii_digit()) {
        let significant = digits.trim_start_matches('0');
        let significant = if significant.is_empty() { "0" } else { significant };
        return format!("{}{}", sign, group_digits(significant));
    }

    // Results such as "1e+21" still read as numbers; "Infinity" or "NaN" do not.
    match expand_exponent(digits) {
        Some(expanded) => format!("{}{}", sign, group_digits(&expanded)),
        None => integer.to_string(),
    }
}

/// Expands an unsigned `<digits>e<exponent>` literal into the integer it
/// denotes, rounding half away from zero when the exponent is negative.
///
/// Works on the decimal text so no digits are lost to binary rounding.
fn expand_exponent(literal: &str) -> Option<String> {
    let (mantissa, exponent) = literal.split_once(['e', 'E'])?;
    if mantissa.is_empty() || !mantissa.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (negative, magnitude) = match exponent.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, exponent.strip_prefix('+').unwrap_or(exponent)),
    };
    if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let shift: u16 = magnitude.parse().ok()?;
    let shift = usize::from(shift);

    let expanded = if !negative {
        let mut expanded = String::with_capacity(mantissa.len() + shift);
        expanded.push_str(mantissa);
        expanded.extend(std::iter::repeat_n('0', shift));
        expanded
    } else if shift > mantissa.len() {
        "0".to_string()
    } else {
        let (kept, dropped) = mantissa.split_at(mantissa.len() - shift);
        let kept = if kept.is_empty() { "0" } else { kept };
        if dropped.as_bytes().first().is_some_and(|b| *b >= b'5') {
            increment(kept)
        } else {
            kept.to_string()
        }
    };

    let significant = expanded.trim_start_matches('0');
    Some(if significant.is_empty() { "0".to_string() } else { significant.to_string() })
}

/// Adds one to a non-empty string of decimal digits.
fn increment(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for byte in bytes.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}
