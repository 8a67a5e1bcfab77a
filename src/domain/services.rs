//! Expression evaluation for the calculator core.
//!
//! Operands arrive as the exact text the user entered (or a previous
//! result), so parsing is lenient the same way a host `parseFloat` is: the
//! longest numeric prefix wins. Results are rendered in the canonical
//! shortest decimal form, switching to exponent notation for very large and
//! very small magnitudes.

use super::models::CalculatorState;

/// Evaluates the pending binary expression held in `state`.
///
/// Returns an empty string when either operand does not parse as a number
/// or no operation is pending. Division by zero is not special-cased.
///
/// # Examples
///
/// ```
/// use tcalc::domain::{evaluate, CalculatorState, Operation};
///
/// let state = CalculatorState {
///     previous_operand: Some("4".to_string()),
///     current_operand: Some("0".to_string()),
///     operation: Some(Operation::Divide),
///     overwrite: false,
/// };
/// assert_eq!(evaluate(&state), "Infinity");
/// ```
pub fn evaluate(state: &CalculatorState) -> String {
    let previous = state.previous_operand.as_deref().and_then(parse_number);
    let current = state.current_operand.as_deref().and_then(parse_number);

    let (Some(previous), Some(current)) = (previous, current) else {
        return String::new();
    };

    match state.operation {
        Some(operation) => format_number(operation.apply(previous, current)),
        None => String::new(),
    }
}

/// Parses the longest numeric prefix of `input`.
///
/// Accepts an optional sign, `Infinity`, digits with at most one decimal
/// point and an optional exponent. Returns `None` when no prefix is numeric
/// or the value is NaN.
///
/// # Examples
///
/// ```
/// use tcalc::domain::parse_number;
///
/// assert_eq!(parse_number("12.5"), Some(12.5));
/// assert_eq!(parse_number("7."), Some(7.0));
/// assert_eq!(parse_number("3abc"), Some(3.0));
/// assert_eq!(parse_number(""), None);
/// assert_eq!(parse_number("."), None);
/// ```
pub fn parse_number(input: &str) -> Option<f64> {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        let value = if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY };
        return Some(value);
    }

    let integer_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digit_count = end - integer_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        digit_count += fraction_end - fraction_start;
        end = fraction_end;
    }

    if digit_count == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+') | Some(b'-')) {
            exponent_end += 1;
        }
        let digits_start = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > digits_start {
            end = exponent_end;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

/// Renders a number the way it is shown as a calculator operand.
///
/// # Examples
///
/// ```
/// use tcalc::domain::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => scientific,
    }
}
