//! Headless replay of dispatched actions.
//!
//! Each non-blank input line holds one JSON action in the dispatch payload
//! shape. After every action one JSON [`DisplaySnapshot`] line is written.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{reduce, Action, CalculatorState, DisplaySnapshot, DomainError};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Action {
        line: usize,
        #[source]
        source: DomainError,
    },
    #[error("failed to encode display: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Replays every action read from `reader` and returns the final state.
pub fn replay<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
) -> Result<CalculatorState, ReplayError> {
    let mut state = CalculatorState::default();
    let mut count = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let action = Action::from_json(line.trim()).map_err(|source| ReplayError::Action {
            line: index + 1,
            source,
        })?;
        debug!(line = index + 1, action = action.type_name(), "replaying action");

        state = reduce(state, action);
        count += 1;

        serde_json::to_writer(&mut writer, &DisplaySnapshot::from(&state))?;
        writeln!(writer)?;
    }

    writer.flush()?;
    info!(actions = count, "replay finished");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Result<CalculatorState, ReplayError>, String) {
        let mut output = Vec::new();
        let result = replay(Cursor::new(input), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_replay_writes_one_snapshot_per_action() {
        let input = r#"{"type":"add-digit","payload":{"digit":"5"}}
{"type":"choose-operation","payload":{"operation":"+"}}

{"type":"add-digit","payload":{"digit":"3"}}
{"type":"evaluate"}
"#;
        let (result, output) = run(input);
        let state = result.unwrap();
        assert_eq!(state.current_operand.as_deref(), Some("8"));
        assert!(state.overwrite);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], r#"{"previous":null,"operation":null,"current":"5"}"#);
        assert_eq!(lines[1], r#"{"previous":"5","operation":"+","current":null}"#);
        assert_eq!(lines[3], r#"{"previous":null,"operation":null,"current":"8"}"#);
    }

    #[test]
    fn test_replay_formats_large_numbers() {
        let mut input = String::new();
        for digit in "1234567".chars() {
            let line = format!(r#"{{"type":"add-digit","payload":{{"digit":"{digit}"}}}}"#);
            input.push_str(&line);
            input.push('\n');
        }
        let (_, output) = run(&input);
        assert_eq!(
            output.lines().last(),
            Some(r#"{"previous":null,"operation":null,"current":"1,234,567"}"#)
        );
    }

    #[test]
    fn test_replay_stops_at_unknown_action() {
        let input = "{\"type\":\"clear\"}\n{\"type\":\"memory-recall\"}\n{\"type\":\"clear\"}\n";
        let (result, output) = run(input);
        match result {
            Err(ReplayError::Action { line, source }) => {
                assert_eq!(line, 2);
                assert_eq!(source, DomainError::UnknownAction("memory-recall".to_string()));
            }
            other => panic!("expected action error, got {other:?}"),
        }
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_replay_empty_input() {
        let (result, output) = run("");
        assert_eq!(result.unwrap(), CalculatorState::default());
        assert!(output.is_empty());
    }
}
