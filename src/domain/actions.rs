use serde::{Deserialize, Serialize};

use super::errors::{DomainError, DomainResult};
use super::models::{Digit, Operation};

/// Every input the calculator core accepts.
///
/// Serialises to the dispatch payload shape used by front ends, e.g.
/// `{"type":"add-digit","payload":{"digit":"5"}}` or `{"type":"clear"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Action {
    AddDigit { digit: Digit },
    ChooseOperation { operation: Operation },
    Clear,
    DeleteDigit,
    Evaluate,
}

impl Action {
    /// Tags accepted in the `type` field.
    pub const TYPES: [&'static str; 5] = [
        "add-digit",
        "choose-operation",
        "clear",
        "delete-digit",
        "evaluate",
    ];

    pub fn add_digit(c: char) -> DomainResult<Self> {
        Ok(Action::AddDigit { digit: Digit::new(c)? })
    }

    pub fn choose_operation(operation: Operation) -> Self {
        Action::ChooseOperation { operation }
    }

    /// Returns the `type` tag of this action.
    pub fn type_name(&self) -> &'static str {
        match self {
            Action::AddDigit { .. } => "add-digit",
            Action::ChooseOperation { .. } => "choose-operation",
            Action::Clear => "clear",
            Action::DeleteDigit => "delete-digit",
            Action::Evaluate => "evaluate",
        }
    }

    /// Parses one JSON-encoded action.
    ///
    /// An unrecognised `type` is a caller bug and is reported as
    /// [`DomainError::UnknownAction`]; it never reaches the reducer.
    ///
    /// # Examples
    ///
    /// ```
    /// use tcalc::domain::{Action, DomainError};
    ///
    /// let action = Action::from_json(r#"{"type":"add-digit","payload":{"digit":"7"}}"#).unwrap();
    /// assert_eq!(action, Action::add_digit('7').unwrap());
    ///
    /// let err = Action::from_json(r#"{"type":"square-root"}"#).unwrap_err();
    /// assert_eq!(err, DomainError::UnknownAction("square-root".to_string()));
    /// ```
    pub fn from_json(input: &str) -> DomainResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(input).map_err(|e| DomainError::InvalidAction(e.to_string()))?;

        let action_type = value
            .get("type")
            .and_then(|t| t.as_str())
            .ok_or_else(|| DomainError::InvalidAction("missing \"type\" field".to_string()))?;

        if !Self::TYPES.contains(&action_type) {
            return Err(DomainError::UnknownAction(action_type.to_string()));
        }

        serde_json::from_value(value).map_err(|e| DomainError::InvalidAction(e.to_string()))
    }

    pub fn to_json(&self) -> String {
        // Serialising a closed enum of plain fields cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}
