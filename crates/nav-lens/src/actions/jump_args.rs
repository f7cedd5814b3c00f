use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;
use tower_lsp::lsp_types::{Position, Url};

/// Payload carried by every navigation action: where to put the cursor
/// before running the host's jump command.
///
/// `row` and `col` are zero-based. Fractional values are accepted on input,
/// the host truncates them when it builds a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpArgs {
    pub location: String,
    #[serde(serialize_with = "serialize_coordinate")]
    pub row: f64,
    #[serde(serialize_with = "serialize_coordinate")]
    pub col: f64,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum JumpArgsError {
    #[error("navigation payload is not an object")]
    NotAnObject,
    #[error("navigation payload has no string `location`")]
    MissingLocation,
    #[error("navigation payload field `{0}` is missing or not a number")]
    NotANumber(&'static str),
    #[error("navigation payload field `{field}` must be a finite number >= 0, got {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

impl JumpArgs {
    pub fn at(
        uri: &Url,
        position: Position,
    ) -> Self {
        Self {
            location: uri.to_string(),
            row: f64::from(position.line),
            col: f64::from(position.character),
        }
    }

    /// Structural check of an untyped payload coming back from the client.
    ///
    /// Only the shape is checked: `location` must be a string (possibly
    /// empty), `row` and `col` must be finite and non-negative.
    pub fn validate(raw: &Value) -> Result<Self, JumpArgsError> {
        let object = raw.as_object().ok_or(JumpArgsError::NotAnObject)?;
        let location = object.get("location").and_then(Value::as_str).ok_or(JumpArgsError::MissingLocation)?;
        let row = coordinate(object, "row")?;
        let col = coordinate(object, "col")?;
        Ok(Self {
            location: location.to_owned(),
            row,
            col,
        })
    }

    /// Cursor position for the host; fractions are truncated toward zero.
    pub fn position(&self) -> Position {
        Position::new(self.row as u32, self.col as u32)
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

fn coordinate(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<f64, JumpArgsError> {
    let value = object.get(field).and_then(Value::as_f64).ok_or(JumpArgsError::NotANumber(field))?;
    if !value.is_finite() || value < 0.0 {
        return Err(JumpArgsError::OutOfRange { field, value });
    }
    Ok(value)
}

// Whole coordinates go out as integers so the payload reads `"row":3`
// rather than `"row":3.0`.
fn serialize_coordinate<S: Serializer>(
    value: &f64,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && *value >= 0.0 && *value <= u32::MAX as f64 {
        serializer.serialize_u64(*value as u64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
#[path = "../../tests/src/actions/jump_args_tests.rs"]
mod tests;
