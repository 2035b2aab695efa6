//! Section Binder
//!
//! Walks a parsed settings section and appends one element per array entry
//! onto a live options object, in document order. The container side of the
//! contract is just `push`; the binder owns locating values and reporting
//! type errors.

use crate::defaultable::DefaultableVec;
use crate::error::BindError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Bind a sequence-valued field onto `target`.
///
/// An absent field binds nothing, so the target keeps its defaults. An
/// explicit empty array also binds nothing: at this level it cannot be told
/// apart from an absent field, and the defaults survive. Callers that need an
/// explicit-empty override must push a sentinel or clear the target
/// themselves.
///
/// Elements already pushed before a decode failure stay pushed; there is no
/// rollback.
pub fn bind_sequence<T>(
    target: &mut DefaultableVec<T>,
    value: Option<&Value>,
    field: &str,
) -> Result<(), BindError>
where
    T: DeserializeOwned,
{
    let value = match value {
        Some(value) => value,
        None => return Ok(()),
    };

    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(BindError::ExpectedArray {
                field: field.to_string(),
                found: describe(other).to_string(),
            })
        }
    };

    for element in elements {
        let parsed = serde_json::from_value(element.clone()).map_err(|source| {
            BindError::InvalidValue {
                field: field.to_string(),
                source,
            }
        })?;
        target.push(parsed);
    }

    Ok(())
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
