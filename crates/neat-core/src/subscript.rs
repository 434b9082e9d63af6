//! Subscripción de valores por índice o clave.
//!
//! Los fallos se clasifican en tres clases; `NotSubscriptable` es la clase
//! de incompatibilidad de tipo que reconoce el fallback por defecto del
//! selector de valor de retorno.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Clave de subscripción: índice (negativo cuenta desde el final) o nombre.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(n) => write!(f, "{n:?}"),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Index(i)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Name(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Name(s)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptError {
    #[error("{kind} is not subscriptable by {key}")]
    NotSubscriptable { kind: &'static str, key: String },
    #[error("missing key: {0}")]
    MissingKey(String),
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: i64, len: usize },
}

impl SubscriptError {
    /// Incompatibilidad de tipo entre el valor y la clave.
    pub fn is_type_error(&self) -> bool {
        matches!(self, SubscriptError::NotSubscriptable { .. })
    }
}

/// Nombre corto del tipo JSON, usado en mensajes.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn resolve_index(index: i64, len: usize) -> Result<usize, SubscriptError> {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let pos = if index < 0 { len_i + index } else { index };
    if pos < 0 || pos >= len_i {
        return Err(SubscriptError::IndexOutOfRange { index, len });
    }
    usize::try_from(pos).map_err(|_| SubscriptError::IndexOutOfRange { index, len })
}

/// Devuelve `value[key]`.
pub fn subscript(value: &Value, key: &Key) -> Result<Value, SubscriptError> {
    match (value, key) {
        (Value::Array(items), Key::Index(i)) => {
            let pos = resolve_index(*i, items.len())?;
            Ok(items[pos].clone())
        }
        (Value::String(s), Key::Index(i)) => {
            let chars: Vec<char> = s.chars().collect();
            let pos = resolve_index(*i, chars.len())?;
            Ok(Value::String(chars[pos].to_string()))
        }
        (Value::Object(map), Key::Name(n)) => map.get(n).cloned().ok_or_else(|| SubscriptError::MissingKey(n.clone())),
        // las claves de un objeto son siempre nombres
        (Value::Object(_), Key::Index(i)) => Err(SubscriptError::MissingKey(i.to_string())),
        (other, k) => Err(SubscriptError::NotSubscriptable { kind: kind_of(other), key: k.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn array_and_object_access() {
        let v = json!([10, 20, {"hi": 0}]);
        assert_eq!(subscript(&v, &Key::from(1i64)).unwrap(), json!(20));
        assert_eq!(subscript(&v, &Key::from(-1i64)).unwrap(), json!({"hi": 0}));
        let inner = subscript(&v, &Key::from(2i64)).unwrap();
        assert_eq!(subscript(&inner, &"hi".into()).unwrap(), json!(0));
    }

    #[test]
    fn failure_classes() {
        assert!(subscript(&json!(5), &Key::from(0i64)).unwrap_err().is_type_error());
        assert!(subscript(&json!([1]), &"x".into()).unwrap_err().is_type_error());
        assert_eq!(subscript(&json!({}), &"x".into()).unwrap_err(), SubscriptError::MissingKey("x".into()));
        assert_eq!(subscript(&json!({}), &Key::from(0i64)).unwrap_err(), SubscriptError::MissingKey("0".into()));
        assert_eq!(subscript(&json!([1]), &Key::from(3i64)).unwrap_err(), SubscriptError::IndexOutOfRange { index: 3, len: 1 });
    }

    #[test]
    fn string_index_gives_char() {
        assert_eq!(subscript(&json!("abc"), &Key::from(-1i64)).unwrap(), json!("c"));
    }
}
