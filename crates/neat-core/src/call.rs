//! Registro de llamada: argumentos posicionales + nombrados.
//!
//! `CallArgs` es la única forma en que los argumentos viajan entre capas.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{DecorError, DecorResult};
use crate::subscript::kind_of;
pub use neat_policies::{Args, Kwargs};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CallArgs {
    pub args: Args,
    pub kwargs: Kwargs,
}

impl CallArgs {
    pub fn new(args: Args, kwargs: Kwargs) -> Self {
        Self { args, kwargs }
    }

    pub fn positional<I: IntoIterator<Item = Value>>(args: I) -> Self {
        Self { args: args.into_iter().collect(),
               kwargs: Kwargs::new() }
    }

    pub fn named<K: Into<String>, I: IntoIterator<Item = (K, Value)>>(kwargs: I) -> Self {
        Self { args: Args::new(),
               kwargs: kwargs.into_iter().map(|(k, v)| (k.into(), v)).collect() }
    }

    pub fn with_arg(mut self, value: Value) -> Self {
        self.args.push(value);
        self
    }

    pub fn with_kwarg(mut self, name: impl Into<String>, value: Value) -> Self {
        self.kwargs.insert(name.into(), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty() && self.kwargs.is_empty()
    }

    /// Número total de argumentos (posicionales + nombrados).
    pub fn len(&self) -> usize {
        self.args.len() + self.kwargs.len()
    }

    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.args.get(index)
    }

    pub fn kwarg(&self, name: &str) -> Option<&Value> {
        self.kwargs.get(name)
    }

    /// Exige exactamente `n` argumentos posicionales.
    pub fn expect_arity(&self, n: usize) -> DecorResult<()> {
        if self.args.len() != n {
            return Err(DecorError::ArityMismatch { expected: format!("{n} positional"),
                                                   got: self.args.len() });
        }
        Ok(())
    }

    /// Rechaza argumentos nombrados inesperados.
    pub fn expect_no_kwargs(&self) -> DecorResult<()> {
        if let Some(name) = self.kwargs.keys().next() {
            return Err(DecorError::InvalidArgument(format!("unexpected keyword argument '{name}'")));
        }
        Ok(())
    }
}

/// Empaqueta argumentos posicionales en un único valor (array JSON).
pub fn pack_args(args: &[Value]) -> Value {
    Value::Array(args.to_vec())
}

/// Empaqueta argumentos nombrados en un único valor (objeto JSON).
pub fn pack_kwargs(kwargs: &Kwargs) -> Value {
    let map: Map<String, Value> = kwargs.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    Value::Object(map)
}

/// Inversa de `pack_args`.
pub fn unpack_args(value: Value) -> DecorResult<Args> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(DecorError::InvalidArgument(format!("expected array of positional arguments, got {}", kind_of(&other)))),
    }
}

/// Inversa de `pack_kwargs`.
pub fn unpack_kwargs(value: Value) -> DecorResult<Kwargs> {
    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        other => Err(DecorError::InvalidArgument(format!("expected object of keyword arguments, got {}", kind_of(&other)))),
    }
}
