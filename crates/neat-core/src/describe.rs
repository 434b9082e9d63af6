//! Representación textual consistente de wrappers.
//!
//! Formato: `ClassName(arg1,arg2,name=value)`. Los argumentos se renderizan
//! de forma superficial: valores como JSON compacto, callables sólo por su
//! `name()`. Así un wrapper profundamente anidado nunca expande a sus
//! targets más allá de un nivel.

use log::warn;
use serde_json::Value;

use crate::callable::Callable;
use crate::config::{DescribeConfig, DESCRIBE_CONFIG};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Representation {
    class_name: String,
    args: Vec<String>,
    kwargs: Vec<(String, String)>,
}

impl Representation {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self { class_name: class_name.into(),
               args: vec![],
               kwargs: vec![] }
    }

    /// Argumento posicional ya renderizado.
    pub fn arg(mut self, rendered: impl Into<String>) -> Self {
        self.args.push(rendered.into());
        self
    }

    /// Argumento nombrado ya renderizado.
    pub fn kwarg(mut self, name: impl Into<String>, rendered: impl Into<String>) -> Self {
        self.kwargs.push((name.into(), rendered.into()));
        self
    }

    pub fn value_kwarg(self, name: impl Into<String>, value: &Value) -> Self {
        self.kwarg(name, render_value(value))
    }

    pub fn callable_kwarg(self, name: impl Into<String>, callable: &dyn Callable) -> Self {
        self.kwarg(name, callable.name())
    }

    pub fn render(&self) -> String {
        let kwargs = self.kwargs.iter().map(|(k, v)| format!("{k}={v}"));
        let args_str = self.args.iter().cloned().chain(kwargs).collect::<Vec<_>>().join(",");
        format!("{}({})", self.class_name, args_str)
    }
}

/// JSON compacto truncado según `DESCRIBE_CONFIG`.
pub fn render_value(value: &Value) -> String {
    render_value_with(value, &DESCRIBE_CONFIG)
}

pub fn render_value_with(value: &Value, config: &DescribeConfig) -> String {
    let full = value.to_string();
    if full.chars().count() <= config.max_arg_repr {
        return full;
    }
    warn!("argument representation truncated to {} chars", config.max_arg_repr);
    let mut short: String = full.chars().take(config.max_arg_repr).collect();
    short.push_str("...");
    short
}

/// Entrada de la cadena de documentación seguida de la documentación del
/// target.
pub fn doc_chain(repr: &str, target_doc: &str) -> String {
    let mut doc = DESCRIBE_CONFIG.doc_entry(repr);
    doc.push_str(target_doc);
    doc
}
