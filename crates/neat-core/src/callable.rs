//! Contrato de callables envolvibles.
//!
//! Todo lo que se puede decorar o componer implementa `Callable`: funciones
//! de usuario (vía `FnCallable`), decoradores, composers y los helpers de
//! `objects`. Se comparten como `CallableRef` (`Arc<dyn Callable>`).

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::call::CallArgs;
use crate::errors::DecorResult;

pub trait Callable: Send + Sync {
    /// Invoca el callable con un registro de llamada.
    fn call(&self, call: CallArgs) -> DecorResult<Value>;

    /// Identidad corta; es lo único que se renderiza de un callable anidado.
    fn name(&self) -> String;

    /// Representación estable de un nivel: identidad + argumentos de
    /// construcción.
    fn describe(&self) -> String {
        self.name()
    }

    /// Documentación (cadena de linaje para decoradores).
    fn doc(&self) -> String {
        String::new()
    }
}

pub type CallableRef = Arc<dyn Callable>;

impl fmt::Debug for dyn Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Adapta una closure `Fn(CallArgs) -> DecorResult<Value>` a `Callable`.
pub struct FnCallable<F> {
    name: String,
    doc: String,
    f: F,
}

impl<F> FnCallable<F> where F: Fn(CallArgs) -> DecorResult<Value> + Send + Sync
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self { name: name.into(),
               doc: String::new(),
               f }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }
}

impl<F> Callable for FnCallable<F> where F: Fn(CallArgs) -> DecorResult<Value> + Send + Sync
{
    fn call(&self, call: CallArgs) -> DecorResult<Value> {
        (self.f)(call)
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn doc(&self) -> String {
        self.doc.clone()
    }
}

/// Atajo: closure con nombre lista para decorar o componer.
pub fn from_fn<F>(name: impl Into<String>, f: F) -> CallableRef
    where F: Fn(CallArgs) -> DecorResult<Value> + Send + Sync + 'static
{
    Arc::new(FnCallable::new(name, f))
}
