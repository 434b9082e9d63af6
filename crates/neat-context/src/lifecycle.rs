//! Ciclo de vida de objetos acotado a un bloque y combinación de guards.
//!
//! - `ObjectLifecycle`: construye el objeto al entrar invocando un callable
//!   con un registro de llamada fijo, y lo suelta al salir.
//! - `CombinedScope`: entra en varios guards a la vez y los suelta en orden
//!   inverso.
//! - `each_scope`: activa cada guard durante una sola iteración.
//!
//! Para un constructor propio basta con implementar `Callable`.

use std::ops::{Deref, DerefMut};

use log::trace;
use neat_core::{CallArgs, Callable, DecorResult, ObjectCaller};
use serde_json::Value;

/// Guard que posee el objeto construido durante su vida.
#[derive(Debug)]
pub struct ObjectLifecycle {
    name: String,
    object: Option<Value>,
}

impl ObjectLifecycle {
    /// Invoca `constructor` con `call`. Un fallo del constructor se propaga
    /// y no se crea guard.
    pub fn enter(constructor: &dyn Callable, call: CallArgs) -> DecorResult<Self> {
        let object = ObjectCaller::new(call).apply(constructor)?;
        trace!("lifecycle of {} started", constructor.name());
        Ok(Self { name: constructor.name(),
                  object: Some(object) })
    }

    /// Sale del bloque conservando el objeto.
    pub fn into_inner(mut self) -> Value {
        self.object.take().unwrap_or(Value::Null)
    }
}

impl Deref for ObjectLifecycle {
    type Target = Value;

    fn deref(&self) -> &Value {
        // sólo `into_inner` vacía el slot, y consume el guard
        self.object.as_ref().unwrap_or(&Value::Null)
    }
}

impl DerefMut for ObjectLifecycle {
    fn deref_mut(&mut self) -> &mut Value {
        self.object.get_or_insert(Value::Null)
    }
}

impl Drop for ObjectLifecycle {
    fn drop(&mut self) {
        if self.object.take().is_some() {
            trace!("lifecycle of {} ended", self.name);
        }
    }
}

/// Varios guards activos a la vez. Se sueltan del último al primero.
pub struct CombinedScope<G> {
    guards: Vec<G>,
}

impl<G> CombinedScope<G> {
    /// Entra en orden. Si una entrada falla, los guards ya creados se
    /// sueltan en orden inverso antes de propagar el error.
    pub fn enter<I, F>(entries: I) -> DecorResult<Self>
        where I: IntoIterator<Item = F>,
              F: FnOnce() -> DecorResult<G>
    {
        let mut scope = Self { guards: vec![] };
        for entry in entries {
            scope.guards.push(entry()?);
        }
        Ok(scope)
    }

    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}

impl<G> Deref for CombinedScope<G> {
    type Target = [G];

    fn deref(&self) -> &[G] {
        &self.guards
    }
}

impl<G> DerefMut for CombinedScope<G> {
    fn deref_mut(&mut self) -> &mut [G] {
        &mut self.guards
    }
}

impl<G> Drop for CombinedScope<G> {
    fn drop(&mut self) {
        while let Some(guard) = self.guards.pop() {
            drop(guard);
        }
    }
}

/// Entra en cada guard de forma perezosa, uno por iteración. El guard de
/// una iteración se suelta al terminar ésta, antes de entrar en el
/// siguiente.
pub fn each_scope<G, I, F>(entries: I) -> impl Iterator<Item = DecorResult<G>>
    where I: IntoIterator<Item = F>,
          F: FnOnce() -> DecorResult<G>
{
    entries.into_iter().map(|entry| entry())
}
