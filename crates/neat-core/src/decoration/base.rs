use log::trace;
use serde_json::Value;

use crate::call::CallArgs;
use crate::callable::{Callable, CallableRef};
use crate::describe::{doc_chain, Representation};
use crate::errors::DecorResult;

/// Decorador base: envuelve un único callable y reenvía la llamada.
///
/// Los decoradores especializados contienen un `Decorator` y delegan en
/// `forward` tras transformar los argumentos. Nunca capturan los errores del
/// target.
#[derive(Clone, Debug)]
pub struct Decorator {
    target: CallableRef,
}

impl Decorator {
    pub fn new(target: CallableRef) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &CallableRef {
        &self.target
    }

    /// Invoca el target tal cual.
    pub fn forward(&self, call: CallArgs) -> DecorResult<Value> {
        trace!("forwarding {} argument(s) to {}", call.len(), self.target.name());
        self.target.call(call)
    }

    /// Representación base `ClassName(callable_=<name>)`; cada decorador
    /// añade sus propios argumentos de construcción.
    pub fn representation(&self, class_name: &str) -> Representation {
        Representation::new(class_name).callable_kwarg("callable_", self.target.as_ref())
    }

    /// Cadena de linaje: entrada propia + doc del target.
    pub fn doc_for(&self, repr: &str) -> String {
        doc_chain(repr, &self.target.doc())
    }
}

impl Callable for Decorator {
    fn call(&self, call: CallArgs) -> DecorResult<Value> {
        self.forward(call)
    }

    fn name(&self) -> String {
        "Decorator".to_string()
    }

    fn describe(&self) -> String {
        self.representation("Decorator").render()
    }

    fn doc(&self) -> String {
        self.doc_for(&self.describe())
    }
}
