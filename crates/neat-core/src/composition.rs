//! Composers: wrappers sobre una secuencia ordenada de callables.
//!
//! - `CompositionDecorator`: composición secuencial; la salida de cada
//!   elemento es el único argumento posicional del siguiente.
//! - `CombinationDecorator`: combinación paralela; todos los elementos
//!   reciben la misma llamada y se devuelven todas las salidas en orden.
//!
//! La secuencia es fija tras la construcción. Los elementos pueden ser
//! cualquier `Callable`, incluidos otros composers.

use log::trace;
use serde_json::Value;

use crate::call::CallArgs;
use crate::callable::{Callable, CallableRef};
use crate::config::DESCRIBE_CONFIG;
use crate::describe::Representation;
use crate::errors::{DecorError, DecorResult};
use crate::objects::ObjectCaller;

/// Base común: la secuencia de callables y su linaje documental.
#[derive(Clone, Debug)]
pub struct MultiCallable {
    callables: Vec<CallableRef>,
}

impl MultiCallable {
    pub fn new<I: IntoIterator<Item = CallableRef>>(callables: I) -> Self {
        Self { callables: callables.into_iter().collect() }
    }

    pub fn callables(&self) -> &[CallableRef] {
        &self.callables
    }

    pub fn len(&self) -> usize {
        self.callables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callables.is_empty()
    }

    /// `ClassName([a,b,c])`, cada elemento sólo por su nombre.
    pub fn representation(&self, class_name: &str) -> Representation {
        let names = self.callables.iter().map(|c| c.name()).collect::<Vec<_>>().join(",");
        Representation::new(class_name).kwarg("callables", format!("[{names}]"))
    }

    /// Una entrada propia seguida de una línea por elemento.
    pub fn doc_for(&self, repr: &str) -> String {
        let mut doc = DESCRIBE_CONFIG.doc_entry(repr);
        for (i, c) in self.callables.iter().enumerate() {
            doc.push_str(&format!("\t{i}: {}\n", c.describe()));
        }
        doc
    }
}

#[derive(Clone, Debug)]
pub struct CompositionDecorator {
    inner: MultiCallable,
}

impl CompositionDecorator {
    pub fn new<I: IntoIterator<Item = CallableRef>>(callables: I) -> Self {
        Self { inner: MultiCallable::new(callables) }
    }

    pub fn callables(&self) -> &[CallableRef] {
        self.inner.callables()
    }
}

impl Callable for CompositionDecorator {
    fn call(&self, call: CallArgs) -> DecorResult<Value> {
        let (first, rest) = self.inner.callables().split_first().ok_or(DecorError::EmptyComposition)?;

        trace!("composition stage 0 -> {}", first.name());
        let mut r = first.call(call)?;
        for (stage, callable) in rest.iter().enumerate() {
            trace!("composition stage {} -> {}", stage + 1, callable.name());
            r = callable.call(CallArgs::positional([r]))?;
        }
        Ok(r)
    }

    fn name(&self) -> String {
        "CompositionDecorator".to_string()
    }

    fn describe(&self) -> String {
        self.inner.representation("CompositionDecorator").render()
    }

    fn doc(&self) -> String {
        self.inner.doc_for(&self.describe())
    }
}

/// Todos los elementos se invocan siempre, aunque alguno falle; después se
/// propaga el primer error en orden de elementos.
#[derive(Clone, Debug)]
pub struct CombinationDecorator {
    inner: MultiCallable,
}

impl CombinationDecorator {
    pub fn new<I: IntoIterator<Item = CallableRef>>(callables: I) -> Self {
        Self { inner: MultiCallable::new(callables) }
    }

    pub fn callables(&self) -> &[CallableRef] {
        self.inner.callables()
    }
}

impl Callable for CombinationDecorator {
    fn call(&self, call: CallArgs) -> DecorResult<Value> {
        let caller = ObjectCaller::new(call);
        let results: Vec<DecorResult<Value>> = self.inner.callables().iter().map(|c| caller.apply(c.as_ref())).collect();
        let outputs = results.into_iter().collect::<DecorResult<Vec<Value>>>()?;
        Ok(Value::Array(outputs))
    }

    fn name(&self) -> String {
        "CombinationDecorator".to_string()
    }

    fn describe(&self) -> String {
        self.inner.representation("CombinationDecorator").render()
    }

    fn doc(&self) -> String {
        self.inner.doc_for(&self.describe())
    }
}
