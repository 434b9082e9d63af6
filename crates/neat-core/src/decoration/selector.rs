//! Selección de elementos del valor de retorno.
//!
//! Único punto del núcleo donde un fallo se recupera localmente: cuando una
//! subscripción falla con `NotSubscriptable` o `MissingKey`, el fallback
//! decide qué valores ocupan su lugar. `IndexOutOfRange` y cualquier error
//! que devuelva el propio fallback se propagan.

use std::sync::Arc;

use log::debug;
use serde_json::Value;

use super::base::Decorator;
use crate::call::CallArgs;
use crate::callable::{Callable, CallableRef};
use crate::describe::render_value;
use crate::errors::DecorResult;
use crate::subscript::{subscript, Key, SubscriptError};

/// `(resultado, clave, error) -> valores a insertar`.
pub type SubscriptionFallback = Arc<dyn Fn(&Value, &Key, &SubscriptError) -> DecorResult<Vec<Value>> + Send + Sync>;

/// Fallback por defecto.
///
/// Con `Index(0)` y un error de tipo se asume que el target devolvió un
/// valor suelto y se toma el resultado completo; en otro caso se inserta
/// `Null`. La heurística mezcla "se pidió el índice 0" con "el resultado no
/// es subscriptable"; no extenderla.
pub fn default_fallback(obj: &Value, key: &Key, error: &SubscriptError) -> DecorResult<Vec<Value>> {
    if error.is_type_error() && *key == Key::Index(0) {
        Ok(vec![obj.clone()])
    } else {
        Ok(vec![Value::Null])
    }
}

#[derive(Clone)]
pub struct ReturnValueSelectorDecorator {
    base: Decorator,
    rvalue_keys: Vec<Key>,
    fallback: SubscriptionFallback,
    custom_fallback: bool,
}

impl ReturnValueSelectorDecorator {
    pub fn new<K: Into<Key>, I: IntoIterator<Item = K>>(target: CallableRef, rvalue_keys: I) -> Self {
        Self { base: Decorator::new(target),
               rvalue_keys: rvalue_keys.into_iter().map(Into::into).collect(),
               fallback: Arc::new(default_fallback),
               custom_fallback: false }
    }

    pub fn with_fallback<F>(mut self, fallback: F) -> Self
        where F: Fn(&Value, &Key, &SubscriptError) -> DecorResult<Vec<Value>> + Send + Sync + 'static
    {
        self.fallback = Arc::new(fallback);
        self.custom_fallback = true;
        self
    }

    pub fn rvalue_keys(&self) -> &[Key] {
        &self.rvalue_keys
    }

    /// Aplica la selección sobre un valor ya calculado.
    pub fn select(&self, r_value: &Value) -> DecorResult<Value> {
        let mut vals = Vec::with_capacity(self.rvalue_keys.len());
        for key in self.rvalue_keys.iter() {
            match subscript(r_value, key) {
                Ok(v) => vals.push(v),
                Err(e @ SubscriptError::IndexOutOfRange { .. }) => return Err(e.into()),
                Err(e) => {
                    debug!("subscription of {key} failed ({e}); applying fallback");
                    vals.extend((self.fallback)(r_value, key, &e)?);
                }
            }
        }

        if vals.len() == 1 {
            return Ok(vals.swap_remove(0));
        }
        Ok(Value::Array(vals))
    }
}

impl Callable for ReturnValueSelectorDecorator {
    fn call(&self, call: CallArgs) -> DecorResult<Value> {
        let r_value = self.base.forward(call)?;
        self.select(&r_value)
    }

    fn name(&self) -> String {
        "ReturnValueSelectorDecorator".to_string()
    }

    fn describe(&self) -> String {
        let keys = Value::Array(self.rvalue_keys
                                    .iter()
                                    .map(|k| match k {
                                        Key::Index(i) => Value::from(*i),
                                        Key::Name(n) => Value::String(n.clone()),
                                    })
                                    .collect());
        let handler = if self.custom_fallback { "custom" } else { "default_fallback" };
        self.base
            .representation("ReturnValueSelectorDecorator")
            .kwarg("rvalue_keys", render_value(&keys))
            .kwarg("subscription_error_handler", handler)
            .render()
    }

    fn doc(&self) -> String {
        self.base.doc_for(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::from_fn;
    use serde_json::json;

    fn constant(v: Value) -> CallableRef {
        from_fn("constant", move |_call: CallArgs| Ok(v.clone()))
    }

    #[test]
    fn bare_scalar_with_index_zero_is_returned_whole() {
        let d = ReturnValueSelectorDecorator::new(constant(json!(5)), [0i64]);
        assert_eq!(d.call(CallArgs::default()).unwrap(), json!(5));
    }

    #[test]
    fn multiple_keys_give_array_in_key_order() {
        let d = ReturnValueSelectorDecorator::new(constant(json!([1, 2, 3])), [2i64, 0]);
        assert_eq!(d.call(CallArgs::default()).unwrap(), json!([3, 1]));
    }

    #[test]
    fn missing_key_becomes_null() {
        let d = ReturnValueSelectorDecorator::new(constant(json!({"a": 1})), ["a", "b"]);
        assert_eq!(d.call(CallArgs::default()).unwrap(), json!([1, null]));
    }

    #[test]
    fn out_of_range_is_reraised() {
        let d = ReturnValueSelectorDecorator::new(constant(json!([1])), [4i64]);
        assert!(d.call(CallArgs::default()).is_err());
    }
}
