//! Helpers genéricos de manipulación de objetos.
//!
//! Son callables ordinarios de un argumento (`obj`), utilizables como
//! elementos de un composer. `ObjectCaller` es la excepción: invoca un
//! callable con un registro de llamada fijo.

use std::collections::HashMap;
use std::sync::Arc;

use log::trace;
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::call::{pack_args, pack_kwargs, CallArgs};
use crate::callable::{from_fn, Callable, CallableRef};
use crate::describe::{render_value, Representation};
use crate::errors::{DecorError, DecorResult};
use crate::subscript::{kind_of, subscript, Key, SubscriptError};

/// Convierte un valor JSON en clave de subscripción.
pub fn key_from_value(value: &Value) -> DecorResult<Key> {
    match value {
        Value::String(s) => Ok(Key::Name(s.clone())),
        Value::Number(n) => n.as_i64()
                             .map(Key::Index)
                             .ok_or_else(|| DecorError::InvalidArgument(format!("index must be an integer, got {n}"))),
        other => Err(DecorError::InvalidArgument(format!("{} cannot be used as a key", kind_of(other)))),
    }
}

fn receiver(call: &CallArgs) -> DecorResult<Value> {
    call.expect_no_kwargs()?;
    call.expect_arity(1)?;
    Ok(call.args[0].clone())
}

/// `obj -> obj[key]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyExtractor {
    key: Key,
}

impl KeyExtractor {
    pub fn new(key: impl Into<Key>) -> Self {
        Self { key: key.into() }
    }

    pub fn extract(&self, obj: &Value) -> DecorResult<Value> {
        Ok(subscript(obj, &self.key)?)
    }
}

impl Callable for KeyExtractor {
    fn call(&self, call: CallArgs) -> DecorResult<Value> {
        self.extract(&receiver(&call)?)
    }

    fn name(&self) -> String {
        "KeyExtractor".to_string()
    }

    fn describe(&self) -> String {
        Representation::new("KeyExtractor").kwarg("key", self.key.to_string()).render()
    }
}

/// `obj -> obj.attr_name` (campo de un objeto JSON).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeExtractor {
    attr_name: String,
}

impl AttributeExtractor {
    pub fn new(attr_name: impl Into<String>) -> Self {
        Self { attr_name: attr_name.into() }
    }

    pub fn extract(&self, obj: &Value) -> DecorResult<Value> {
        match obj {
            Value::Object(map) => map.get(&self.attr_name).cloned().ok_or_else(|| DecorError::MissingAttribute(self.attr_name.clone())),
            other => Err(DecorError::MissingAttribute(format!("{} has no attribute '{}'", kind_of(other), self.attr_name))),
        }
    }
}

impl Callable for AttributeExtractor {
    fn call(&self, call: CallArgs) -> DecorResult<Value> {
        self.extract(&receiver(&call)?)
    }

    fn name(&self) -> String {
        "AttributeExtractor".to_string()
    }

    fn describe(&self) -> String {
        Representation::new("AttributeExtractor").value_kwarg("attr_name", &Value::String(self.attr_name.clone())).render()
    }
}

/// Invoca callables con un registro de llamada fijo.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectCaller {
    call: CallArgs,
}

impl ObjectCaller {
    pub fn new(call: CallArgs) -> Self {
        Self { call }
    }

    pub fn apply(&self, target: &dyn Callable) -> DecorResult<Value> {
        trace!("calling {} with a fixed call record", target.name());
        target.call(self.call.clone())
    }

    pub fn describe(&self) -> String {
        Representation::new("ObjectCaller").value_kwarg("args", &pack_args(&self.call.args))
                                           .value_kwarg("kwargs", &pack_kwargs(&self.call.kwargs))
                                           .render()
    }
}

/// Tabla de métodos resolubles por nombre. Cada método recibe el objeto
/// receptor como primer argumento posicional.
#[derive(Clone, Default)]
pub struct MethodTable {
    methods: HashMap<String, CallableRef>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method(mut self, name: impl Into<String>, method: CallableRef) -> Self {
        self.methods.insert(name.into(), method);
        self
    }

    pub fn get(&self, name: &str) -> Option<&CallableRef> {
        self.methods.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// `__getitem__`, `get`, `__len__`, `__contains__`, `keys`, `values`.
    pub fn builtin() -> Self {
        Self::new().with_method("__getitem__", from_fn("__getitem__", method_getitem))
                   .with_method("get", from_fn("get", method_get))
                   .with_method("__len__", from_fn("__len__", method_len))
                   .with_method("__contains__", from_fn("__contains__", method_contains))
                   .with_method("keys", from_fn("keys", method_keys))
                   .with_method("values", from_fn("values", method_values))
    }
}

static BUILTIN_METHODS: Lazy<Arc<MethodTable>> = Lazy::new(|| Arc::new(MethodTable::builtin()));

fn method_getitem(call: CallArgs) -> DecorResult<Value> {
    call.expect_arity(2)?;
    let key = key_from_value(&call.args[1])?;
    Ok(subscript(&call.args[0], &key)?)
}

fn method_get(call: CallArgs) -> DecorResult<Value> {
    if call.args.len() < 2 || call.args.len() > 3 {
        return Err(DecorError::ArityMismatch { expected: "2 or 3 positional".into(),
                                               got: call.args.len() });
    }
    let default = call.arg(2).or_else(|| call.kwarg("default")).cloned().unwrap_or(Value::Null);
    let key = key_from_value(&call.args[1])?;
    match subscript(&call.args[0], &key) {
        Ok(v) => Ok(v),
        Err(SubscriptError::MissingKey(_)) | Err(SubscriptError::IndexOutOfRange { .. }) => Ok(default),
        Err(e) => Err(e.into()),
    }
}

fn method_len(call: CallArgs) -> DecorResult<Value> {
    call.expect_arity(1)?;
    let len = match &call.args[0] {
        Value::Array(a) => a.len(),
        Value::Object(m) => m.len(),
        Value::String(s) => s.chars().count(),
        other => return Err(DecorError::InvalidArgument(format!("{} has no len()", kind_of(other)))),
    };
    Ok(Value::from(len))
}

fn method_contains(call: CallArgs) -> DecorResult<Value> {
    call.expect_arity(2)?;
    let item = &call.args[1];
    let found = match (&call.args[0], item) {
        (Value::Array(a), _) => a.contains(item),
        (Value::Object(m), Value::String(k)) => m.contains_key(k),
        (Value::String(s), Value::String(sub)) => s.contains(sub.as_str()),
        (container, _) => {
            return Err(DecorError::InvalidArgument(format!("{} does not support membership tests for {}", kind_of(container), kind_of(item))))
        }
    };
    Ok(Value::Bool(found))
}

fn object_arg(call: &CallArgs) -> DecorResult<&serde_json::Map<String, Value>> {
    call.expect_arity(1)?;
    match &call.args[0] {
        Value::Object(m) => Ok(m),
        other => Err(DecorError::MissingAttribute(format!("{} has no attribute 'keys'", kind_of(other)))),
    }
}

fn method_keys(call: CallArgs) -> DecorResult<Value> {
    let map = object_arg(&call)?;
    Ok(Value::Array(map.keys().cloned().map(Value::String).collect()))
}

fn method_values(call: CallArgs) -> DecorResult<Value> {
    let map = object_arg(&call)?;
    Ok(Value::Array(map.values().cloned().collect()))
}

/// `obj -> obj.method_name(*args, **kwargs)`, resolviendo el método en una
/// `MethodTable` (por defecto la tabla builtin).
#[derive(Clone)]
pub struct MethodCaller {
    method_name: String,
    caller: ObjectCaller,
    table: Arc<MethodTable>,
}

impl MethodCaller {
    pub fn new(method_name: impl Into<String>, call: CallArgs) -> Self {
        Self { method_name: method_name.into(),
               caller: ObjectCaller::new(call),
               table: Arc::clone(&BUILTIN_METHODS) }
    }

    pub fn with_table(mut self, table: Arc<MethodTable>) -> Self {
        self.table = table;
        self
    }

    pub fn invoke(&self, obj: Value) -> DecorResult<Value> {
        let method = self.table.get(&self.method_name).ok_or_else(|| DecorError::UnknownMethod(self.method_name.clone()))?;
        let mut bound = CallArgs::positional([obj]);
        bound.args.extend(self.caller.call.args.iter().cloned());
        bound.kwargs = self.caller.call.kwargs.clone();
        ObjectCaller::new(bound).apply(method.as_ref())
    }
}

impl Callable for MethodCaller {
    fn call(&self, call: CallArgs) -> DecorResult<Value> {
        self.invoke(receiver(&call)?)
    }

    fn name(&self) -> String {
        "MethodCaller".to_string()
    }

    fn describe(&self) -> String {
        Representation::new("MethodCaller").value_kwarg("method_name", &Value::String(self.method_name.clone()))
                                           .kwarg("args", render_value(&pack_args(&self.caller.call.args)))
                                           .kwarg("kwargs", render_value(&pack_kwargs(&self.caller.call.kwargs)))
                                           .render()
    }
}
