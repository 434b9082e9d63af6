//! Decoradores que transforman argumentos antes de reenviarlos:
//! pre-binding (`PreargumentDecorator`), empaquetado (`ArgPackDecorator`) y
//! desempaquetado (`ArgUnpackDecorator` y variantes).

use std::sync::Arc;

use neat_policies::{DefaultPreargs, SubstitutionPolicy};
use serde_json::Value;

use super::base::Decorator;
use crate::call::{pack_args, pack_kwargs, unpack_args, unpack_kwargs, Args, CallArgs, Kwargs};
use crate::callable::{Callable, CallableRef};
use crate::describe::render_value;
use crate::errors::DecorResult;

/// Fija argumentos en construcción y los fusiona con los de cada llamada
/// según una `SubstitutionPolicy` (por defecto `DefaultPreargs`).
///
/// La política se invoca exactamente una vez por llamada y no hay caché:
/// misma entrada post, mismos argumentos fusionados.
#[derive(Clone)]
pub struct PreargumentDecorator {
    base: Decorator,
    preargs: Args,
    prekwargs: Kwargs,
    policy: Arc<dyn SubstitutionPolicy>,
}

impl PreargumentDecorator {
    pub fn new(target: CallableRef) -> Self {
        Self { base: Decorator::new(target),
               preargs: Args::new(),
               prekwargs: Kwargs::new(),
               policy: Arc::new(DefaultPreargs) }
    }

    pub fn with_preargs<I: IntoIterator<Item = Value>>(mut self, preargs: I) -> Self {
        self.preargs = preargs.into_iter().collect();
        self
    }

    pub fn with_prekwargs<K: Into<String>, I: IntoIterator<Item = (K, Value)>>(mut self, prekwargs: I) -> Self {
        self.prekwargs = prekwargs.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }

    pub fn with_policy(mut self, policy: Arc<dyn SubstitutionPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Argumentos que recibiría el target para una llamada dada.
    pub fn merged(&self, post: &CallArgs) -> CallArgs {
        let (args, kwargs) = self.policy.substitute(&self.preargs, &post.args, &self.prekwargs, &post.kwargs);
        CallArgs::new(args, kwargs)
    }
}

impl Callable for PreargumentDecorator {
    fn call(&self, call: CallArgs) -> DecorResult<Value> {
        let merged = self.merged(&call);
        self.base.forward(merged)
    }

    fn name(&self) -> String {
        "PreargumentDecorator".to_string()
    }

    fn describe(&self) -> String {
        self.base
            .representation("PreargumentDecorator")
            .value_kwarg("preargs", &pack_args(&self.preargs))
            .value_kwarg("prekwargs", &pack_kwargs(&self.prekwargs))
            .kwarg("substitution_policy", self.policy.id())
            .render()
    }

    fn doc(&self) -> String {
        self.base.doc_for(&self.describe())
    }
}

/// Empaqueta los argumentos entrantes en slots únicos.
///
/// - posicionales → un array, como slot posicional (`args_kw = None`) o
///   nombrado (`args_kw = Some(name)`);
/// - nombrados → un objeto, análogamente con `kwargs_kw`;
/// - `discard_empty` omite el slot cuando su origen está vacío;
/// - `invert_positions` invierte el orden de los (a lo sumo dos) slots
///   posicionales.
///
/// El target se invoca siempre.
#[derive(Clone, Debug)]
pub struct ArgPackDecorator {
    base: Decorator,
    args_kw: Option<String>,
    kwargs_kw: Option<String>,
    invert_positions: bool,
    discard_empty: bool,
}

impl ArgPackDecorator {
    pub fn new(target: CallableRef) -> Self {
        Self { base: Decorator::new(target),
               args_kw: None,
               kwargs_kw: None,
               invert_positions: false,
               discard_empty: true }
    }

    pub fn args_kw(mut self, name: impl Into<String>) -> Self {
        self.args_kw = Some(name.into());
        self
    }

    pub fn kwargs_kw(mut self, name: impl Into<String>) -> Self {
        self.kwargs_kw = Some(name.into());
        self
    }

    pub fn invert_positions(mut self, invert: bool) -> Self {
        self.invert_positions = invert;
        self
    }

    pub fn discard_empty(mut self, discard: bool) -> Self {
        self.discard_empty = discard;
        self
    }

    /// Forma de la llamada que recibirá el target.
    pub fn packed(&self, call: &CallArgs) -> CallArgs {
        let mut f_args = Args::new();
        let mut f_kwargs = Kwargs::new();

        if !self.discard_empty || !call.args.is_empty() {
            let packed = pack_args(&call.args);
            match &self.args_kw {
                None => f_args.push(packed),
                Some(name) => {
                    f_kwargs.insert(name.clone(), packed);
                }
            }
        }

        if !self.discard_empty || !call.kwargs.is_empty() {
            let packed = pack_kwargs(&call.kwargs);
            match &self.kwargs_kw {
                None => f_args.push(packed),
                Some(name) => {
                    f_kwargs.insert(name.clone(), packed);
                }
            }
        }

        if self.invert_positions {
            f_args.reverse();
        }
        CallArgs::new(f_args, f_kwargs)
    }
}

fn render_slot(slot: &Option<String>) -> String {
    match slot {
        Some(name) => render_value(&Value::String(name.clone())),
        None => "null".to_string(),
    }
}

impl Callable for ArgPackDecorator {
    fn call(&self, call: CallArgs) -> DecorResult<Value> {
        let packed = self.packed(&call);
        self.base.forward(packed)
    }

    fn name(&self) -> String {
        "ArgPackDecorator".to_string()
    }

    fn describe(&self) -> String {
        self.base
            .representation("ArgPackDecorator")
            .kwarg("args_kw", render_slot(&self.args_kw))
            .kwarg("kwargs_kw", render_slot(&self.kwargs_kw))
            .kwarg("invert_positions", self.invert_positions.to_string())
            .kwarg("discard_empty", self.discard_empty.to_string())
            .render()
    }

    fn doc(&self) -> String {
        self.base.doc_for(&self.describe())
    }
}

/// Recibe `(array, object)` y los esparce como argumentos del target.
#[derive(Clone, Debug)]
pub struct ArgUnpackDecorator {
    base: Decorator,
}

impl ArgUnpackDecorator {
    pub fn new(target: CallableRef) -> Self {
        Self { base: Decorator::new(target) }
    }
}

impl Callable for ArgUnpackDecorator {
    fn call(&self, call: CallArgs) -> DecorResult<Value> {
        call.expect_no_kwargs()?;
        call.expect_arity(2)?;
        let mut it = call.args.into_iter();
        let args = unpack_args(it.next().unwrap_or(Value::Null))?;
        let kwargs = unpack_kwargs(it.next().unwrap_or(Value::Null))?;
        self.base.forward(CallArgs::new(args, kwargs))
    }

    fn name(&self) -> String {
        "ArgUnpackDecorator".to_string()
    }

    fn describe(&self) -> String {
        self.base.representation("ArgUnpackDecorator").render()
    }

    fn doc(&self) -> String {
        self.base.doc_for(&self.describe())
    }
}

/// Recibe `(array)` y lo esparce como argumentos posicionales.
#[derive(Clone, Debug)]
pub struct PosargsUnpackDecorator {
    base: Decorator,
}

impl PosargsUnpackDecorator {
    pub fn new(target: CallableRef) -> Self {
        Self { base: Decorator::new(target) }
    }
}

impl Callable for PosargsUnpackDecorator {
    fn call(&self, call: CallArgs) -> DecorResult<Value> {
        call.expect_no_kwargs()?;
        call.expect_arity(1)?;
        let args = unpack_args(call.args.into_iter().next().unwrap_or(Value::Null))?;
        self.base.forward(CallArgs::new(args, Kwargs::new()))
    }

    fn name(&self) -> String {
        "PosargsUnpackDecorator".to_string()
    }

    fn describe(&self) -> String {
        self.base.representation("PosargsUnpackDecorator").render()
    }

    fn doc(&self) -> String {
        self.base.doc_for(&self.describe())
    }
}

/// Recibe `(object)` y lo esparce como argumentos nombrados.
#[derive(Clone, Debug)]
pub struct KwargsUnpackDecorator {
    base: Decorator,
}

impl KwargsUnpackDecorator {
    pub fn new(target: CallableRef) -> Self {
        Self { base: Decorator::new(target) }
    }
}

impl Callable for KwargsUnpackDecorator {
    fn call(&self, call: CallArgs) -> DecorResult<Value> {
        call.expect_no_kwargs()?;
        call.expect_arity(1)?;
        let kwargs = unpack_kwargs(call.args.into_iter().next().unwrap_or(Value::Null))?;
        self.base.forward(CallArgs::new(Args::new(), kwargs))
    }

    fn name(&self) -> String {
        "KwargsUnpackDecorator".to_string()
    }

    fn describe(&self) -> String {
        self.base.representation("KwargsUnpackDecorator").render()
    }

    fn doc(&self) -> String {
        self.base.doc_for(&self.describe())
    }
}
