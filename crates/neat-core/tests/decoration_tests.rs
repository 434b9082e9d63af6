//! Decoradores de argumentos: pre-binding, pack/unpack y transparencia de
//! errores.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use neat_core::call::pack_kwargs;
use neat_core::{from_fn, ArgPackDecorator, ArgUnpackDecorator, CallArgs, Callable, CallableRef, DecorError, DecorResult, Decorator, Kwargs,
                PosargsUnpackDecorator, PreargumentDecorator};
use neat_policies::{IgnorePostargs, SubstitutionPolicy};
use proptest::prelude::*;
use serde_json::{json, Value};

// Devuelve la llamada recibida para poder compararla.
fn echo() -> CallableRef {
    from_fn("echo", |call: CallArgs| Ok(json!({"args": call.args, "kwargs": pack_kwargs(&call.kwargs)})))
}

fn failing() -> CallableRef {
    from_fn("failing", |_call: CallArgs| Err(DecorError::Target("boom".into())))
}

fn values() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(any::<i32>().prop_map(|n| json!(n)), 0..6)
}

fn kwargs() -> impl Strategy<Value = Kwargs> {
    prop::collection::vec(("[a-d]", any::<bool>()), 0..4).prop_map(|pairs| pairs.into_iter().map(|(k, v)| (k, json!(v))).collect())
}

proptest! {
    #[test]
    fn prebinding_is_idempotent(pre in values(), post in values(), pre_kw in kwargs(), post_kw in kwargs()) {
        let d = PreargumentDecorator::new(echo()).with_preargs(pre).with_prekwargs(pre_kw);
        let call = CallArgs::new(post, post_kw);
        let first = d.call(call.clone()).unwrap();
        let second = d.call(call.clone()).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(d.merged(&call), d.merged(&call));
    }

    #[test]
    fn unpack_of_pack_is_identity(args in values(), kw in kwargs()) {
        let direct = echo().call(CallArgs::positional([Value::Array(args.clone()), pack_kwargs(&kw)])).unwrap();

        let packed: CallableRef = Arc::new(ArgPackDecorator::new(echo()).discard_empty(false));
        let roundtrip = ArgUnpackDecorator::new(packed);
        let via_wrappers = roundtrip.call(CallArgs::positional([Value::Array(args), pack_kwargs(&kw)])).unwrap();

        prop_assert_eq!(direct, via_wrappers);
    }
}

#[test]
fn prebinding_default_policy_post_overwrites() {
    let d = PreargumentDecorator::new(echo()).with_preargs([json!(1), json!(2)]).with_prekwargs([("k", json!("pre")), ("only_pre", json!(0))]);
    let out = d.call(CallArgs::positional([json!(9)]).with_kwarg("k", json!("post"))).unwrap();
    assert_eq!(out, json!({"args": [9, 2], "kwargs": {"k": "post", "only_pre": 0}}));
}

#[test]
fn prebinding_ignore_post_policy() {
    let d = PreargumentDecorator::new(echo()).with_preargs([json!(1)]).with_policy(Arc::new(IgnorePostargs));
    let out = d.call(CallArgs::positional([json!(9), json!(8)])).unwrap();
    assert_eq!(out, json!({"args": [1], "kwargs": {}}));
}

// Política instrumentada para verificar que se invoca una vez por llamada.
struct CountingPolicy(AtomicUsize);

impl SubstitutionPolicy for CountingPolicy {
    fn id(&self) -> &'static str {
        "counting"
    }

    fn substitute(&self, preargs: &[Value], postargs: &[Value], prekwargs: &Kwargs, postkwargs: &Kwargs) -> (Vec<Value>, Kwargs) {
        self.0.fetch_add(1, Ordering::SeqCst);
        neat_policies::default_merge(preargs, postargs, prekwargs, postkwargs)
    }
}

#[test]
fn policy_runs_once_per_call() {
    let policy = Arc::new(CountingPolicy(AtomicUsize::new(0)));
    let d = PreargumentDecorator::new(echo()).with_policy(policy.clone());
    d.call(CallArgs::default()).unwrap();
    d.call(CallArgs::default()).unwrap();
    assert_eq!(policy.0.load(Ordering::SeqCst), 2);
    assert!(d.describe().ends_with("substitution_policy=counting)"));
}

#[test]
fn target_errors_pass_through_every_wrapper() {
    let base: CallableRef = Arc::new(Decorator::new(failing()));
    let pre: CallableRef = Arc::new(PreargumentDecorator::new(base));
    let packed = ArgPackDecorator::new(pre);
    assert_eq!(packed.call(CallArgs::positional([json!(1)])).unwrap_err(), DecorError::Target("boom".into()));
}

#[test]
fn unpack_arity_error_from_target_propagates() {
    let two_args = from_fn("two_args", |call: CallArgs| -> DecorResult<Value> {
        call.expect_arity(2)?;
        Ok(json!("ok"))
    });
    let d = PosargsUnpackDecorator::new(two_args);
    assert_eq!(d.call(CallArgs::positional([json!([1, 2])])).unwrap(), json!("ok"));
    assert!(matches!(d.call(CallArgs::positional([json!([1])])), Err(DecorError::ArityMismatch { got: 1, .. })));
}

#[test]
fn describe_is_shallow_and_stable() {
    let inner: CallableRef = Arc::new(PreargumentDecorator::new(echo()).with_preargs([json!(1)]));
    let outer = ArgPackDecorator::new(inner).args_kw("args");
    let repr = outer.describe();
    assert_eq!(repr, "ArgPackDecorator(callable_=PreargumentDecorator,args_kw=\"args\",kwargs_kw=null,invert_positions=false,discard_empty=true)");
    assert_eq!(repr, outer.describe());
}
