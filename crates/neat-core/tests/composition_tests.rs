use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use neat_core::{from_fn, CallArgs, Callable, CallableRef, CombinationDecorator, CompositionDecorator, DecorError, KeyExtractor,
                PreargumentDecorator};
use proptest::prelude::*;
use serde_json::{json, Value};

fn int_arg(call: &CallArgs) -> i64 {
    call.arg(0).and_then(Value::as_i64).unwrap_or(0)
}

fn affine(name: &str, mul: i64, add: i64) -> CallableRef {
    from_fn(name, move |call: CallArgs| Ok(json!(int_arg(&call).wrapping_mul(mul).wrapping_add(add))))
}

proptest! {
    #[test]
    fn composition_is_nested_application(x in -1000i64..1000, a in -5i64..5, b in -5i64..5) {
        let f = affine("f", a, 1);
        let g = affine("g", 2, b);
        let h = affine("h", 1, -3);
        let composed = CompositionDecorator::new(vec![f.clone(), g.clone(), h.clone()]);

        let direct = {
            let fx = f.call(CallArgs::positional([json!(x)])).unwrap();
            let gfx = g.call(CallArgs::positional([fx])).unwrap();
            h.call(CallArgs::positional([gfx])).unwrap()
        };
        prop_assert_eq!(composed.call(CallArgs::positional([json!(x)])).unwrap(), direct);
    }

    #[test]
    fn combination_collects_in_order(x in -1000i64..1000) {
        let f = affine("f", 3, 0);
        let g = affine("g", 1, 7);
        let combined = CombinationDecorator::new(vec![f.clone(), g.clone()]);

        let expected = json!([f.call(CallArgs::positional([json!(x)])).unwrap(), g.call(CallArgs::positional([json!(x)])).unwrap()]);
        prop_assert_eq!(combined.call(CallArgs::positional([json!(x)])).unwrap(), expected);
    }
}

#[test]
fn first_stage_receives_full_call() {
    let sum_kw = from_fn("sum_kw", |call: CallArgs| {
        let total: i64 = call.kwargs.values().filter_map(Value::as_i64).sum::<i64>() + int_arg(&call);
        Ok(json!(total))
    });
    let c = CompositionDecorator::new(vec![sum_kw, affine("double", 2, 0)]);
    let out = c.call(CallArgs::positional([json!(1)]).with_kwarg("a", json!(2)).with_kwarg("b", json!(3))).unwrap();
    assert_eq!(out, json!(12));
}

#[test]
fn combination_invokes_every_element_even_after_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = {
        let calls = Arc::clone(&calls);
        from_fn("counter", move |_call: CallArgs| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(Value::Null)
        })
    };
    let failing = from_fn("failing", |_call: CallArgs| Err(DecorError::Target("stage failed".into())));

    let c = CombinationDecorator::new(vec![Arc::clone(&counter), failing, counter]);
    assert_eq!(c.call(CallArgs::default()).unwrap_err(), DecorError::Target("stage failed".into()));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn composition_stops_at_first_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = {
        let calls = Arc::clone(&calls);
        from_fn("counter", move |_call: CallArgs| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(Value::Null)
        })
    };
    // KeyExtractor sobre null falla por tipo
    let c = CompositionDecorator::new(vec![Arc::clone(&counter), Arc::new(KeyExtractor::new("x")) as CallableRef, counter]);
    assert!(matches!(c.call(CallArgs::default()), Err(DecorError::Subscription(_))));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn composers_nest() {
    let inner: CallableRef = Arc::new(CombinationDecorator::new(vec![affine("id", 1, 0), affine("neg", -1, 0)]));
    let pick_second: CallableRef = Arc::new(KeyExtractor::new(1i64));
    let outer = CompositionDecorator::new(vec![inner, pick_second, Arc::new(PreargumentDecorator::new(affine("inc", 1, 1))) as CallableRef]);
    assert_eq!(outer.call(CallArgs::positional([json!(5)])).unwrap(), json!(-4));
}

#[test]
fn composer_doc_lists_elements() {
    let c = CompositionDecorator::new(vec![affine("f", 1, 0), affine("g", 1, 0)]);
    let doc = c.doc();
    assert!(doc.contains("CompositionDecorator(callables=[f,g])"));
    assert!(doc.contains("\t0: f\n"));
    assert!(doc.contains("\t1: g\n"));
}
