//! Demo: extracción de claves sobre una lista de objetos usando las
//! distintas capas (extractor directo, pre-binding + pack, composición) y
//! la cadena de documentación resultante.

use std::sync::Arc;

use neatcode::prelude::*;
use serde_json::{json, Value};

fn getitem() -> CallableRef {
    Arc::new(neatcode::core::FnCallable::new("getitem", |call: CallArgs| -> DecorResult<Value> {
                 call.expect_arity(2)?;
                 let key = neatcode::core::objects::key_from_value(&call.args[1])?;
                 Ok(neatcode::core::subscript(&call.args[0], &key)?)
             }).with_doc("Returns obj[key]."))
}

fn run(label: &str, callable: &dyn Callable, items: &[Value]) {
    let results: DecorResult<Vec<Value>> = items.iter().map(|item| callable.call(CallArgs::positional([item.clone()]))).collect();
    match results {
        Ok(vals) => println!("[{label}] {}", json!(vals)),
        Err(e) => println!("[{label}] error: {e}"),
    }
}

fn main() {
    // Cargar variables de entorno desde .env si existe (NEATCODE_*)
    neatcode::core::config::init_dotenv();

    let items: Vec<Value> = (0..5).map(|i| json!({"hi": i, "name": format!("item-{i}")})).collect();

    // Extractor directo
    let ke = KeyExtractor::new("hi");
    run("KeyExtractor", &ke, &items);

    // MethodCaller con argumentos fijos
    let mc = MethodCaller::new("__getitem__", CallArgs::positional([json!("name")]));
    run("MethodCaller", &mc, &items);

    // Pre-binding: el objeto llega como post y ocupa la posición 0
    let pre: CallableRef = Arc::new(PreargumentDecorator::new(getitem()).with_preargs([Value::Null, json!("hi")]));
    run("PreargumentDecorator", pre.as_ref(), &items);

    // Pack + unpack posicional sobre el mismo pre-binding
    let packed = ArgPackDecorator::new(Arc::new(PosargsUnpackDecorator::new(Arc::clone(&pre))) as CallableRef);
    run("Pack(Unpack(..))", &packed, &items);

    // Composición: combinar dos extractores y seleccionar el segundo
    let both: CallableRef = Arc::new(CombinationDecorator::new(vec![Arc::new(KeyExtractor::new("hi")) as CallableRef,
                                                                    Arc::new(AttributeExtractor::new("name")) as CallableRef]));
    let comp = CompositionDecorator::new(vec![both, Arc::new(KeyExtractor::new(1i64)) as CallableRef]);
    run("CompositionDecorator", &comp, &items);

    // Selector de retorno sobre un escalar
    let scalar = ReturnValueSelectorDecorator::new(Arc::new(KeyExtractor::new("hi")) as CallableRef, [0i64]);
    run("ReturnValueSelectorDecorator", &scalar, &items);

    println!("[doc] PreargumentDecorator:{}", pre.doc());
    println!("[doc] Pack(Unpack(..)):{}", packed.doc());
    println!("[doc] CompositionDecorator:{}", comp.doc());
}
