//! neat-core: capa de decoración y composición de callables
//!
//! - `call`: registro de llamada (`CallArgs`) que atraviesa todas las capas.
//! - `callable`: contrato `Callable` y adaptador de closures.
//! - `decoration`: familia `Decorator` (pre-binding, pack/unpack, selector de
//!   valor de retorno).
//! - `composition`: composers secuencial y paralelo.
//! - `objects`: extractores de clave/atributo e invocación de métodos.
//! - `describe` + `config`: representación y cadena de documentación.
//!
//! Todo es síncrono y sin estado mutable compartido: invocar un wrapper desde
//! varios hilos es tan seguro como lo sea el callable envuelto.

pub mod call;
pub mod callable;
pub mod composition;
pub mod config;
pub mod decoration;
pub mod describe;
pub mod errors;
pub mod objects;
pub mod subscript;

pub use call::{Args, CallArgs, Kwargs};
pub use callable::{from_fn, Callable, CallableRef, FnCallable};
pub use composition::{CombinationDecorator, CompositionDecorator, MultiCallable};
pub use config::{DescribeConfig, DESCRIBE_CONFIG};
pub use decoration::{default_fallback, ArgPackDecorator, ArgUnpackDecorator, Decorator, KwargsUnpackDecorator, PosargsUnpackDecorator,
                     PreargumentDecorator, ReturnValueSelectorDecorator, SubscriptionFallback};
pub use describe::Representation;
pub use errors::{DecorError, DecorResult};
pub use objects::{AttributeExtractor, KeyExtractor, MethodCaller, MethodTable, ObjectCaller};
pub use subscript::{subscript, Key, SubscriptError};
