//! neatcode – Librería de wrappers componibles sobre callables
//!
//! Este crate actúa como fachada del workspace:
//! - `policies`: prioridad y fusión de argumentos pre/post (`neat-policies`).
//! - `core`: registro de llamada, decoradores, selector de retorno,
//!   composers y helpers de objetos (`neat-core`).
//! - `context`: superposición temporal de claves y medición de tiempos
//!   (`neat-context`).
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub use neat_context as context;
pub use neat_core as core;
pub use neat_policies as policies;

/// Importaciones habituales para construir wrappers.
pub mod prelude {
	pub use neat_context::{each_scope, CombinedScope, DictOverlap, ObjectLifecycle, TimedDecorator, Timing};
	pub use neat_core::{from_fn, ArgPackDecorator, ArgUnpackDecorator, AttributeExtractor, CallArgs, Callable, CallableRef, CombinationDecorator,
	                    CompositionDecorator, DecorError, DecorResult, Decorator, Key, KeyExtractor, KwargsUnpackDecorator, MethodCaller,
	                    ObjectCaller, PosargsUnpackDecorator, PreargumentDecorator, ReturnValueSelectorDecorator};
	pub use neat_policies::{ArgPrioritizer, DefaultPreargs, IgnorePostargs, SubstitutionPolicy};
}
