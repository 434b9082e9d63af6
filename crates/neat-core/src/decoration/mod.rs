//! Familia `Decorator`.
//!
//! Cada decorador posee exactamente un callable target y se comporta como
//! ese target tras una transformación propia de los argumentos (o del
//! resultado, en el caso del selector). Ninguno muta el target.

mod arguments;
mod base;
mod selector;

pub use arguments::{ArgPackDecorator, ArgUnpackDecorator, KwargsUnpackDecorator, PosargsUnpackDecorator, PreargumentDecorator};
pub use base::Decorator;
pub use selector::{default_fallback, ReturnValueSelectorDecorator, SubscriptionFallback};
