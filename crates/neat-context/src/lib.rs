//! neat-context – helpers de alcance acotado ("hacer X, luego deshacer X").
//!
//! - `DictOverlap`: superposición temporal de claves con restauración al
//!   soltar el guard.
//! - `ObjectLifecycle`, `CombinedScope`, `each_scope`: objetos construidos
//!   para un bloque y combinación de varios guards.
//! - `Timing` / `TimedDecorator`: medición de bloques y de callables.

pub mod lifecycle;
pub mod overlap;
pub mod timing;

pub use lifecycle::{each_scope, CombinedScope, ObjectLifecycle};
pub use overlap::DictOverlap;
pub use timing::{TimedDecorator, Timing};
