//! neat-policies – Políticas de sustitución de argumentos
//!
//! Dos conjuntos de argumentos participan en cada sustitución: el conjunto
//! "pre" (fijado al construir el wrapper) y el conjunto "post" (recibido en
//! el momento de la llamada). Este crate decide cuál tiene precedencia
//! (`ArgPrioritizer`) y cómo se fusionan:
//! - `PosargsOverwriter` / `PosargsAppender` para argumentos posicionales.
//! - `KwargsOverwriter` para argumentos nombrados.
//! - `SubstitutionPolicy` con las políticas canónicas `DefaultPreargs` e
//!   `IgnorePostargs`, más `CombinedArgSubstitutor` configurable.
//!
//! Todas las funciones son puras, deterministas y totales.

pub mod named;
pub mod policy;
pub mod positional;
pub mod prioritizer;

use indexmap::IndexMap;
use serde_json::Value;

/// Secuencia ordenada de argumentos posicionales.
pub type Args = Vec<Value>;

/// Argumentos nombrados. El orden de inserción sólo se conserva para que
/// las representaciones textuales salgan en el orden de declaración.
pub type Kwargs = IndexMap<String, Value>;

pub use named::KwargsOverwriter;
pub use policy::{default_merge, ignore_post, CombinedArgSubstitutor, DefaultPreargs, IgnorePostargs, SubstitutionPolicy};
pub use positional::{PosargsAppender, PosargsOverwriter, PositionalSubstitutor};
pub use prioritizer::{ArgIgnorer, ArgPrioritizer, ArgSet};
