//! Errores del núcleo de decoración.
//!
//! Los wrappers son transparentes: cualquier error producido por un callable
//! envuelto se propaga sin cambios. La única recuperación local es el
//! fallback de `ReturnValueSelectorDecorator`.

use thiserror::Error;

use crate::subscript::SubscriptError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecorError {
    /// La forma de la llamada no coincide con la que espera el callable.
    #[error("arity mismatch: expected {expected}, got {got} argument(s)")]
    ArityMismatch { expected: String, got: usize },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Subscription(#[from] SubscriptError),
    #[error("missing attribute: {0}")]
    MissingAttribute(String),
    #[error("unknown method: {0}")]
    UnknownMethod(String),
    #[error("composition has no callables")]
    EmptyComposition,
    /// Fallo propio de un callable de usuario.
    #[error("target failed: {0}")]
    Target(String),
}

pub type DecorResult<T> = Result<T, DecorError>;
