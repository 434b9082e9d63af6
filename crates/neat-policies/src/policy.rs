//! Contrato de políticas de sustitución y políticas canónicas.
//!
//! Una política es una función pura
//! `(preargs, postargs, prekwargs, postkwargs) -> (args, kwargs)`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::named::KwargsOverwriter;
use crate::positional::{PosargsOverwriter, PositionalSubstitutor};
use crate::prioritizer::{ArgIgnorer, ArgPrioritizer};
use crate::{Args, Kwargs};

/// Contrato de políticas de sustitución deterministas.
pub trait SubstitutionPolicy: Send + Sync {
    /// id estático, usado al describir wrappers.
    fn id(&self) -> &'static str;

    fn substitute(&self, preargs: &[Value], postargs: &[Value], prekwargs: &Kwargs, postkwargs: &Kwargs) -> (Args, Kwargs);
}

/// Combina un substitutor posicional y uno nombrado en una política.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedArgSubstitutor {
    pub args: PositionalSubstitutor,
    pub kwargs: KwargsOverwriter,
}

impl CombinedArgSubstitutor {
    pub const fn new(args: PositionalSubstitutor, kwargs: KwargsOverwriter) -> Self {
        Self { args, kwargs }
    }

    /// Post sobreescribe posiciones y nombres; pre rellena el resto.
    pub const fn post_overwrites() -> Self {
        Self::new(PositionalSubstitutor::Overwrite(PosargsOverwriter::new(ArgPrioritizer::post_first())),
                  KwargsOverwriter::new(ArgPrioritizer::post_first()))
    }
}

impl SubstitutionPolicy for CombinedArgSubstitutor {
    fn id(&self) -> &'static str {
        "combined"
    }

    fn substitute(&self, preargs: &[Value], postargs: &[Value], prekwargs: &Kwargs, postkwargs: &Kwargs) -> (Args, Kwargs) {
        (self.args.substitute(preargs, postargs), self.kwargs.substitute(prekwargs, postkwargs))
    }
}

/// Política por defecto de `PreargumentDecorator`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultPreargs;

impl SubstitutionPolicy for DefaultPreargs {
    fn id(&self) -> &'static str {
        "default_preargs"
    }

    fn substitute(&self, preargs: &[Value], postargs: &[Value], prekwargs: &Kwargs, postkwargs: &Kwargs) -> (Args, Kwargs) {
        CombinedArgSubstitutor::post_overwrites().substitute(preargs, postargs, prekwargs, postkwargs)
    }
}

/// El resultado es exactamente el conjunto pre; post se descarta.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IgnorePostargs;

impl SubstitutionPolicy for IgnorePostargs {
    fn id(&self) -> &'static str {
        "ignore_postargs"
    }

    fn substitute(&self, preargs: &[Value], postargs: &[Value], prekwargs: &Kwargs, postkwargs: &Kwargs) -> (Args, Kwargs) {
        let ignorer = ArgIgnorer::new(ArgPrioritizer::pre_first());
        (ignorer.select(preargs, postargs).to_vec(), ignorer.select(prekwargs, postkwargs).clone())
    }
}

/// Forma funcional de `DefaultPreargs`.
pub fn default_merge(preargs: &[Value], postargs: &[Value], prekwargs: &Kwargs, postkwargs: &Kwargs) -> (Args, Kwargs) {
    DefaultPreargs.substitute(preargs, postargs, prekwargs, postkwargs)
}

/// Forma funcional de `IgnorePostargs`.
pub fn ignore_post(preargs: &[Value], postargs: &[Value], prekwargs: &Kwargs, postkwargs: &Kwargs) -> (Args, Kwargs) {
    IgnorePostargs.substitute(preargs, postargs, prekwargs, postkwargs)
}
