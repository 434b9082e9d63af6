//! Substitutor para argumentos nombrados.
//!
//! Sólo existe la variante overwrite: un merge por clave es por naturaleza
//! una sobreescritura. Mismo esquema que un merge shallow de objetos JSON,
//! con el ganador aplicado encima de una copia del perdedor.

use serde::{Deserialize, Serialize};

use crate::prioritizer::ArgPrioritizer;
use crate::Kwargs;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KwargsOverwriter {
    pub prioritizer: ArgPrioritizer,
}

impl KwargsOverwriter {
    pub const fn new(prioritizer: ArgPrioritizer) -> Self {
        Self { prioritizer }
    }

    pub fn substitute(&self, prekwargs: &Kwargs, postkwargs: &Kwargs) -> Kwargs {
        let (a, b) = self.prioritizer.prioritize(prekwargs, postkwargs);
        let mut out = b.clone();
        for (k, v) in a.iter() {
            out.insert(k.clone(), v.clone());
        }
        out
    }
}
