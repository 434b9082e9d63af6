//! Priorización entre los conjuntos "pre" y "post".
//!
//! `ArgPrioritizer` produce siempre exactamente un orden `(winner, loser)`;
//! no tiene casos de fallo.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Kwargs;

/// Conjunto de argumentos que puede participar en una priorización.
pub trait ArgSet {
    /// `true` si el conjunto no aporta ningún valor.
    fn is_empty_set(&self) -> bool;
}

impl ArgSet for [Value] {
    fn is_empty_set(&self) -> bool {
        self.is_empty()
    }
}

impl ArgSet for Vec<Value> {
    fn is_empty_set(&self) -> bool {
        self.is_empty()
    }
}

impl ArgSet for Kwargs {
    fn is_empty_set(&self) -> bool {
        self.is_empty()
    }
}

/// Configuración de prioridad entre "pre" y "post".
///
/// - `prioritize_post`: el conjunto post gana por defecto.
/// - `prioritize_non_empty`: un conjunto vacío nunca gana a uno no vacío,
///   independientemente de `prioritize_post`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgPrioritizer {
    pub prioritize_post: bool,
    pub prioritize_non_empty: bool,
}

impl ArgPrioritizer {
    pub const fn new(prioritize_post: bool, prioritize_non_empty: bool) -> Self {
        Self { prioritize_post, prioritize_non_empty }
    }

    /// Prioriza "pre" (valor por defecto de los substitutores).
    pub const fn pre_first() -> Self {
        Self::new(false, false)
    }

    /// Prioriza "post".
    pub const fn post_first() -> Self {
        Self::new(true, false)
    }

    /// Devuelve `(winner, loser)`.
    pub fn prioritize<'a, T: ArgSet + ?Sized>(&self, pre: &'a T, post: &'a T) -> (&'a T, &'a T) {
        let (a, b) = if self.prioritize_post { (post, pre) } else { (pre, post) };

        if self.prioritize_non_empty && a.is_empty_set() && !b.is_empty_set() {
            return (b, a);
        }
        (a, b)
    }
}

/// Descarta el conjunto perdedor y devuelve el ganador tal cual.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgIgnorer {
    pub prioritizer: ArgPrioritizer,
}

impl ArgIgnorer {
    pub const fn new(prioritizer: ArgPrioritizer) -> Self {
        Self { prioritizer }
    }

    pub fn select<'a, T: ArgSet + ?Sized>(&self, pre: &'a T, post: &'a T) -> &'a T {
        self.prioritizer.prioritize(pre, post).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pre_wins_by_default() {
        let pre = vec![json!(1)];
        let post = vec![json!(2)];
        let (w, l) = ArgPrioritizer::default().prioritize(&pre, &post);
        assert_eq!(w, &pre);
        assert_eq!(l, &post);
    }

    #[test]
    fn post_wins_when_configured() {
        let pre = vec![json!(1)];
        let post = vec![json!(2)];
        let (w, _) = ArgPrioritizer::post_first().prioritize(&pre, &post);
        assert_eq!(w, &post);
    }

    #[test]
    fn empty_winner_yields_to_non_empty() {
        let pre = vec![json!(1)];
        let post: Vec<Value> = vec![];
        let p = ArgPrioritizer::new(true, true);
        let (w, l) = p.prioritize(&pre, &post);
        assert_eq!(w, &pre);
        assert!(l.is_empty());

        // sin prioritize_non_empty el vacío gana igualmente
        let (w, _) = ArgPrioritizer::post_first().prioritize(&pre, &post);
        assert!(w.is_empty());
    }

    #[test]
    fn ignorer_keeps_winner() {
        let mut pre = Kwargs::new();
        pre.insert("a".into(), json!(1));
        let post = Kwargs::new();
        assert_eq!(ArgIgnorer::default().select(&pre, &post), &pre);
    }
}
