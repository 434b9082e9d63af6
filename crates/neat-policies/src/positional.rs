//! Substitutores para argumentos posicionales.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::prioritizer::ArgPrioritizer;
use crate::Args;

/// Overwrite: los valores del ganador ocupan los índices bajos; el perdedor
/// sólo rellena las posiciones que el ganador deja abiertas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosargsOverwriter {
    pub prioritizer: ArgPrioritizer,
}

impl PosargsOverwriter {
    pub const fn new(prioritizer: ArgPrioritizer) -> Self {
        Self { prioritizer }
    }

    pub fn substitute(&self, preargs: &[Value], postargs: &[Value]) -> Args {
        let (a, b) = self.prioritizer.prioritize(preargs, postargs);
        let mut out = a.to_vec();
        if b.len() > a.len() {
            out.extend_from_slice(&b[a.len()..]);
        }
        out
    }
}

/// Append: ganador seguido de todo el perdedor; no se descarta nada.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosargsAppender {
    pub prioritizer: ArgPrioritizer,
}

impl PosargsAppender {
    pub const fn new(prioritizer: ArgPrioritizer) -> Self {
        Self { prioritizer }
    }

    pub fn substitute(&self, preargs: &[Value], postargs: &[Value]) -> Args {
        let (a, b) = self.prioritizer.prioritize(preargs, postargs);
        a.iter().chain(b.iter()).cloned().collect()
    }
}

/// Variante seleccionable (y serializable) de substitutor posicional.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "prioritizer")]
pub enum PositionalSubstitutor {
    Overwrite(PosargsOverwriter),
    Append(PosargsAppender),
}

impl PositionalSubstitutor {
    pub fn substitute(&self, preargs: &[Value], postargs: &[Value]) -> Args {
        match self {
            PositionalSubstitutor::Overwrite(s) => s.substitute(preargs, postargs),
            PositionalSubstitutor::Append(s) => s.substitute(preargs, postargs),
        }
    }
}

impl Default for PositionalSubstitutor {
    fn default() -> Self {
        PositionalSubstitutor::Overwrite(PosargsOverwriter::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn overwrite_with_post_priority() {
        let s = PosargsOverwriter::new(ArgPrioritizer::post_first());
        let out = s.substitute(&[json!(1), json!(2)], &[json!(9)]);
        assert_eq!(out, vec![json!(9), json!(2)]);
    }

    #[test]
    fn overwrite_shorter_loser_is_dropped() {
        let s = PosargsOverwriter::default();
        let out = s.substitute(&[json!(1), json!(2)], &[json!(9)]);
        assert_eq!(out, vec![json!(1), json!(2)]);
    }

    #[test]
    fn append_keeps_everything() {
        let s = PosargsAppender::new(ArgPrioritizer::post_first());
        let out = s.substitute(&[json!(1), json!(2)], &[json!(9)]);
        assert_eq!(out, vec![json!(9), json!(1), json!(2)]);
    }

    #[test]
    fn empty_sides_give_empty_result() {
        assert!(PosargsOverwriter::default().substitute(&[], &[]).is_empty());
        assert!(PosargsAppender::default().substitute(&[], &[]).is_empty());
    }

    #[test]
    fn serde_tagged_roundtrip_shape() {
        let s = PositionalSubstitutor::Append(PosargsAppender::default());
        let v = serde_json::to_value(s).unwrap();
        assert_eq!(v["mode"], json!("Append"));
    }
}
