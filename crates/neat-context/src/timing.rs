//! Medición del tiempo de ejecución de bloques y callables.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use log::debug;
use neat_core::decoration::Decorator;
use neat_core::{CallArgs, Callable, CallableRef, DecorResult};
use serde_json::Value;

/// Marcas de inicio/fin: reloj de pared (`chrono`) para registro y
/// `Instant` monotónico para la duración.
#[derive(Clone, Debug)]
pub struct Timing {
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    start: Instant,
    elapsed: Option<Duration>,
}

impl Timing {
    pub fn start() -> Self {
        Self { started_at: Utc::now(),
               ended_at: None,
               start: Instant::now(),
               elapsed: None }
    }

    /// Registra el fin. Llamadas repetidas actualizan la marca final.
    pub fn stop(&mut self) {
        self.elapsed = Some(self.start.elapsed());
        self.ended_at = Some(Utc::now());
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Duración medida; `None` antes de `stop`.
    pub fn delta(&self) -> Option<Duration> {
        self.elapsed
    }

    /// Ejecuta `f` y devuelve su resultado junto con la medición.
    pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, Timing) {
        let mut timing = Timing::start();
        let out = f();
        timing.stop();
        (out, timing)
    }
}

/// Decorador que mide cada invocación del target y la registra en `debug`.
#[derive(Clone, Debug)]
pub struct TimedDecorator {
    base: Decorator,
}

impl TimedDecorator {
    pub fn new(target: CallableRef) -> Self {
        Self { base: Decorator::new(target) }
    }

    pub fn call_timed(&self, call: CallArgs) -> (DecorResult<Value>, Timing) {
        Timing::measure(|| self.base.forward(call))
    }
}

impl Callable for TimedDecorator {
    fn call(&self, call: CallArgs) -> DecorResult<Value> {
        let (out, timing) = self.call_timed(call);
        debug!("{} took {:?} (started {})",
               self.base.target().name(),
               timing.delta().unwrap_or_default(),
               timing.started_at().to_rfc3339());
        out
    }

    fn name(&self) -> String {
        "TimedDecorator".to_string()
    }

    fn describe(&self) -> String {
        self.base.representation("TimedDecorator").render()
    }

    fn doc(&self) -> String {
        self.base.doc_for(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_none_until_stopped() {
        let mut t = Timing::start();
        assert!(t.delta().is_none());
        assert!(t.ended_at().is_none());
        t.stop();
        assert!(t.delta().is_some());
        assert!(t.ended_at().unwrap() >= t.started_at());
    }

    #[test]
    fn measure_returns_value() {
        let (v, t) = Timing::measure(|| 21 * 2);
        assert_eq!(v, 42);
        assert!(t.delta().is_some());
    }
}
