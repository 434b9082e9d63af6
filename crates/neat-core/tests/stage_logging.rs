use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};
use neat_core::{from_fn, CallArgs, Callable, CompositionDecorator};
use serde_json::json;

// Logger de captura: guarda los mensajes `trace` emitidos por el crate.
struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Trace {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger { lines: Mutex::new(Vec::new()) };
static INIT: Once = Once::new();

fn captured() -> &'static CaptureLogger {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    &LOGGER
}

#[test]
fn every_composition_stage_is_traced() {
    let logger = captured();
    let first = from_fn("stage_first_xq", |call: CallArgs| Ok(call.args[0].clone()));
    let second = from_fn("stage_second_xq", |call: CallArgs| Ok(call.args[0].clone()));
    let c = CompositionDecorator::new(vec![first, second]);
    assert_eq!(c.call(CallArgs::positional([json!(1)])).unwrap(), json!(1));

    let lines = logger.lines.lock().unwrap().clone();
    assert!(lines.iter().any(|l| l == "composition stage 0 -> stage_first_xq"), "{lines:?}");
    assert!(lines.iter().any(|l| l == "composition stage 1 -> stage_second_xq"), "{lines:?}");
}
