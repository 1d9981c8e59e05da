//! Captures `log` error records per test thread, so tests can check which
//! diagnostics an operation printed.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::{cell::RefCell, sync::Once};

thread_local! {
  static ERRORS: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

struct CapturingLogger;

impl Log for CapturingLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() == Level::Error
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      ERRORS.with(|errors| errors.borrow_mut().push(record.args().to_string()));
    }
  }

  fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;
static INIT: Once = Once::new();

/// Runs `f` and returns its result with the error messages it logged.
pub fn captured_errors<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
  INIT.call_once(|| {
    log::set_logger(&LOGGER).expect("no other logger in tests");
    log::set_max_level(LevelFilter::Error);
  });
  ERRORS.with(|errors| errors.borrow_mut().clear());
  let result = f();
  let errors = ERRORS.with(|errors| errors.borrow_mut().drain(..).collect());
  (result, errors)
}
