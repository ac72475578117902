//! `log` backend that writes records to the browser console.
//!
//! The core crate only talks to the `log` facade; this is the logger the
//! WASM module installs on start so those records reach devtools.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

/// Most verbose level forwarded to the console.
///
/// Request logging in the core is already gated by `ServiceConfig::debug`,
/// so debug records are let through; per-pixel-loop trace records are not.
pub const MAX_LEVEL: LevelFilter = LevelFilter::Debug;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Logger mapping each `log` level onto the matching `console` method.
pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= MAX_LEVEL
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&message),
            Level::Warn => web_sys::console::warn_1(&message),
            Level::Info => web_sys::console::info_1(&message),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger.
///
/// Returns `false` if a logger was already installed.
pub fn install() -> bool {
    match log::set_logger(&LOGGER) {
        Ok(()) => {
            log::set_max_level(MAX_LEVEL);
            true
        }
        Err(_) => false,
    }
}
