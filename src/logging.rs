//! Console Logging
//!
//! Routes the `log` facade through the ring logger into the browser console.

use std::sync::OnceLock;

use log::Level;
use ring_logger::RingLogger;
use wasm_bindgen::JsValue;

use crate::config::ClientConfig;

static LOGGER: OnceLock<&'static RingLogger> = OnceLock::new();

pub fn init(config: &ClientConfig) {
    let logger = RingLogger::new(config.log_level, config.log_capacity, Box::new(write_console));
    match ring_logger::init(logger) {
        Ok(installed) => {
            let _ = LOGGER.set(installed);
        }
        Err(e) => {
            web_sys::console::warn_1(&JsValue::from_str(&format!("logger already installed: {}", e)));
        }
    }
}

/// Replay the buffered tail of the log as a collapsed console group
pub fn dump_recent(title: &str) {
    let Some(logger) = LOGGER.get() else {
        return;
    };
    web_sys::console::group_collapsed_1(&JsValue::from_str(title));
    for line in logger.recent() {
        web_sys::console::log_1(&JsValue::from_str(&line));
    }
    web_sys::console::group_end();
}

fn write_console(level: Level, line: &str) {
    let line = JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        _ => web_sys::console::log_1(&line),
    }
}
