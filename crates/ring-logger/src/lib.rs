//! Ring Logger
//!
//! A `log` backend that forwards every accepted line to a sink and keeps the
//! most recent lines in a bounded ring, so the tail of a session can be
//! inspected after the fact.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Receives each formatted line together with its level
pub type Sink = Box<dyn Fn(Level, &str) + Send + Sync>;

/// Default number of lines retained
pub const DEFAULT_CAPACITY: usize = 200;

pub struct RingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
    sink: Sink,
}

impl RingLogger {
    pub fn new(level: LevelFilter, capacity: usize, sink: Sink) -> Self {
        Self {
            level,
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
            sink,
        }
    }

    /// Snapshot of the retained lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        let lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        lines.iter().cloned().collect()
    }

    fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        let mut lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for RingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record, Utc::now());
        (self.sink)(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// `HH:MM:SS.mmm LEVEL target: message`
pub fn format_line(record: &Record, at: DateTime<Utc>) -> String {
    format!(
        "{} {:<5} {}: {}",
        at.format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Install the logger globally. The logger lives for the rest of the program.
pub fn init(logger: RingLogger) -> Result<&'static RingLogger, SetLoggerError> {
    let logger: &'static RingLogger = Box::leak(Box::new(logger));
    log::set_logger(logger)?;
    log::set_max_level(logger.level);
    Ok(logger)
}
