//! Rolling logger
//!
//! A `log` backend that formats each record as
//! `[HH:MM:SS.mmm LEVEL app target] message`, prints it (browser console on
//! wasm32, stderr elsewhere) and keeps the most recent lines in a circular
//! buffer so they can be shown or copied from inside the app.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept by default
pub const DEFAULT_CAPACITY: usize = 500;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Fixed-capacity line buffer that evicts the oldest line when full.
#[derive(Debug)]
pub struct LineRing {
    max: usize,
    lines: VecDeque<String>,
}

impl LineRing {
    pub fn new(capacity: usize) -> Self {
        let max = capacity.max(1);
        Self {
            max,
            lines: VecDeque::with_capacity(max),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.max {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

pub struct RollingLogger {
    app: String,
    level: LevelFilter,
    ring: Mutex<LineRing>,
}

impl RollingLogger {
    pub fn new(app: &str, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app: app.to_string(),
            level,
            ring: Mutex::new(LineRing::new(capacity)),
        }
    }

    pub fn format(&self, record: &Record<'_>) -> String {
        format!(
            "[{} {:<5} {} {}] {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            self.app,
            record.target(),
            record.args()
        )
    }

    pub fn recent_lines(&self) -> Vec<String> {
        match self.ring.lock() {
            Ok(ring) => ring.snapshot(),
            Err(_) => Vec::new(),
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);
        emit(record.level(), &line);
        if let Ok(mut ring) = self.ring.lock() {
            ring.push(line);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Fails if a logger is already set.
pub fn init_logger(app: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    init_with_capacity(app, level, DEFAULT_CAPACITY)
}

pub fn init_with_capacity(app: &str, level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(app, level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(logger.level);
    Ok(())
}

/// Buffered lines, oldest first. Empty before [`init_logger`].
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingLogger::recent_lines).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_evicts_oldest() {
        let mut ring = LineRing::new(3);
        for i in 0..5 {
            ring.push(format!("line {}", i));
        }
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.snapshot(), vec!["line 2", "line 3", "line 4"]);
        ring.clear();
        assert!(ring.is_empty());
    }

    #[test]
    fn test_logger_filters_and_buffers() {
        let logger = RollingLogger::new("folio", LevelFilter::Info, 10);
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("blog")
                .args(format_args!("hidden"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .target("blog")
                .args(format_args!("skipping {}", "b1"))
                .build(),
        );

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("WARN"));
        assert!(lines[0].ends_with("folio blog] skipping b1"));
    }

    #[test]
    fn test_global_install() {
        init_logger("folio-test", LevelFilter::Info).unwrap();
        log::info!("hello");
        assert!(recent_lines().iter().any(|l| l.ends_with("hello")));
        assert!(init_logger("again", LevelFilter::Info).is_err());
    }
}
