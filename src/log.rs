// src/log.rs
//
// Diagnostics go to stderr; stdout carries nothing but the report.
use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

pub const LEVEL_QUIET: u8 = 0;
pub const LEVEL_INFO: u8 = 1;
pub const LEVEL_DEBUG: u8 = 2;

static VERBOSITY: AtomicU8 = AtomicU8::new(LEVEL_QUIET);
static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let m = total_ms / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{m:02}:{s:02}.{ms:03}")
}

/// Set the process-wide log level (`LEVEL_*`). Values above debug are clamped.
pub fn set_verbosity(level: u8) {
    start();
    VERBOSITY.store(level.min(LEVEL_DEBUG), Ordering::Relaxed);
}

pub fn verbosity() -> u8 {
    VERBOSITY.load(Ordering::Relaxed)
}

pub fn enabled(level: u8) -> bool {
    level <= verbosity()
}

/// Internal logging function
pub fn write_log(level: u8, tag: &str, msg: &str) {
    if !enabled(level) {
        return;
    }
    let elapsed = fmt_elapsed(start().elapsed().as_millis());
    let line = format!("[{elapsed}][{tag}] {msg}\n");

    if let Ok(_guard) = LOG_LOCK.lock() {
        let _ = std::io::stderr().lock().write_all(line.as_bytes());
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::LEVEL_INFO, "INFO", &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::LEVEL_DEBUG, "DEBUG", &format!($($arg)*))
    };
}

/// Error-level logging. Printed even when quiet.
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::LEVEL_QUIET, "ERROR", &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_formats_minutes_seconds_millis() {
        assert_eq!(fmt_elapsed(0), "00:00.000");
        assert_eq!(fmt_elapsed(61_234), "01:01.234");
    }

    #[test]
    fn error_level_is_always_enabled() {
        assert!(enabled(LEVEL_QUIET));
    }
}
