//! Console Logger
//!
//! Routes `log` records to the browser devtools console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::str::FromStr;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.target(), &record.args().to_string());
        let value = line.into();
        match record.level() {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::info_1(&value),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Safe to call more than once.
pub fn init() {
    let level = level_from(option_env!("WATERBILL_LOG"));
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn level_from(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|s| LevelFilter::from_str(s.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

/// Messages that already carry a `[TAG]` prefix are printed as-is
fn format_line(target: &str, message: &str) -> String {
    if message.starts_with('[') {
        message.to_string()
    } else {
        format!("[{}] {}", target, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing() {
        assert_eq!(level_from(None), LevelFilter::Info);
        assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(level_from(Some("loud")), LevelFilter::Info);
    }

    #[test]
    fn test_format_line() {
        assert_eq!(format_line("waterbill_ui::api", "GET /auth/me"), "[waterbill_ui::api] GET /auth/me");
        assert_eq!(format_line("waterbill_ui::app", "[APP] mounted"), "[APP] mounted");
    }
}
