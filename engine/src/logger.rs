use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
}

pub struct Logger {
    prefix: Option<String>,
    level: LogLevel,
}

impl Logger {
    fn new(prefix: Option<String>, level: LogLevel) -> Self {
        Self { prefix, level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    pub fn log(&self, level: LogLevel, file: &str, line: u32, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        println!("{}", self.format_line(&timestamp, file, line, message));
    }

    fn format_line(&self, timestamp: &str, file: &str, line: u32, message: &str) -> String {
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
        } else {
            format!("[{}][{}:{}] {}", timestamp, file_name, line, message)
        }
    }
}

pub fn init_logger(prefix: Option<String>, level: LogLevel) {
    LOGGER.get_or_init(|| Logger::new(prefix, level));
}

pub fn log(level: LogLevel, file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

pub fn debug_enabled() -> bool {
    LOGGER
        .get()
        .is_some_and(|logger| logger.enabled(LogLevel::Debug))
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, file!(), line!(), &format!($($arg)*))
    };
}

/// Skips formatting entirely unless the logger runs at debug level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::debug_enabled() {
            $crate::logger::log($crate::logger::LogLevel::Debug, file!(), line!(), &format!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_with_prefix() {
        let logger = Logger::new(Some("SelfPlay".to_string()), LogLevel::Info);
        let line = logger.format_line("2026-01-01 00:00:00", "src/match_runner.rs", 12, "hello");
        assert_eq!(line, "[2026-01-01 00:00:00][SelfPlay][match_runner.rs:12] hello");
    }

    #[test]
    fn test_format_line_windows_path_without_prefix() {
        let logger = Logger::new(None, LogLevel::Info);
        let line = logger.format_line("ts", "src\\main.rs", 3, "x");
        assert_eq!(line, "[ts][main.rs:3] x");
    }

    #[test]
    fn test_level_filter() {
        let info = Logger::new(None, LogLevel::Info);
        assert!(info.enabled(LogLevel::Info));
        assert!(!info.enabled(LogLevel::Debug));

        let debug = Logger::new(None, LogLevel::Debug);
        assert!(debug.enabled(LogLevel::Debug));
        assert!(debug.enabled(LogLevel::Info));
    }
}
