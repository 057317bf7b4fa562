use crate::domain::logging::{LogEntry, LogLevel, Logger};
use crate::time_utils::format_clock;

/// Console logger implementation for the browser
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn format_entry(entry: &LogEntry) -> String {
        format!(
            "[{}] {} {} | {}",
            format_clock(entry.timestamp),
            entry.level,
            entry.component,
            entry.message
        )
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        let line: wasm_bindgen::JsValue = Self::format_entry(&entry).into();
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&line),
            LogLevel::Info => web_sys::console::info_1(&line),
            LogLevel::Warn => web_sys::console::warn_1(&line),
            LogLevel::Error => web_sys::console::error_1(&line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logging::LogComponent;

    #[test]
    fn entry_format_has_clock_level_and_component() {
        let entry = LogEntry {
            timestamp: 3_723_004,
            level: LogLevel::Warn,
            component: LogComponent::Infrastructure("Http"),
            message: "slow".to_string(),
        };
        assert_eq!(ConsoleLogger::format_entry(&entry), "[01:02:03.004]  WARN INF:Http | slow");
    }
}
