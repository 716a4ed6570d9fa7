use crate::application::ports::{LocalTask, TaskSpawner};
use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};
use crate::infrastructure::extension::rig_log;

/// Spawns onto the browser microtask queue
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSpawner;

impl TaskSpawner for BrowserSpawner {
    fn spawn(&self, task: LocalTask) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

/// Wall clock from `Date.now()`
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = js_sys::Date::new(&(timestamp as f64).into());
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}

fn format_entry(entry: &LogEntry) -> String {
    let timestamp = crate::domain::logging::get_time_provider().format_timestamp(entry.timestamp);
    entry.format_line(&timestamp)
}

/// Browser console sink
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
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        let formatted = format_entry(&entry);
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => gloo::console::debug!(formatted),
            LogLevel::Info => gloo::console::info!(formatted),
            LogLevel::Warn => gloo::console::warn!(formatted),
            LogLevel::Error => gloo::console::error!(formatted),
        }
    }
}

/// Console plus the extension rig's debug log
pub struct RigLogger {
    console: ConsoleLogger,
}

impl RigLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { console: ConsoleLogger::new(min_level) }
    }
}

impl Logger for RigLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level >= self.console.min_level {
            rig_log(&format_entry(&entry));
        }
        self.console.log(entry);
    }
}
