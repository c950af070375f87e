//! Logger Configuration

use tracing_subscriber::filter::LevelFilter;

const DEFAULT_CAPACITY: usize = 500;

#[derive(Clone, Debug)]
pub struct LoggerConfig {
    /// Tag printed on every line
    pub app_name: String,
    /// Lines kept in the circular buffer
    pub capacity: usize,
    /// Most verbose level recorded
    pub level: LevelFilter,
}

impl LoggerConfig {
    /// Defaults: 500 lines, DEBUG in debug builds and INFO in release builds
    pub fn for_app(app_name: impl Into<String>) -> Self {
        let level = if cfg!(debug_assertions) {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        };
        Self {
            app_name: app_name.into(),
            capacity: DEFAULT_CAPACITY,
            level,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }
}
