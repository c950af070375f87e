//! Rolling Layer
//!
//! Formats each event into one line, stores it and echoes it.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::buffer::LogBuffer;
use crate::sink;

/// `HH:MM:SS.mmm LEVEL [app] target: message key=value ...`
pub struct RollingLayer {
    app_name: String,
    buffer: LogBuffer,
    echo: bool,
}

impl RollingLayer {
    pub fn new(app_name: &str, buffer: LogBuffer) -> Self {
        Self {
            app_name: app_name.to_string(),
            buffer,
            echo: true,
        }
    }

    /// Keep lines in the buffer only
    pub fn without_echo(mut self) -> Self {
        self.echo = false;
        self
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        let line = format!(
            "{} {:>5} [{}] {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            meta.level(),
            self.app_name,
            meta.target(),
            fields.finish(),
        );

        if self.echo {
            sink::write_line(meta.level(), &line);
        }
        self.buffer.push(line);
    }
}

#[derive(Default)]
struct FieldCollector {
    message: String,
    extra: String,
}

impl FieldCollector {
    fn finish(self) -> String {
        if self.extra.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.extra.trim_start().to_string()
        } else {
            self.message + &self.extra
        }
    }
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.extra, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.extra, " {}={:?}", field.name(), value);
        }
    }
}
