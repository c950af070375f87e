//! Platform Sinks

use tracing::Level;

#[cfg(target_arch = "wasm32")]
pub fn write_line(level: &Level, line: &str) {
    use web_sys::console;

    match *level {
        Level::ERROR => console::error_1(&line.into()),
        Level::WARN => console::warn_1(&line.into()),
        Level::INFO => console::info_1(&line.into()),
        _ => console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn write_line(_level: &Level, line: &str) {
    eprintln!("{}", line);
}
