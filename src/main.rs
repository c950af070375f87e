#![allow(warnings)]
//! Todo Compose Frontend Entry Point

mod context;
mod store;
mod keyboard;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use rolling_logger::LoggerConfig;

fn main() {
    console_error_panic_hook::set_once();
    let logs = match rolling_logger::init_logger(LoggerConfig::for_app("TodoCompose")) {
        Ok(buffer) => Some(buffer),
        Err(e) => {
            web_sys::console::warn_1(&format!("[APP] Logger init failed: {}", e).into());
            None
        }
    };
    mount_to_body(move || view! { <App logs=logs /> });
}
