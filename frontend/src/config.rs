//! Build-time configuration of the console.
//!
//! Values are baked in with `option_env!` when the wasm bundle is built:
//! - `SHIM_CONSOLE_API_BASE`: prefix for API requests (default: same origin).
//! - `SHIM_CONSOLE_LOG`: browser console log level (default: `info`).

use common::config::ConsoleConfig;
use log::LevelFilter;

pub fn load() -> ConsoleConfig {
    let config = ConsoleConfig::default();
    match option_env!("SHIM_CONSOLE_API_BASE") {
        Some(api_base) => config.with_api_base(api_base),
        None => config,
    }
}

pub fn log_level() -> LevelFilter {
    parse_level(option_env!("SHIM_CONSOLE_LOG"))
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    match value {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        Some("off") => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}
