use anyhow::anyhow;
use gloo::net::http::Request;
use log::{Level, LevelFilter, Metadata, Record};
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

use crate::services::config::AppConfig;

#[derive(Debug, Serialize)]
struct LogRequest {
    level: String,
    message: String,
    component: Option<String>,
}

/// Operator-facing log sink. Everything goes to the browser console; warnings
/// and errors are also posted to the configured log endpoint.
struct ConsoleLogger {
    max_level: LevelFilter,
    forward_to: Option<String>,
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => gloo::console::error!(line.clone()),
            Level::Warn => gloo::console::warn!(line.clone()),
            Level::Info => gloo::console::info!(line.clone()),
            Level::Debug | Level::Trace => gloo::console::debug!(line.clone()),
        }

        if let Some(endpoint) = &self.forward_to {
            if record.level() <= Level::Warn {
                forward(
                    endpoint.clone(),
                    LogRequest {
                        level: record.level().as_str().to_lowercase(),
                        message: record.args().to_string(),
                        component: Some(record.target().to_string()),
                    },
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Send log asynchronously without blocking. Failures are dropped: logging
/// them would feed straight back into this sink.
fn forward(endpoint: String, request: LogRequest) {
    spawn_local(async move {
        if let Ok(request) = Request::post(&endpoint).json(&request) {
            let _ = request.send().await;
        }
    });
}

pub struct Logger;

impl Logger {
    /// Install the console sink as the global `log` backend.
    pub fn init(config: &AppConfig) -> anyhow::Result<()> {
        let max_level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        log::set_boxed_logger(Box::new(ConsoleLogger {
            max_level,
            forward_to: config.log_endpoint.clone(),
        }))
        .map_err(|e| anyhow!("Failed to install logger: {}", e))?;
        log::set_max_level(max_level);
        Ok(())
    }

    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!(target: component, "{}", message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!(target: component, "{}", message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!(target: component, "{}", message);
    }
}
