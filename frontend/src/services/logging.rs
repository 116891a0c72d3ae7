#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

/// Component-scoped logger.
///
/// In the browser messages go to the devtools console; natively (tests and
/// server-side rendering) they are emitted as `tracing` events.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, message, component);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, message, component);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, message, component);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, message, component);
    }

    #[cfg(target_arch = "wasm32")]
    fn log(level: Level, message: &str, component: &str) {
        let line = format!("[{}] {}", component, message);
        match level {
            Level::Debug => gloo::console::debug!(line),
            Level::Info => gloo::console::info!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Error => gloo::console::error!(line),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn log(level: Level, message: &str, component: &str) {
        match level {
            Level::Debug => tracing::debug!(component, "{}", message),
            Level::Info => tracing::info!(component, "{}", message),
            Level::Warn => tracing::warn!(component, "{}", message),
            Level::Error => tracing::error!(component, "{}", message),
        }
    }
}
