use log::{Level, LevelFilter, Log, Metadata, Record};

/// `log` sink that writes to the browser console.
///
/// Records are prefixed with their target, which the `*_with_component`
/// helpers set to the component name.
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    /// Install the console logger. The level comes from `WALLET_LOG_LEVEL`
    /// at build time and defaults to `info`.
    pub fn init() {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(max_level(option_env!("WALLET_LOG_LEVEL")));
        }
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

    pub fn error_with_component(component: &str, message: &str) {
        log::error!(target: component, "{}", message);
    }
}

fn max_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|level| level.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_max_level_parsing() {
        assert_eq!(max_level(None), LevelFilter::Info);
        assert_eq!(max_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(max_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(max_level(Some("loud")), LevelFilter::Info);
    }

    #[wasm_bindgen_test]
    fn test_logging_after_init_does_not_panic() {
        Logger::init();
        Logger::info_with_component("logging", "console logger installed");
        Logger::error_with_component("logging", "error path reaches the console");
    }
}
