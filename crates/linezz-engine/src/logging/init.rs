use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax (e.g. "warn",
/// "linezz_engine=debug"). When unset, `RUST_LOG` is consulted, then the
/// level falls back to `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Explicit filter, overriding `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }

    /// Filter string that will be applied, given the value of `RUST_LOG`.
    fn resolve_filter(&self, rust_log: Option<String>) -> String {
        self.env_filter
            .clone()
            .or(rust_log)
            .unwrap_or_else(|| "info".to_owned())
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
///
/// If another logger was installed first (e.g. by a host application) it is
/// left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter(std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);

        match builder.try_init() {
            Ok(()) => log::debug!("logging initialized (filter: {filter})"),
            Err(_) => log::debug!("logger already installed; keeping it"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_beats_rust_log() {
        let config = LoggingConfig::with_filter("warn");
        assert_eq!(config.resolve_filter(Some("trace".into())), "warn");
    }

    #[test]
    fn rust_log_beats_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.resolve_filter(Some("linezz_engine=debug".into())), "linezz_engine=debug");
        assert_eq!(config.resolve_filter(None), "info");
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging(LoggingConfig::with_filter("off"));
        init_logging(LoggingConfig::default());
    }
}
