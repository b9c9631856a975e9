use std::sync::Once;

/// How diagnostics reach stderr while gradient snippets own stdout.
///
/// `env_filter` uses `env_logger` directives; `pngtocss_core=trace` prints
/// every stop-search step. Without one, `RUST_LOG` applies, else warnings
/// only (the fallback-direction notice). `write_style` comes from `--color`.
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
    /// `--verbose` turns on debug output for both crates, overriding `RUST_LOG`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.env_filter = Some("pngtocss=debug,pngtocss_core=debug".to_string());
        }
        self
    }
}

static INIT: Once = Once::new();

/// Installs the stderr logger once per process; later calls are no-ops so
/// tests and `main` can both call it.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.target(env_logger::Target::Stderr);
        builder.write_style(config.write_style);
        builder.format_timestamp(None);
        builder.init();

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_sets_debug_filter_for_both_crates() {
        let config = LoggingConfig::default().verbose(true);
        assert_eq!(config.env_filter.as_deref(), Some("pngtocss=debug,pngtocss_core=debug"));
        assert!(LoggingConfig::default().verbose(false).env_filter.is_none());
    }

    #[test]
    fn repeated_init_is_ignored() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::default().verbose(true));
        assert!(INIT.is_completed());
    }
}
