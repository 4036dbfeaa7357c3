//! Storefront configuration, read from the environment.

use core::str::FromStr;

use thiserror::Error;

use bazaar_observability::LogFormat;

use crate::render::{Locale, Markup, Renderer};

/// What the binary prints on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Rendered storefront text.
    #[default]
    Text,
    /// Final cart snapshot as JSON.
    Json,
}

impl FromStr for OutputMode {
    type Err = crate::render::UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            other => Err(crate::render::UnknownOption {
                kind: "output mode",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    Invalid {
        var: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub locale: Locale,
    pub markup: Markup,
    pub currency: String,
    pub output: OutputMode,
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            markup: Markup::default(),
            currency: "€".to_string(),
            output: OutputMode::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl StorefrontConfig {
    pub const LOCALE: &'static str = "BAZAAR_LOCALE";
    pub const MARKUP: &'static str = "BAZAAR_MARKUP";
    pub const CURRENCY: &'static str = "BAZAAR_CURRENCY";
    pub const OUTPUT: &'static str = "BAZAAR_OUTPUT";
    pub const LOG_FORMAT: &'static str = "BAZAAR_LOG_FORMAT";

    /// Log format to install before the rest of the configuration is read.
    ///
    /// Never fails and never logs: a missing or malformed value yields the
    /// default here, and `from_lookup` reports the malformed case once tracing
    /// is up.
    pub fn log_format_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> LogFormat {
        lookup(Self::LOG_FORMAT)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn log_format_from_env() -> LogFormat {
        Self::log_format_from_lookup(|var| std::env::var(var).ok())
    }

    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using an arbitrary variable lookup. Unset or blank values fall back
    /// to defaults; malformed values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let value = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        Ok(Self {
            locale: parse(Self::LOCALE, value(Self::LOCALE), defaults.locale)?,
            markup: parse(Self::MARKUP, value(Self::MARKUP), defaults.markup)?,
            currency: parse(Self::CURRENCY, value(Self::CURRENCY), defaults.currency)?,
            output: parse(Self::OUTPUT, value(Self::OUTPUT), defaults.output)?,
            log_format: parse(Self::LOG_FORMAT, value(Self::LOG_FORMAT), defaults.log_format)?,
        })
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.markup, self.locale, self.currency.clone())
    }
}

fn parse<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr + core::fmt::Debug,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            source: Box::new(e),
        }),
        None => {
            tracing::debug!(var, ?default, "not set; using default");
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// In-memory sink for formatted log records.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let sink = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs.text())
    }

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.locale, Locale::Fr);
        assert_eq!(config.currency, "€");
    }

    #[test]
    fn reads_every_variable() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("BAZAAR_LOCALE", "en"),
            ("BAZAAR_MARKUP", "html"),
            ("BAZAAR_CURRENCY", "gp"),
            ("BAZAAR_OUTPUT", "json"),
            ("BAZAAR_LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.markup, Markup::Html);
        assert_eq!(config.currency, "gp");
        assert_eq!(config.output, OutputMode::Json);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config =
            StorefrontConfig::from_lookup(lookup(&[("BAZAAR_CURRENCY", "  ")])).unwrap();
        assert_eq!(config.currency, "€");
    }

    #[test]
    fn every_unset_variable_logs_its_fallback() {
        let (config, logs) = with_captured_logs(|| StorefrontConfig::from_lookup(lookup(&[])));

        assert!(config.is_ok());
        assert_eq!(logs.matches("not set; using default").count(), 5);
        for var in [
            StorefrontConfig::LOCALE,
            StorefrontConfig::MARKUP,
            StorefrontConfig::CURRENCY,
            StorefrontConfig::OUTPUT,
            StorefrontConfig::LOG_FORMAT,
        ] {
            assert!(logs.contains(var), "no fallback logged for {var}");
        }
    }

    #[test]
    fn set_currency_logs_no_fallback() {
        let (config, logs) = with_captured_logs(|| {
            StorefrontConfig::from_lookup(lookup(&[("BAZAAR_CURRENCY", "gp")]))
        });

        assert_eq!(config.unwrap().currency, "gp");
        assert!(!logs.contains("BAZAAR_CURRENCY"));
    }

    #[test]
    fn log_format_is_resolved_without_failing_or_logging() {
        let (json, logs) = with_captured_logs(|| {
            StorefrontConfig::log_format_from_lookup(lookup(&[("BAZAAR_LOG_FORMAT", "json")]))
        });
        assert_eq!(json, LogFormat::Json);
        assert!(logs.is_empty());

        let malformed =
            StorefrontConfig::log_format_from_lookup(lookup(&[("BAZAAR_LOG_FORMAT", "xml")]));
        assert_eq!(malformed, LogFormat::default());
        assert_eq!(
            StorefrontConfig::log_format_from_lookup(lookup(&[])),
            LogFormat::Pretty
        );
    }

    #[test]
    fn malformed_value_names_the_variable() {
        let err = StorefrontConfig::from_lookup(lookup(&[("BAZAAR_MARKUP", "pdf")])).unwrap_err();
        assert_eq!(err.to_string(), "BAZAAR_MARKUP: unknown markup `pdf`");
    }
}
