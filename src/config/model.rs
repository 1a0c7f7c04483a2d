use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;

use crate::command::{Command, Pattern};
use crate::completer::StringsCompleter;
use crate::http::HttpRequestConfig;

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    pub http: Option<HttpSettings>,
    pub commands: Option<Vec<CommandEntry>>,
}

/// HTTP request settings as written in the config file. Unset fields fall
/// back to [`HttpRequestConfig::DEFAULT`].
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
pub struct HttpSettings {
    pub connect_timeout_ms: Option<u64>,
    pub read_timeout_ms: Option<u64>,
    pub verify_ssl_cert: Option<bool>,
}

impl HttpSettings {
    pub fn to_request_config(&self) -> HttpRequestConfig {
        let default = HttpRequestConfig::DEFAULT;
        HttpRequestConfig::with_ssl_verification(
            self.connect_timeout_ms
                .map_or(default.connect_timeout(), Duration::from_millis),
            self.read_timeout_ms
                .map_or(default.read_timeout(), Duration::from_millis),
            self.verify_ssl_cert.unwrap_or(default.verify_ssl_cert()),
        )
    }
}

/// A declared command: its pattern and an optional description.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CommandEntry {
    pub pattern: String,
    pub description: Option<String>,
}

impl Command for CommandEntry {
    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

impl Config {
    /// Effective HTTP request settings.
    pub fn http_request_config(&self) -> HttpRequestConfig {
        self.http.unwrap_or_default().to_request_config()
    }

    pub fn commands(&self) -> &[CommandEntry] {
        self.commands.as_deref().unwrap_or_default()
    }

    /// Completer offering the leading literal of every declared pattern
    /// (e.g. "create stream"), without duplicates, in declaration order.
    /// Patterns that fail to parse are skipped.
    pub fn completer(&self) -> StringsCompleter {
        let mut seen = HashSet::new();
        let prefixes: Vec<String> = self
            .commands()
            .iter()
            .filter_map(|entry| Pattern::parse(&entry.pattern).ok())
            .map(|pattern| pattern.prefix().to_string())
            .filter(|prefix| !prefix.is_empty() && seen.insert(prefix.clone()))
            .collect();
        StringsCompleter::from_strings(prefixes)
    }

    /// Validate the config, collecting every problem found.
    pub fn validate(&self) -> Result<(), crate::config::ConfigError> {
        let mut errors = Vec::new();

        if let Some(http) = &self.http {
            if http.connect_timeout_ms == Some(0) {
                errors.push("http.connect_timeout_ms must be greater than 0".to_string());
            }
            if http.read_timeout_ms == Some(0) {
                errors.push("http.read_timeout_ms must be greater than 0".to_string());
            }
        }

        let mut patterns = HashSet::new();
        for (i, entry) in self.commands().iter().enumerate() {
            if let Err(e) = Pattern::parse(&entry.pattern) {
                errors.push(format!(
                    "commands[{i}]: invalid pattern '{}': {e}",
                    entry.pattern
                ));
            }
            if !patterns.insert(entry.pattern.trim()) {
                errors.push(format!(
                    "commands[{i}]: duplicate pattern '{}'",
                    entry.pattern
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(crate::config::ConfigError::Validation(errors))
        }
    }

    /// Merge two configs. `self` is the base (e.g. global), `other` is the override (e.g. local).
    ///
    /// - http: per-field override (local wins)
    /// - commands: append
    pub fn merge(self, other: Config) -> Config {
        Config {
            http: Self::merge_http(self.http, other.http),
            commands: Self::merge_vecs(self.commands, other.commands),
        }
    }

    fn merge_http(base: Option<HttpSettings>, over: Option<HttpSettings>) -> Option<HttpSettings> {
        match (base, over) {
            (Some(b), Some(o)) => Some(HttpSettings {
                connect_timeout_ms: o.connect_timeout_ms.or(b.connect_timeout_ms),
                read_timeout_ms: o.read_timeout_ms.or(b.read_timeout_ms),
                verify_ssl_cert: o.verify_ssl_cert.or(b.verify_ssl_cert),
            }),
            (b, o) => b.or(o),
        }
    }

    fn merge_vecs<T>(base: Option<Vec<T>>, over: Option<Vec<T>>) -> Option<Vec<T>> {
        match (base, over) {
            (Some(mut b), Some(o)) => {
                b.extend(o);
                Some(b)
            }
            (b, o) => b.or(o),
        }
    }
}

/// Parse a YAML string into a `Config`.
pub fn parse_config(yaml: &str) -> Result<Config, crate::config::ConfigError> {
    let config: Config = serde_saphyr::from_str(yaml)?;
    Ok(config)
}
