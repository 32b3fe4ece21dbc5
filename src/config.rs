//! Runtime configuration from environment variables.
//!
//! Gameplay is fixed at compile time; only operational knobs are read here.
//! Unset, empty, or unparsable values fall back to defaults.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::input::{WorkerConfig, DEFAULT_KEY_RELEASE_TIMEOUT_MS, DEFAULT_POLL_MS};

pub const DEFAULT_LOG_FILE: &str = "logs/tui-fps.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `TUI_FPS_LOG_FILE`
    pub log_file: PathBuf,
    /// `TUI_FPS_KEY_RELEASE_MS`
    pub key_release_timeout_ms: u64,
    /// `TUI_FPS_POLL_MS`
    pub poll_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            poll_ms: DEFAULT_POLL_MS,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Build from an arbitrary variable lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |k: &str| {
            lookup(k)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let log_file = non_empty("TUI_FPS_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_file);
        let key_release_timeout_ms = non_empty("TUI_FPS_KEY_RELEASE_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.key_release_timeout_ms);
        let poll_ms = non_empty("TUI_FPS_POLL_MS")
            .and_then(|s| s.parse().ok())
            .filter(|v| *v > 0)
            .unwrap_or(defaults.poll_ms);

        Self {
            log_file,
            key_release_timeout_ms,
            poll_ms,
        }
    }

    /// Input worker settings. Release timeouts only apply when the terminal
    /// cannot report key releases.
    pub fn worker_config(&self, key_release_events: bool) -> WorkerConfig {
        WorkerConfig {
            poll_interval: Duration::from_millis(self.poll_ms),
            release_timeout_ms: if key_release_events {
                None
            } else {
                Some(self.key_release_timeout_ms)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn reads_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("TUI_FPS_LOG_FILE", "/tmp/fps.log"),
            ("TUI_FPS_KEY_RELEASE_MS", "300"),
            ("TUI_FPS_POLL_MS", "5"),
        ]));
        assert_eq!(cfg.log_file, PathBuf::from("/tmp/fps.log"));
        assert_eq!(cfg.key_release_timeout_ms, 300);
        assert_eq!(cfg.poll_ms, 5);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = Config::from_lookup(lookup(&[
            ("TUI_FPS_LOG_FILE", "   "),
            ("TUI_FPS_KEY_RELEASE_MS", "soon"),
            ("TUI_FPS_POLL_MS", "0"),
        ]));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn release_events_disable_timeout() {
        let cfg = Config::default();
        assert_eq!(cfg.worker_config(true).release_timeout_ms, None);
        assert_eq!(
            cfg.worker_config(false).release_timeout_ms,
            Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS)
        );
    }
}
