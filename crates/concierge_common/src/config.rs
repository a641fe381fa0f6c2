//! Engine configuration.
//!
//! Resolved once at startup and injected at pipeline construction; the
//! engine never reads ambient environment at call time.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Where discovery queries are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    /// Local pipeline only; the remote ranker is never called.
    Local,
    /// Remote ranker first, transparent local fallback on any failure.
    Ai,
}

impl Default for DispatchMode {
    fn default() -> Self {
        Self::Local
    }
}

impl std::str::FromStr for DispatchMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "ai" => Ok(Self::Ai),
            other => anyhow::bail!("unknown dispatch mode '{other}' (expected 'local' or 'ai')"),
        }
    }
}

/// Concierge engine configuration, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConciergeConfig {
    pub mode: DispatchMode,
    /// Base URL of the remote ranking service.
    pub remote_url: String,
    /// Transport-level timeout for the single remote call.
    pub remote_timeout_secs: u64,
    /// Shortlist size when the caller does not specify one.
    pub default_limit: usize,
}

impl Default for ConciergeConfig {
    fn default() -> Self {
        Self {
            mode: DispatchMode::Local,
            remote_url: "http://127.0.0.1:8787".to_string(),
            remote_timeout_secs: 8,
            default_limit: 5,
        }
    }
}

impl ConciergeConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("failed to parse concierge config")
    }

    pub fn load(path: &std::path::Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_defaults_are_local_mode() {
        let config = ConciergeConfig::default();
        assert_eq!(config.mode, DispatchMode::Local);
        assert_eq!(config.default_limit, 5);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = ConciergeConfig::from_toml_str("mode = \"ai\"").unwrap();
        assert_eq!(config.mode, DispatchMode::Ai);
        assert_eq!(config.remote_timeout_secs, 8);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(DispatchMode::from_str("AI").unwrap(), DispatchMode::Ai);
        assert_eq!(DispatchMode::from_str("local").unwrap(), DispatchMode::Local);
        assert!(DispatchMode::from_str("hybrid").is_err());
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(ConciergeConfig::from_toml_str("mode = \"quantum\"").is_err());
    }
}
