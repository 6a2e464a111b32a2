use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Collaborator endpoint settings, read from a `lectern.toml` next to the
/// binary or from `LECTERN_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ProviderConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading provider config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing provider config {}", path.display()))
    }

    /// Environment fallback: `LECTERN_API_URL` (required),
    /// `LECTERN_TIMEOUT_MS`, `LECTERN_USER_AGENT`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("LECTERN_API_URL")
            .context("LECTERN_API_URL is not set and no config file was given")?;
        let timeout_ms = std::env::var("LECTERN_TIMEOUT_MS").ok().and_then(|s| s.parse().ok());
        let user_agent = std::env::var("LECTERN_USER_AGENT").ok();
        Ok(Self { base_url, timeout_ms, user_agent })
    }

    /// Explicit path wins; otherwise a `lectern.toml` in the working
    /// directory; otherwise the environment.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default = Path::new("lectern.toml");
        if default.exists() {
            return Self::load(default);
        }
        Self::from_env()
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms.unwrap_or(15_000)
    }
}
