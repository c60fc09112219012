use crate::listings::FilterMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

pub const CONFIG_PATH_VAR: &str = "ADDIS_SCOUT_CONFIG";
pub const CONTACT_DELAY_VAR: &str = "ADDIS_SCOUT_CONTACT_DELAY_MS";

/// Startup settings for a browsing session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Listings already saved when the session starts
    pub initial_saved_ids: Vec<String>,
    /// Simulated latency of the contact-agent form
    pub contact_delay_ms: u64,
    /// Screens remembered for back navigation
    pub history_limit: usize,
    pub filter_mode: FilterMode,
    /// Used when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_saved_ids: vec!["2".to_string(), "4".to_string()],
            contact_delay_ms: 1000,
            history_limit: 32,
            filter_mode: FilterMode::Strict,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from `path`, else from the file named by `ADDIS_SCOUT_CONFIG`,
    /// else defaults. Environment overrides are applied last.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let path: Option<PathBuf> = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from));

        let mut config = match path {
            Some(path) => Self::from_file(&path).await?,
            None => {
                debug!("No config file given, using defaults");
                Self::default()
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub async fn from_file(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("⚙️  Loaded config from {}", path.display());
        Ok(config)
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(CONTACT_DELAY_VAR) {
            self.contact_delay_ms = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a number of milliseconds", CONTACT_DELAY_VAR))?;
            debug!("Contact delay overridden to {} ms", self.contact_delay_ms);
        }
        Ok(())
    }

    pub fn contact_delay(&self) -> Duration {
        Duration::from_millis(self.contact_delay_ms)
    }
}
