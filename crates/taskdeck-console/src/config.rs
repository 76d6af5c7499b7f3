/*
[INPUT]:  Built-in defaults, YAML config file, TASKDECK_* environment
[OUTPUT]: Layered console configuration and a ready WorkflowClient builder
[POS]:    Configuration layer - console setup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use taskdeck_adapter::{ClientConfig, DEFAULT_BASE_URL, WorkflowClient};

const DEFAULT_TIMEOUT_SECS: i64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: i64 = 10;
const DEFAULT_PER_PAGE: i64 = 25;

/// Console configuration.
///
/// Sources layer in order: built-in defaults, the YAML file, environment
/// variables prefixed `TASKDECK_`, then CLI flags applied by the caller.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleConfig {
    /// Backend base URL including the API prefix, e.g.
    /// `https://workflow.example.org/v1.0`.
    pub base_url: String,
    /// Bearer token attached to every request when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Page size for the open-task listing.
    pub per_page: u32,
}

impl ConsoleConfig {
    /// Default config file location: `<user config dir>/taskdeck/config.yaml`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("taskdeck")
            .join("config.yaml")
    }

    /// Load configuration, layering defaults, the file at `path` (optional)
    /// and the `TASKDECK_*` environment.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let settings = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("connect_timeout_secs", DEFAULT_CONNECT_TIMEOUT_SECS)?
            .set_default("per_page", DEFAULT_PER_PAGE)?
            .add_source(File::from(path).format(FileFormat::Yaml).required(false))
            .add_source(Environment::with_prefix("TASKDECK"))
            .build()
            .with_context(|| format!("loading configuration from {}", path.display()))?;
        Ok(settings.try_deserialize()?)
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn write_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let rendered = serde_yaml::to_string(self)?;
        std::fs::write(path, rendered)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Build the API client this configuration describes.
    pub fn client(&self) -> taskdeck_adapter::Result<WorkflowClient> {
        let client_config = ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        };
        let mut client = WorkflowClient::with_config_and_base_url(client_config, &self.base_url)?;
        if let Some(token) = &self.api_token {
            client.set_api_token(token.clone());
        }
        Ok(client)
    }
}
