//! CLI configuration using Figment
//!
//! Sources are merged in precedence order (later sources override earlier ones):
//! 1. Default values (hardcoded)
//! 2. `kanban-dnd.toml` in the working directory
//! 3. `kanban-dnd.yaml` in the working directory
//! 4. `KANBAN_DND_*` environment variables
//!
//! Command-line flags are applied on top by the caller.

use crate::cli::OutputFormat;
use figment::{
    providers::{Env, Format, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE_STEM: &str = "kanban-dnd";
const ENV_PREFIX: &str = "KANBAN_DND_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Default output format
    pub format: OutputFormat,
    /// Log level when no verbosity flag is given
    pub log_level: String,
    /// Default board seed file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            log_level: "info".to_string(),
            board: None,
        }
    }
}

impl CliConfig {
    /// Load configuration for a working directory
    pub fn load(dir: &Path) -> Result<Self, figment::Error> {
        let config: Self = Self::figment(dir).extract()?;
        debug!(?config, "loaded configuration");
        Ok(config)
    }

    fn figment(dir: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(dir.join(format!("{CONFIG_FILE_STEM}.toml"))))
            .merge(Yaml::file(dir.join(format!("{CONFIG_FILE_STEM}.yaml"))))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}
