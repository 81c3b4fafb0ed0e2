use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub stage: StageConfig,
}

/// Extraction tuning configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    /// Ceiling on individual source-file size. Oversized files are rejected
    /// before any pattern matching runs (bounds worst-case rescanning cost).
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: default_max_file_bytes(),
        }
    }
}

/// Staging configuration (where the renderer picks up its data blob)
#[derive(Debug, Clone, Deserialize)]
pub struct StageConfig {
    #[serde(default = "default_stage_output")]
    pub output_path: PathBuf,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            output_path: default_stage_output(),
        }
    }
}

fn default_max_file_bytes() -> u64 {
    1024 * 1024
}

fn default_stage_output() -> PathBuf {
    PathBuf::from("public/temp-data.json")
}

impl Config {
    /// Load configuration.
    ///
    /// Looks for a config file in this order:
    /// 1. Path specified in AGENTGRAPH_CONFIG environment variable
    /// 2. ./agentgraph.toml in current directory
    ///
    /// A missing file is not an error unless AGENTGRAPH_CONFIG names it
    /// explicitly: the tool runs with built-in defaults and zero setup.
    pub fn load() -> Result<Self> {
        let (config_path, explicit) = match std::env::var("AGENTGRAPH_CONFIG") {
            Ok(p) => (PathBuf::from(p), true),
            Err(_) => (PathBuf::from("agentgraph.toml"), false),
        };

        let config = if config_path.exists() {
            Self::load_from(&config_path)?
        } else if explicit {
            anyhow::bail!(
                "Config file not found: {} (set via AGENTGRAPH_CONFIG)",
                config_path.display()
            );
        } else {
            Config::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.extract.max_file_bytes == 0 {
            anyhow::bail!("extract.max_file_bytes must be greater than 0");
        }
        Ok(())
    }

    /// Get the staging output path
    pub fn stage_output(&self) -> &Path {
        &self.stage.output_path
    }
}
