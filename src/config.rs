use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::graph::ANEMIA;
use crate::report::DEFAULT_SEPARATOR;
use crate::search::Strategy;

/// Config file looked up in the current directory when `KBDIAG_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "kbdiag.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub knowledge_base: KnowledgeBaseConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Diagnostic agent configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Diagnosis node every search tries to reach.
    #[serde(default = "default_goal")]
    pub goal: String,
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            goal: default_goal(),
            strategy: Strategy::default(),
            log_level: default_log_level(),
        }
    }
}

/// Knowledge base source. The built-in anemia graph is used when `path` is unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KnowledgeBaseConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Report output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            separator: default_separator(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

fn default_goal() -> String {
    ANEMIA.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Config {
    /// Load configuration
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for the config file in this order:
    /// 1. Path specified in KBDIAG_CONFIG environment variable (must exist)
    /// 2. ./kbdiag.toml in current directory (optional; defaults otherwise)
    pub fn load() -> Result<Self> {
        let _ = dotenv::dotenv();

        let config = match std::env::var("KBDIAG_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(&path)?
                } else {
                    Config::default()
                }
            }
        };

        config.validate()?;

        Ok(config)
    }

    /// Read and parse a config file without validating it
    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.agent.goal.trim().is_empty() {
            anyhow::bail!("agent.goal must not be empty");
        }

        if self.report.separator.is_empty() {
            anyhow::bail!("report.separator must not be empty");
        }

        if let Some(path) = &self.knowledge_base.path {
            if !path.exists() {
                anyhow::bail!(
                    "knowledge_base.path does not exist: {}. Remove it to use the built-in anemia knowledge base.",
                    path.display()
                );
            }
            if !path.is_file() {
                anyhow::bail!(
                    "knowledge_base.path must be a file, not a directory: {}",
                    path.display()
                );
            }
        }

        Ok(())
    }

    /// Get the knowledge base path, if one is configured
    pub fn knowledge_base_path(&self) -> Option<&Path> {
        self.knowledge_base.path.as_deref()
    }
}
