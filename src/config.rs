//! Configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider configuration
    pub llm: LlmConfig,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Storage configuration
    pub storage: StorageConfig,

    /// Logging configuration
    pub log: LogConfig,
}

impl Config {
    /// Validate configuration before use
    ///
    /// Checks that the active provider's API key environment variable is
    /// set. Call this early in startup to fail fast with clear error
    /// messages.
    pub fn validate(&self) -> Result<()> {
        let llm = self.llm.resolve();
        if std::env::var(&llm.api_key_env).is_err() {
            return Err(eyre::eyre!(
                "LLM API key not found. Set the {} environment variable.",
                llm.api_key_env
            ));
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    ///
    /// The `LLM_PROVIDER` environment variable, when set, overrides the
    /// provider from any config file.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        let mut config = Self::load_inner(config_path)?;

        if let Ok(provider) = std::env::var("LLM_PROVIDER") {
            config.llm.provider = provider
                .parse()
                .map_err(|e| eyre::eyre!("Invalid LLM_PROVIDER environment variable: {}", e))?;
        }

        Ok(config)
    }

    fn load_inner(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .vitrina.yml
        let local_config = PathBuf::from(".vitrina.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/vitrina/vitrina.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("vitrina").join("vitrina.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Supported LLM providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Openai,
    Anthropic,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Openai => write!(f, "openai"),
            Self::Anthropic => write!(f, "anthropic"),
        }
    }
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Self::Openai),
            "anthropic" => Ok(Self::Anthropic),
            _ => Err(format!("Unknown provider: {}. Use: openai or anthropic", s)),
        }
    }
}

/// LLM provider configuration
///
/// `model`, `api-key-env`, and `base-url` default per provider when left
/// unset; see [`LlmConfig::resolve`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider selector
    pub provider: Provider,

    /// Model identifier
    pub model: Option<String>,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: Option<String>,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: Option<String>,

    /// Maximum tokens per response
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// Sampling temperature (sent to OpenAI-style endpoints only)
    pub temperature: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: Provider::Openai,
            model: None,
            api_key_env: None,
            base_url: None,
            max_tokens: 1000,
            timeout_ms: 30_000,
            temperature: 0.7,
        }
    }
}

impl LlmConfig {
    /// Fill unset fields with the active provider's defaults
    pub fn resolve(&self) -> ResolvedLlmConfig {
        let (model, api_key_env, base_url) = match self.provider {
            Provider::Openai => ("gpt-4", "OPENAI_API_KEY", "https://api.openai.com"),
            Provider::Anthropic => ("claude-3-opus-20240229", "ANTHROPIC_API_KEY", "https://api.anthropic.com"),
        };

        ResolvedLlmConfig {
            provider: self.provider,
            model: self.model.clone().unwrap_or_else(|| model.to_string()),
            api_key_env: self.api_key_env.clone().unwrap_or_else(|| api_key_env.to_string()),
            base_url: self.base_url.clone().unwrap_or_else(|| base_url.to_string()),
            max_tokens: self.max_tokens,
            timeout_ms: self.timeout_ms,
            temperature: self.temperature,
        }
    }
}

/// LLM configuration with all provider defaults applied
#[derive(Debug, Clone)]
pub struct ResolvedLlmConfig {
    pub provider: Provider,
    pub model: String,
    pub api_key_env: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub timeout_ms: u64,
    pub temperature: f64,
}

impl ResolvedLlmConfig {
    /// Read the API key from the configured environment variable
    pub fn get_api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env)
            .map_err(|_| eyre::eyre!("API key not found in environment variable {}", self.api_key_env))
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database path
    #[serde(rename = "db-path")]
    pub db_path: PathBuf,

    /// Directory for uploaded product photos
    #[serde(rename = "upload-dir")]
    pub upload_dir: PathBuf,

    /// Maximum accepted photo size in megabytes
    #[serde(rename = "max-upload-mb")]
    pub max_upload_mb: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        // Use XDG data directory (~/.local/share/vitrina on Linux)
        let data_dir = dirs::data_dir()
            .map(|d| d.join("vitrina"))
            .unwrap_or_else(|| PathBuf::from(".vitrina"));

        Self {
            db_path: data_dir.join("catalog.db3"),
            upload_dir: data_dir.join("uploads"),
            max_upload_mb: 5,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file path; logs go to stdout when unset
    pub file: Option<PathBuf>,

    /// Default tracing filter (overridden by RUST_LOG)
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: "info".to_string(),
        }
    }
}
