use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::duration::deserialize_duration;
use crate::market_data::DEFAULT_PRICE_URL;
use crate::models::{default_tokens, TokenInfo};
use crate::priority::PriorityRule;

fn default_price_url() -> String {
    DEFAULT_PRICE_URL.to_string()
}

fn default_fetch_timeout() -> Duration {
    Duration::from_secs(10)
}

/// Display/output formatting configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Render USD values with thousands separators.
    pub currency_grouping: bool,

    /// Optional currency symbol (e.g. "$") prefixed to USD values.
    pub currency_symbol: Option<String>,
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint returning a flat JSON object of symbol to price.
    #[serde(default = "default_price_url")]
    pub price_url: String,

    /// How long a price request may take before it fails.
    #[serde(
        default = "default_fetch_timeout",
        deserialize_with = "deserialize_duration",
        skip_serializing
    )]
    pub fetch_timeout: Duration,

    /// Holdings file ranked when none is given on the command line.
    /// If relative, resolved from the config file location.
    pub holdings_file: Option<PathBuf>,

    /// Chain priority table.
    #[serde(default)]
    pub priority: PriorityRule,

    #[serde(default)]
    pub display: DisplayConfig,

    /// Tokens offered for swaps.
    #[serde(default = "default_tokens")]
    pub tokens: Vec<TokenInfo>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            price_url: default_price_url(),
            fetch_timeout: default_fetch_timeout(),
            holdings_file: None,
            priority: PriorityRule::default(),
            display: DisplayConfig::default(),
            tokens: default_tokens(),
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load config from a file, or return default config if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn resolve_holdings_file(&self, config_dir: &Path) -> Option<PathBuf> {
        self.holdings_file.as_ref().map(|file| {
            if file.is_absolute() {
                file.clone()
            } else {
                config_dir.join(file)
            }
        })
    }
}

/// Loaded configuration with resolved paths.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfig {
    pub price_url: String,
    #[serde(skip)]
    pub fetch_timeout: Duration,
    pub holdings_file: Option<PathBuf>,
    pub priority: PriorityRule,
    pub display: DisplayConfig,
    pub tokens: Vec<TokenInfo>,
}

impl ResolvedConfig {
    fn from_config(config: Config, config_dir: &Path) -> Self {
        let holdings_file = config.resolve_holdings_file(config_dir);
        Self {
            price_url: config.price_url,
            fetch_timeout: config.fetch_timeout,
            holdings_file,
            priority: config.priority,
            display: config.display,
            tokens: config.tokens,
        }
    }

    /// Load and resolve config from a file path.
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_path = config_path
            .canonicalize()
            .with_context(|| format!("Config file not found: {}", config_path.display()))?;

        let config_dir = config_path
            .parent()
            .context("Config file has no parent directory")?;

        let config = Config::load(&config_path)?;
        Ok(Self::from_config(config, config_dir))
    }

    /// Load config, falling back to defaults if the file doesn't exist.
    pub fn load_or_default(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            return Self::load(config_path);
        }

        let config_dir = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self::from_config(Config::default(), &config_dir))
    }
}

/// Returns the default config file path.
///
/// Resolution order:
/// 1. `./tokenfolio.toml` if it exists in current directory
/// 2. `~/.config/tokenfolio/tokenfolio.toml` (XDG config directory)
pub fn default_config_path() -> PathBuf {
    let local_config = PathBuf::from("tokenfolio.toml");
    if local_config.exists() {
        return local_config;
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("tokenfolio").join("tokenfolio.toml");
    }

    local_config
}
