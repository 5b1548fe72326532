use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    /// JSON file holding the posting catalog
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_domain_bonus")]
    pub domain_bonus: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            domain_bonus: default_domain_bonus(),
        }
    }
}

fn default_domain_bonus() -> f64 { 0.1 }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with INTERN_)
    pub fn load() -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., INTERN__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("catalog.path", "data/internships.json")?
        .set_default("scoring.domain_bonus", default_domain_bonus())
}

fn environment() -> Environment {
    Environment::with_prefix("INTERN")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
