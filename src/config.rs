use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::{RankingPolicy, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub knowledge_base: KnowledgeBaseSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Origins allowed to call the API; empty means any origin
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_allowed_origins() -> Vec<String> { vec!["http://localhost:3000".to_string()] }

#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeBaseSettings {
    #[serde(default = "default_knowledge_base_path")]
    pub path: String,
}

impl Default for KnowledgeBaseSettings {
    fn default() -> Self {
        Self {
            path: default_knowledge_base_path(),
        }
    }
}

fn default_knowledge_base_path() -> String { "data/bra_fitting_data.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
    #[serde(default = "default_confidence_floor")]
    pub confidence_floor: f64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            confidence_floor: default_confidence_floor(),
        }
    }
}

impl From<&MatchingSettings> for RankingPolicy {
    fn from(settings: &MatchingSettings) -> Self {
        Self {
            similarity_threshold: settings.similarity_threshold,
            confidence_floor: settings.confidence_floor,
        }
    }
}

fn default_similarity_threshold() -> f64 { 0.3 }
fn default_confidence_floor() -> f64 { 0.1 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_measured_numeric_weight")]
    pub measured_numeric: f64,
    #[serde(default = "default_measured_lexical_weight")]
    pub measured_lexical: f64,
    #[serde(default = "default_unmeasured_lexical_weight")]
    pub unmeasured_lexical: f64,
    #[serde(default = "default_unmeasured_numeric_weight")]
    pub unmeasured_numeric: f64,
    #[serde(default = "default_underbust_tolerance")]
    pub underbust_tolerance: f64,
    #[serde(default = "default_overbust_tolerance")]
    pub overbust_tolerance: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            measured_numeric: default_measured_numeric_weight(),
            measured_lexical: default_measured_lexical_weight(),
            unmeasured_lexical: default_unmeasured_lexical_weight(),
            unmeasured_numeric: default_unmeasured_numeric_weight(),
            underbust_tolerance: default_underbust_tolerance(),
            overbust_tolerance: default_overbust_tolerance(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            measured_numeric: config.measured_numeric,
            measured_lexical: config.measured_lexical,
            unmeasured_lexical: config.unmeasured_lexical,
            unmeasured_numeric: config.unmeasured_numeric,
            underbust_tolerance: config.underbust_tolerance,
            overbust_tolerance: config.overbust_tolerance,
        }
    }
}

fn default_measured_numeric_weight() -> f64 { 0.6 }
fn default_measured_lexical_weight() -> f64 { 0.4 }
fn default_unmeasured_lexical_weight() -> f64 { 0.8 }
fn default_unmeasured_numeric_weight() -> f64 { 0.2 }
fn default_underbust_tolerance() -> f64 { 2.0 }
fn default_overbust_tolerance() -> f64 { 3.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl LoggingSettings {
    /// Let `LOG_LEVEL` and `LOG_FORMAT` override the configured values
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(std::env::var("LOG_LEVEL").ok(), std::env::var("LOG_FORMAT").ok())
    }

    fn with_overrides(self, level: Option<String>, format: Option<String>) -> Self {
        Self {
            level: level.unwrap_or(self.level),
            format: format.unwrap_or(self.format),
        }
    }

    pub fn is_pretty(&self) -> bool {
        self.format == "pretty"
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with BRAFIT__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., BRAFIT__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        let settings = apply_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    pub fn ranking_policy(&self) -> RankingPolicy {
        RankingPolicy::from(&self.matching)
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("BRAFIT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply the short-form environment overrides
///
/// `BRAFIT_KNOWLEDGE_BASE` points the service at another knowledge base file
/// without spelling out the nested key.
fn apply_overrides(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(path) = std::env::var("BRAFIT_KNOWLEDGE_BASE") {
        builder = builder.set_override("knowledge_base.path", path)?;
    }

    builder.build()
}
