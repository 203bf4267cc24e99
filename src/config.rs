use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub metrics: MetricsSettings,
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
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> usize { 10 }
fn default_max_limit() -> usize { 100 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_teaching_match")]
    pub teaching_match: u32,
    #[serde(default = "default_learning_match")]
    pub learning_match: u32,
    #[serde(default = "default_multiple_teaching")]
    pub multiple_teaching: u32,
    #[serde(default = "default_multiple_learning")]
    pub multiple_learning: u32,
    #[serde(default = "default_same_location")]
    pub same_location: u32,
    #[serde(default = "default_nearby_location")]
    pub nearby_location: u32,
    #[serde(default = "default_shared_category")]
    pub shared_category: u32,
    #[serde(default = "default_profile_field")]
    pub profile_field: u32,
    #[serde(default = "default_skill_level")]
    pub skill_level: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            teaching_match: default_teaching_match(),
            learning_match: default_learning_match(),
            multiple_teaching: default_multiple_teaching(),
            multiple_learning: default_multiple_learning(),
            same_location: default_same_location(),
            nearby_location: default_nearby_location(),
            shared_category: default_shared_category(),
            profile_field: default_profile_field(),
            skill_level: default_skill_level(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            teaching_match: config.teaching_match,
            learning_match: config.learning_match,
            multiple_teaching: config.multiple_teaching,
            multiple_learning: config.multiple_learning,
            same_location: config.same_location,
            nearby_location: config.nearby_location,
            shared_category: config.shared_category,
            profile_field: config.profile_field,
            skill_level: config.skill_level,
        }
    }
}

fn default_teaching_match() -> u32 { 30 }
fn default_learning_match() -> u32 { 25 }
fn default_multiple_teaching() -> u32 { 15 }
fn default_multiple_learning() -> u32 { 10 }
fn default_same_location() -> u32 { 20 }
fn default_nearby_location() -> u32 { 10 }
fn default_shared_category() -> u32 { 5 }
fn default_profile_field() -> u32 { 3 }
fn default_skill_level() -> u32 { 8 }

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    #[serde(default = "default_slow_threshold_ms")]
    pub slow_threshold_ms: u64,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            slow_threshold_ms: default_slow_threshold_ms(),
        }
    }
}

fn default_max_entries() -> usize { 1000 }
fn default_slow_threshold_ms() -> u64 { 1000 }

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
fn default_log_format() -> String { "full".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SKILLSWAP_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SKILLSWAP__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("SKILLSWAP")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_match_engine_defaults() {
        let weights = ScoringWeights::from(&WeightsConfig::default());
        assert_eq!(weights, ScoringWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "full");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings: Settings = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.matching.default_limit, 10);
        assert_eq!(settings.matching.max_limit, 100);
        assert_eq!(settings.metrics.max_entries, 1000);
        assert_eq!(settings.scoring_weights(), ScoringWeights::default());
    }

    #[test]
    fn test_partial_weight_override() {
        let settings: Settings = Config::builder()
            .set_override("scoring.weights.teaching_match", 40)
            .unwrap()
            .set_override("matching.max_limit", 50)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        let weights = settings.scoring_weights();
        assert_eq!(weights.teaching_match, 40);
        assert_eq!(weights.learning_match, 25);
        assert_eq!(settings.matching.max_limit, 50);
    }
}
