//! Application configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bomm_mm::QuoterConfig;

use crate::error::{AppError, AppResult};

/// Synthetic feed parameters for paper-trading mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticFeedConfig {
    /// Starting mid-price.
    #[serde(default = "default_start_mid")]
    pub start_mid: Decimal,
    /// Maximum mid move per tick in dollars.
    #[serde(default = "default_step")]
    pub step: Decimal,
    /// RNG seed; fixed seeds replay the same walk.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for SyntheticFeedConfig {
    fn default() -> Self {
        Self {
            start_mid: default_start_mid(),
            step: default_step(),
            seed: default_seed(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Scheduler tick cadence in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Snapshot logging cadence in seconds.
    #[serde(default = "default_stats_interval_secs")]
    pub stats_interval_secs: u64,
    /// Whether the paper venue accepts order batches.
    #[serde(default = "default_batch_execution")]
    pub batch_execution: bool,
    /// Synthetic feed parameters.
    #[serde(default)]
    pub feed: SyntheticFeedConfig,
    /// Quoting session parameters.
    pub quoter: QuoterConfig,
}

impl AppConfig {
    /// Load and validate a TOML config file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {path}: {e}")))?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(AppError::Config(
                "tick_interval_ms must be positive".to_string(),
            ));
        }
        self.quoter.validate()?;
        Ok(())
    }
}

fn default_tick_interval_ms() -> u64 {
    1_000
}
fn default_stats_interval_secs() -> u64 {
    60
}
fn default_batch_execution() -> bool {
    true
}
fn default_start_mid() -> Decimal {
    Decimal::new(50, 2) // 0.50
}
fn default_step() -> Decimal {
    Decimal::new(1, 2) // 0.01
}
fn default_seed() -> u64 {
    42
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_minimal_config_parses_with_defaults() {
        let toml_str = r#"
[quoter]
venue = "paper"
market = "0xcondition"
token = "0xtoken"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tick_interval_ms, 1_000);
        assert!(config.batch_execution);
        assert_eq!(config.feed.start_mid, dec!(0.50));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let toml_str = r#"
tick_interval_ms = 0

[quoter]
venue = "paper"
market = "m"
token = "t"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_quoter_config_rejected() {
        let toml_str = r#"
[quoter]
venue = "paper"
market = "m"
token = "t"
ema_alpha = 2.0
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let toml_str = r#"
tick_interval_ms = 250
batch_execution = false

[feed]
start_mid = 0.40
step = 0.02
seed = 7

[quoter]
venue = "paper"
market = "m"
token = "t"
fair_value_method = "mid_price"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        let rendered = toml::to_string(&config).unwrap();
        let reparsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(reparsed.tick_interval_ms, 250);
        assert_eq!(reparsed.feed.seed, 7);
        assert!(!reparsed.batch_execution);
    }
}
