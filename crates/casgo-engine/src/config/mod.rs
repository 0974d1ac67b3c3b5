use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// Longest savings horizon accepted for net present value.
pub const MAX_ANALYSIS_YEARS: u32 = 100;

/// Distinguishes runtime behavior for different stages of the advisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub engine: EngineConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = EngineConfig::default();

        let discount_rate = match env::var("CASGO_DISCOUNT_RATE") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|rate| rate.is_finite() && *rate > -1.0)
                .ok_or(ConfigError::InvalidDiscountRate(raw))?,
            Err(_) => defaults.discount_rate,
        };

        let analysis_years = match env::var("CASGO_ANALYSIS_YEARS") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|years| (1..=MAX_ANALYSIS_YEARS).contains(years))
                .ok_or(ConfigError::InvalidAnalysisYears(raw))?,
            Err(_) => defaults.analysis_years,
        };

        let max_recommendations = match env::var("CASGO_MAX_RECOMMENDATIONS") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit >= 1)
                .ok_or(ConfigError::InvalidMaxRecommendations(raw))?,
            Err(_) => defaults.max_recommendations,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            engine: EngineConfig {
                discount_rate,
                analysis_years,
                max_recommendations,
            },
        })
    }
}

/// Financial modeling constants and ranking limits shared by every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Annual rate applied when discounting future savings.
    pub discount_rate: f64,
    /// Number of years of savings counted toward net present value.
    pub analysis_years: u32,
    /// Upper bound on the ranked recommendations returned per profile.
    pub max_recommendations: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            discount_rate: 0.07,
            analysis_years: 10,
            max_recommendations: 8,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidDiscountRate(String),
    InvalidAnalysisYears(String),
    InvalidMaxRecommendations(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDiscountRate(raw) => write!(
                f,
                "CASGO_DISCOUNT_RATE must be a finite number above -1 (got '{}')",
                raw
            ),
            ConfigError::InvalidAnalysisYears(raw) => write!(
                f,
                "CASGO_ANALYSIS_YEARS must be a whole number from 1 to {} (got '{}')",
                MAX_ANALYSIS_YEARS, raw
            ),
            ConfigError::InvalidMaxRecommendations(raw) => write!(
                f,
                "CASGO_MAX_RECOMMENDATIONS must be a positive whole number (got '{}')",
                raw
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("CASGO_DISCOUNT_RATE");
        env::remove_var("CASGO_ANALYSIS_YEARS");
        env::remove_var("CASGO_MAX_RECOMMENDATIONS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.engine, EngineConfig::default());
    }

    #[test]
    fn reads_engine_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        env::set_var("CASGO_DISCOUNT_RATE", "0.05");
        env::set_var("CASGO_ANALYSIS_YEARS", "15");
        env::set_var("CASGO_MAX_RECOMMENDATIONS", "5");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.engine.discount_rate, 0.05);
        assert_eq!(config.engine.analysis_years, 15);
        assert_eq!(config.engine.max_recommendations, 5);
    }

    #[test]
    fn rejects_zero_recommendation_limit() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("CASGO_MAX_RECOMMENDATIONS", "0");
        let result = AppConfig::load();
        reset_env();

        match result {
            Err(ConfigError::InvalidMaxRecommendations(raw)) => assert_eq!(raw, "0"),
            other => panic!("expected invalid limit error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_analysis_horizon_beyond_cap() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("CASGO_ANALYSIS_YEARS", "4000000000");
        let result = AppConfig::load();
        env::set_var("CASGO_ANALYSIS_YEARS", "100");
        let at_cap = AppConfig::load();
        reset_env();

        match result {
            Err(ConfigError::InvalidAnalysisYears(raw)) => assert_eq!(raw, "4000000000"),
            other => panic!("expected invalid horizon error, got {other:?}"),
        }
        assert_eq!(at_cap.expect("cap is accepted").engine.analysis_years, MAX_ANALYSIS_YEARS);
    }

    #[test]
    fn rejects_non_numeric_discount_rate() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("CASGO_DISCOUNT_RATE", "seven percent");
        let result = AppConfig::load();
        reset_env();

        assert!(matches!(result, Err(ConfigError::InvalidDiscountRate(_))));
    }
}
