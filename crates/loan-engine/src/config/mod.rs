use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::decision::{DecisionConfig, InvalidLimits, SegmentModifiers};

/// Distinguishes runtime behavior for different stages of the service.
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

/// Top-level configuration for the decision service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub decision: DecisionConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            decision: load_decision_config()?,
        })
    }
}

/// Read loan limits and segment modifiers, falling back to the product defaults.
pub fn load_decision_config() -> Result<DecisionConfig, ConfigError> {
    let defaults = DecisionConfig::default();

    let config = DecisionConfig {
        minimum_loan_amount: env_u32("LOAN_MINIMUM_AMOUNT", defaults.minimum_loan_amount)?,
        maximum_loan_amount: env_u32("LOAN_MAXIMUM_AMOUNT", defaults.maximum_loan_amount)?,
        minimum_loan_period: env_u32("LOAN_MINIMUM_PERIOD", defaults.minimum_loan_period)?,
        maximum_loan_period: env_u32("LOAN_MAXIMUM_PERIOD", defaults.maximum_loan_period)?,
        life_expectancy: env_u32("LOAN_LIFE_EXPECTANCY", defaults.life_expectancy)?,
        segment_modifiers: SegmentModifiers {
            segment_1: env_u32(
                "LOAN_SEGMENT_1_MODIFIER",
                defaults.segment_modifiers.segment_1,
            )?,
            segment_2: env_u32(
                "LOAN_SEGMENT_2_MODIFIER",
                defaults.segment_modifiers.segment_2,
            )?,
            segment_3: env_u32(
                "LOAN_SEGMENT_3_MODIFIER",
                defaults.segment_modifiers.segment_3,
            )?,
        },
    };

    config.validate().map_err(ConfigError::InvalidLoanLimits)?;
    Ok(config)
}

fn env_u32(key: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str, value: String },
    InvalidLoanLimits(InvalidLimits),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a non-negative integer, got '{value}'")
            }
            ConfigError::InvalidLoanLimits(err) => write!(f, "inconsistent loan limits: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidNumber { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidLoanLimits(err) => Some(err),
        }
    }
}
