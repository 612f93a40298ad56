use crate::domain::ValidationMode;
use crate::service::ListingPolicy;
use std::collections::HashMap;
use std::net::IpAddr;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_path: String,
    pub pricing: PricingPolicy,
}

/// Knobs that change how pricing documents are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingPolicy {
    pub validation: ValidationMode,
    pub listing: ListingPolicy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let host = env_map
            .get("HOST")
            .map(|s| s.as_str())
            .unwrap_or("127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|_| {
                ConfigError::InvalidValue("HOST".to_string(), "must be an IP address".to_string())
            })?;

        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8000")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("DATABASE_PATH".to_string()))?;

        let validation = match env_map
            .get("PRICING_VALIDATION")
            .map(|s| s.as_str())
            .unwrap_or("permissive")
        {
            "permissive" => ValidationMode::Permissive,
            "strict" => ValidationMode::Strict,
            other => {
                return Err(ConfigError::InvalidValue(
                    "PRICING_VALIDATION".to_string(),
                    format!("must be permissive or strict, got {}", other),
                ))
            }
        };

        let listing = match env_map
            .get("PRICING_LISTING_POLICY")
            .map(|s| s.as_str())
            .unwrap_or("skip")
        {
            "skip" => ListingPolicy::SkipInvalid,
            "abort" => ListingPolicy::Abort,
            other => {
                return Err(ConfigError::InvalidValue(
                    "PRICING_LISTING_POLICY".to_string(),
                    format!("must be skip or abort, got {}", other),
                ))
            }
        };

        Ok(Config {
            host,
            port,
            database_path,
            pricing: PricingPolicy {
                validation,
                listing,
            },
        })
    }
}
