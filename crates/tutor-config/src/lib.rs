//! Environment-based configuration for the tutor services.
//!
//! All credentials come from the environment and are checked once at startup;
//! a missing credential is fatal and the process refuses to initialize.

use std::env;

use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set. Please configure it as an environment variable.")]
    MissingVar(&'static str),

    #[error("Invalid value for {var}: {value}")]
    InvalidVar { var: &'static str, value: String },
}

const DEFAULT_HOST: &str = "0.0.0.0";

type Lookup<'a> = &'a dyn Fn(&'static str) -> Option<String>;

fn env_lookup(var: &'static str) -> Option<String> {
    env::var(var).ok()
}

/// Configuration for the assignment generation service.
#[derive(Debug)]
pub struct AssignmentConfig {
    pub host: String,
    pub port: u16,
    pub google_api_key: String,
    pub gemini_model: String,
}

impl AssignmentConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env_lookup)
    }

    fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        Ok(Self {
            host: host_from(lookup),
            port: port_from(lookup, 8000)?,
            google_api_key: required(lookup, "GOOGLE_API_KEY")?,
            gemini_model: lookup("GEMINI_MODEL")
                .unwrap_or_else(|| "gemini-1.5-pro".to_string()),
        })
    }
}

/// Configuration for the student query routing service.
#[derive(Debug)]
pub struct QueryConfig {
    pub host: String,
    pub port: u16,
    pub google_api_key: String,
    pub wolfram_app_id: String,
    pub gemini_model: String,
}

impl QueryConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env_lookup)
    }

    fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        Ok(Self {
            host: host_from(lookup),
            port: port_from(lookup, 8001)?,
            google_api_key: required(lookup, "GOOGLE_API_KEY")?,
            wolfram_app_id: required(lookup, "WOLFRAM_ALPHA_APPID")?,
            gemini_model: lookup("GEMINI_MODEL")
                .unwrap_or_else(|| "gemini-1.5-flash".to_string()),
        })
    }
}

fn required(lookup: Lookup, var: &'static str) -> Result<String, ConfigError> {
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(var)),
    }
}

fn host_from(lookup: Lookup) -> String {
    lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string())
}

fn port_from(lookup: Lookup, default: u16) -> Result<u16, ConfigError> {
    match lookup("PORT") {
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidVar {
            var: "PORT",
            value,
        }),
        None => Ok(default),
    }
}
