//! Application configuration loaded once at startup.

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Deployment environment, selected from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Parses the value of `APP_ENV`; unset means development.
    pub fn parse(value: Option<&str>) -> Result<Self, ConfigError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::Development),
            Some(v) if v.eq_ignore_ascii_case("development") => Ok(Self::Development),
            Some(v) if v.eq_ignore_ascii_case("production") => Ok(Self::Production),
            Some(v) => Err(ConfigError::InvalidEnvVar {
                name: "APP_ENV".to_string(),
                value: v.to_string(),
            }),
        }
    }

    /// Production reads configuration from the process environment only.
    pub fn loads_env_file(self) -> bool {
        self == Self::Development
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(self) -> &'static str {
        match self {
            Self::Development => "iluvcoffee=debug,tower_http=debug,info",
            Self::Production => "info",
        }
    }
}

pub struct Config {
    pub environment: Environment,

    pub database_url: String,
    pub database_logging: bool,

    pub bind_address: String,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// In development a `.env` file is loaded first, if present.
    pub fn from_env() -> Result<Self, AppError> {
        let environment = Environment::parse(std::env::var("APP_ENV").ok().as_deref())?;

        if environment.loads_env_file() {
            dotenvy::dotenv().ok();
        }

        Self::from_vars(environment, |key| std::env::var(key).ok())
    }

    /// Builds the configuration from a variable lookup function.
    ///
    /// # Arguments
    /// - `environment` - Already-selected deployment environment
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or invalid
    pub fn from_vars<F>(environment: Environment, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let database_logging = match lookup("DATABASE_LOGGING") {
            None => false,
            Some(value) => value.parse::<bool>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "DATABASE_LOGGING".to_string(),
                value,
            })?,
        };

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Self {
            environment,
            database_url,
            database_logging,
            bind_address,
        })
    }
}
