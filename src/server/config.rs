use dioxus_logger::tracing::Level;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CORS_ORIGIN: &str = "*";

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Value of the `Access-Control-Allow-Origin` header, `*` for any origin.
    pub cors_origin: String,

    pub log_level: Level,
    pub seed_database: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|e| invalid("PORT", &value, e))?,
            None => DEFAULT_PORT,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => value
                .parse::<Level>()
                .map_err(|e| invalid("LOG_LEVEL", &value, e))?,
            None => Level::INFO,
        };

        let seed_database = match lookup("SEED_DATABASE").as_deref() {
            None | Some("") | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => return Err(invalid("SEED_DATABASE", other, "expected true or false").into()),
        };

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            cors_origin: lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            log_level,
            seed_database,
        })
    }

    /// Address the HTTP listener binds to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn invalid(name: &str, value: &str, reason: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
