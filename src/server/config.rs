use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
        })
    }

    /// Address the HTTP listener binds to, as `host:port`.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
