use anyhow::{Context, Result, anyhow};
use dotenvy::dotenv;
use std::env;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub port: u16,
    /// Full connection URL. When unset, `db` is used instead.
    pub db_url: Option<String>,
    pub db: DatabaseDescriptor,
}

/// Connection parameters read from `DB_*` variables
#[derive(Debug, Clone, Default)]
pub struct DatabaseDescriptor {
    pub prefix: String,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok(); // Load from .env file if available
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };
        let db_port = lookup("DB_PORT")
            .map(|raw| {
                raw.parse()
                    .with_context(|| format!("DB_PORT must be a valid port number, got {raw:?}"))
            })
            .transpose()?;

        let config = Config {
            app_name: lookup("APP_NAME").unwrap_or_else(|| "warehouse-api".to_string()),
            port,
            db_url: lookup("DB_URL"),
            db: DatabaseDescriptor {
                prefix: lookup("DB_PREFIX").unwrap_or_else(|| "mysql".to_string()),
                host: lookup("DB_HOST"),
                port: db_port,
                user: lookup("DB_USER"),
                password: lookup("DB_PASSWORD"),
                name: lookup("DB_NAME"),
            },
        };

        // Fail at start-up rather than on the first query
        config.database_url()?;
        Ok(config)
    }

    pub fn database_url(&self) -> Result<String> {
        if let Some(url) = &self.db_url {
            return Ok(url.clone());
        }
        self.db.url()
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            app_name: "warehouse-api-test".to_string(),
            port: DEFAULT_PORT,
            db_url: Some("sqlite::memory:".to_string()),
            db: DatabaseDescriptor::default(),
        }
    }
}

impl DatabaseDescriptor {
    fn default_port(&self) -> u16 {
        if self.prefix == "mysql" { 3306 } else { 5432 }
    }

    pub fn url(&self) -> Result<String> {
        let required = |value: &Option<String>, key: &str| {
            value
                .clone()
                .ok_or_else(|| anyhow!("{key} must be set when DB_URL is not"))
        };

        Ok(format!(
            "{}://{}:{}@{}:{}/{}",
            self.prefix,
            required(&self.user, "DB_USER")?,
            required(&self.password, "DB_PASSWORD")?,
            required(&self.host, "DB_HOST")?,
            self.port.unwrap_or_else(|| self.default_port()),
            required(&self.name, "DB_NAME")?,
        ))
    }
}
