use anyhow::{Context, anyhow};
use chrono_tz::Tz;
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub db_max_connections: u32,

    /// Zone used for every server-generated timestamp
    pub timezone: Tz,

    // Rate limiting
    pub rate_per_min: u32,

    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from `lookup`, which returns a variable's value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            server_addr: lookup("SERVER_ADDR").unwrap_or_else(|| "127.0.0.1:5000".to_string()),
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://worked_hours.db?mode=rwc".to_string()),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), 5)?,
            timezone: parse_timezone(lookup("TIMEZONE"))?,
            rate_per_min: parse_var("RATE_PER_MIN", lookup("RATE_PER_MIN"), 1000)?,
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
        })
    }
}

fn parse_timezone(raw: Option<String>) -> anyhow::Result<Tz> {
    match raw {
        Some(name) => Tz::from_str(name.trim())
            .map_err(|e| anyhow!("TIMEZONE `{name}` is not a known zone: {e}")),
        None => Ok(chrono_tz::America::New_York),
    }
}

fn parse_var<T>(name: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got `{raw}`")),
        None => Ok(default),
    }
}
