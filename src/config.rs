//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, de};
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000. Both `3000` and `:3000` are accepted.
/// - `DB_HOST` (optional): PostgreSQL host, defaults to `localhost`
/// - `DB_PORT` (optional): PostgreSQL port, defaults to 5432
/// - `DB_USER` (required): PostgreSQL user
/// - `DB_NAME` (required): PostgreSQL database name
/// - `DB_PASSWORD` (required): PostgreSQL password
/// - `DB_MAX_CONNECTIONS` (optional): pool size, defaults to 5
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port", deserialize_with = "listen_port")]
    pub server_port: u16,

    #[serde(default = "default_db_host")]
    pub db_host: String,

    #[serde(default = "default_db_port")]
    pub db_port: u16,

    pub db_user: String,

    pub db_name: String,

    /// Never printed; `Debug` shows `[REDACTED]`.
    pub db_password: SecretString,

    #[serde(default = "default_max_connections")]
    pub db_max_connections: u32,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_max_connections() -> u32 {
    5
}

/// Accept either a bare port (`3000`) or a listen address without host (`:3000`).
fn listen_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim()
        .trim_start_matches(':')
        .parse()
        .map_err(|_| de::Error::custom(format!("invalid server port: {raw}")))
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., DB_USER)
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        Self::from_vars(std::env::vars())
    }

    /// Deserialize configuration from arbitrary `(NAME, value)` pairs.
    ///
    /// Field names are matched case-insensitively: db_user -> DB_USER
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
    }

    /// Assemble PostgreSQL connection options. SSL is always disabled.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(self.db_password.expose_secret())
            .database(&self.db_name)
            .ssl_mode(PgSslMode::Disable)
    }
}
