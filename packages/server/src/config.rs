use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CorsConfig {
    #[serde(default)]
    pub allow_origins: Vec<String>,
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
}

fn default_cors_max_age() -> u64 {
    3600
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Connection string. `sqlite://...` for the embedded store,
    /// `postgres://...` for a networked one.
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Minutes of inactivity before a session expires. Default: 60.
    #[serde(default = "default_expiry_minutes")]
    pub expiry_minutes: i64,
    /// Mark the session cookie `Secure`. Default: false.
    #[serde(default)]
    pub secure: bool,
    /// Seconds between sweeps of expired sessions. Default: 60.
    #[serde(default = "default_cleanup_interval_secs")]
    pub cleanup_interval_secs: u64,
}

fn default_expiry_minutes() -> i64 {
    60
}
fn default_cleanup_interval_secs() -> u64 {
    60
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            expiry_minutes: default_expiry_minutes(),
            secure: false,
            cleanup_interval_secs: default_cleanup_interval_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("QUIZ_CONFIG").unwrap_or_else(|_| "config/config".to_string());

        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite://quiz.sqlite?mode=rwc")?
            .set_default("database.max_connections", 10_i64)?
            .set_default("session.expiry_minutes", 60_i64)?
            .set_default("session.secure", false)?
            .set_default("session.cleanup_interval_secs", 60_i64)?
            // Load from config/config.toml
            .add_source(File::with_name(&config_path).required(false))
            // Override from environment (e.g., QUIZ__SERVER__PORT)
            .add_source(Environment::with_prefix("QUIZ").separator("__"))
            // The conventional variable wins over everything else.
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .build()?;

        s.try_deserialize()
    }
}
