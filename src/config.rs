use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use config; // Explicitly import the config crate

#[derive(Debug, Deserialize, Clone)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub web: WebConfig,
    // These fields are populated from the .env file
    pub database_path: String,
    pub upload_path: String,
    pub background_path: String,
    pub log_level: String,
    pub session_secret_key: String,
    pub use_secure_cookies: bool,
}

impl Config {
    pub fn from_env(env_path: &Path) -> Result<Self, config::ConfigError> {
        dotenvy::from_path(env_path)
            .map_err(|e| config::ConfigError::Message(format!(
                "FATAL: Failed to load .env file from '{}'. Error: {}", env_path.display(), e
            )))?;

        let database_path = env::var("DATABASE_PATH")
            .map_err(|_| config::ConfigError::Message(
                "FATAL: Environment variable 'DATABASE_PATH' is not set in your .env file.".to_string()
            ))?;

        let upload_path = env::var("UPLOAD_PATH")
            .map_err(|_| config::ConfigError::Message(
                "FATAL: Environment variable 'UPLOAD_PATH' is not set in your .env file.".to_string()
            ))?;

        let background_path = env::var("BACKGROUND_PATH")
            .map_err(|_| config::ConfigError::Message(
                "FATAL: Environment variable 'BACKGROUND_PATH' is not set in your .env file.".to_string()
            ))?;

        let session_secret_key = env::var("SESSION_SECRET_KEY")
            .map_err(|_| config::ConfigError::Message(
                "FATAL: Environment variable 'SESSION_SECRET_KEY' is not set in your .env file.".to_string()
            ))?;

        // The session key must be 128 hex characters (64 bytes).
        if session_secret_key.len() != 128 || !session_secret_key.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(config::ConfigError::Message(
                "FATAL: 'SESSION_SECRET_KEY' must be 128 hexadecimal characters long (64 bytes).".to_string()
            ));
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let use_secure_cookies = env::var("USE_SECURE_COOKIES")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);

        for (name, value) in [
            ("DATABASE_PATH", &database_path),
            ("UPLOAD_PATH", &upload_path),
            ("BACKGROUND_PATH", &background_path),
        ] {
            if Path::new(value).is_relative() {
                return Err(config::ConfigError::Message(format!(
                    "FATAL: The '{}' in your .env file is a relative path ('{}'). It MUST be an absolute path.",
                    name, value
                )));
            }
        }

        let builder = config::Config::builder()
            // Base settings from the TOML file (web host/port).
            .add_source(config::File::new("config/default.toml", config::FileFormat::Toml))
            .set_override("database_path", database_path)?
            .set_override("upload_path", upload_path)?
            .set_override("background_path", background_path)?
            .set_override("session_secret_key", session_secret_key)?
            .set_override("log_level", log_level)?
            .set_override("use_secure_cookies", use_secure_cookies)?
            .build()?;

        builder.try_deserialize()
    }

    /// Returns the full path to the application database file.
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.database_path).join("gather.db")
    }

    /// Returns the fixed path of the site-wide background image.
    pub fn background_file(&self) -> PathBuf {
        PathBuf::from(&self.background_path).join("background.jpg")
    }
}
