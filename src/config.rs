use std::path::PathBuf;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub users_file: PathBuf,
    pub chat_file: PathBuf,
    pub session_expiry_hours: i64,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            users_file: PathBuf::from("users.json"),
            chat_file: PathBuf::from("chat.json"),
            session_expiry_hours: 24,
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Config::default();

        Ok(Config {
            server_host: std::env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_var("SERVER_PORT", defaults.server_port)?,
            users_file: std::env::var("USERS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.users_file),
            chat_file: std::env::var("CHAT_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.chat_file),
            session_expiry_hours: validate_expiry_hours(parse_var(
                "SESSION_EXPIRY_HOURS",
                defaults.session_expiry_hours,
            )?)?,
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Session lifetime must be positive and fit a unix timestamp in seconds.
fn validate_expiry_hours(hours: i64) -> Result<i64, AppError> {
    if hours <= 0 {
        return Err(AppError::Config(format!(
            "Invalid SESSION_EXPIRY_HOURS: {} (must be positive)",
            hours
        )));
    }

    hours
        .checked_mul(3600)
        .and_then(|secs| secs.checked_add(chrono::Utc::now().timestamp()))
        .map(|_| hours)
        .ok_or_else(|| AppError::Config(format!("Invalid SESSION_EXPIRY_HOURS: {} (too large)", hours)))
}

fn parse_var<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}
