// src/config.rs
use chrono::{Duration, Utc};
use dotenvy::dotenv;
use std::env;
use std::fmt;
use std::str::FromStr;

/// 実行環境
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Testing,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Testing => "testing",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "development" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "testing" => Ok(Environment::Testing),
            "production" => Ok(Environment::Production),
            _ => Err(ConfigError::Invalid("ENV", value.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {0} value: {1}")]
    Invalid(&'static str, String),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub consent_expiry_days: i64,
    pub known_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        Ok(Self {
            environment: env::var("ENV")
                .unwrap_or_else(|_| "development".to_string())
                .parse()?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 8000)?,
            database_url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL"))?,
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 20)?,
            consent_expiry_days: parse_var("CONSENT_EXPIRY_DAYS", 7)?,
            known_origins: split_list(&env::var("KNOWN_ORIGINS").unwrap_or_default()),
        })
    }

    /// テスト用の設定を作成
    pub fn for_testing() -> Self {
        Self {
            environment: Environment::Testing,
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: "sqlite::memory:".to_string(),
            db_max_connections: 1,
            consent_expiry_days: 7,
            known_origins: Vec::new(),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

/// 削除対象とする保持期間を決める
///
/// コマンドライン引数があれば `default_days` より優先する。負の値と、
/// 現在時刻から引けない大きさの値はエラー。
pub fn expiry_window(arg: Option<String>, default_days: i64) -> Result<Duration, ConfigError> {
    let days = match arg {
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigError::Invalid("expiry days", raw))?,
        None => default_days,
    };

    if days < 0 {
        return Err(ConfigError::Invalid("expiry days", days.to_string()));
    }

    Duration::try_days(days)
        .filter(|window| Utc::now().checked_sub_signed(*window).is_some())
        .ok_or_else(|| ConfigError::Invalid("expiry days", days.to_string()))
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(default),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
