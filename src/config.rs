/*
 * Responsibility
 * - 環境変数や設定の読み込み (JWT 設定、CORS 許可、DATABASE_URL など)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

pub struct Config {
    pub addr: SocketAddr,

    /// Absent selects the seeded in-memory store (demo mode).
    pub database_url: Option<String>,

    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub jwt_secret_key: String,
    pub jwt_issuer: String,
    pub jwt_audience: String,
    pub access_token_ttl_seconds: u64,

    /// Simulated latency for the create path. Off unless CREATE_DELAY_MS is set.
    pub create_delay_ms: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let app_env = AppEnv::from_env();

        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let jwt_secret_key =
            std::env::var("JWT_SECRET_KEY").map_err(|_| ConfigError::Missing("JWT_SECRET_KEY"))?;
        // HS256: anything shorter than the hash width weakens the MAC.
        if jwt_secret_key.len() < 32 {
            return Err(ConfigError::Invalid("JWT_SECRET_KEY"));
        }

        let jwt_issuer =
            std::env::var("JWT_ISSUER").map_err(|_| ConfigError::Missing("JWT_ISSUER"))?;

        let jwt_audience =
            std::env::var("JWT_AUDIENCE").map_err(|_| ConfigError::Missing("JWT_AUDIENCE"))?;

        let access_token_ttl_seconds = std::env::var("ACCESS_TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(1800);

        let create_delay_ms = std::env::var("CREATE_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok());

        Ok(Self {
            addr,
            database_url,
            app_env,
            cors_allowed_origins,
            jwt_secret_key,
            jwt_issuer,
            jwt_audience,
            access_token_ttl_seconds,
            create_delay_ms,
        })
    }
}
