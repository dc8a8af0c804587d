use std::env;

/// Environment configuration
/// Loads and validates environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub ws_port: u16,
    pub cors_origins: Vec<String>,
    pub rate_limit_per_minute: u32,
    pub seed_schedule_enabled: bool,
    pub trust_proxy: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set".to_string())?;

        let port = parse_or("PORT", 3000)?;
        let ws_port = parse_or("WS_PORT", 8080)?;
        let rate_limit_per_minute = parse_or("RATE_LIMIT_PER_MINUTE", 20)?;
        let seed_schedule_enabled = parse_or("SEED_SCHEDULE_ENABLED", true)?;
        let trust_proxy = parse_or("TRUST_PROXY", true)?;

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|raw| split_origins(&raw))
            .unwrap_or_default();

        if port == ws_port {
            return Err(format!("PORT and WS_PORT must differ (both {})", port));
        }

        if rate_limit_per_minute == 0 {
            return Err("RATE_LIMIT_PER_MINUTE must be greater than zero".to_string());
        }

        Ok(Self {
            database_url,
            port,
            ws_port,
            cors_origins,
            rate_limit_per_minute,
            seed_schedule_enabled,
            trust_proxy,
        })
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T, String> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| format!("{} has an invalid value: {}", key, raw)),
        Err(_) => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
