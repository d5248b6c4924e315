use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub session_ttl_hours: i64,
    pub secure_cookies: bool,
    pub log_dir: String,
    pub seed_catalog: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://parties.db?mode=rwc".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            session_ttl_hours: env::var("SESSION_TTL_HOURS").unwrap_or_else(|_| "336".to_string()).parse().expect("SESSION_TTL_HOURS must be a number"),
            secure_cookies: env_flag("SECURE_COOKIES"),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()),
            seed_catalog: env_flag("SEED_CATALOG"),
        }
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}
