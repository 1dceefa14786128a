use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use price_tracker_market_data::COINGECKO_BASE_URL;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub coingecko_base_url: String,
    pub coingecko_api_key: Option<String>,
    /// Period of the background update; `None` disables it.
    pub update_interval: Option<Duration>,
    /// Offset east of UTC, in minutes, used to bucket prices into days.
    pub day_offset_minutes: i32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("PT_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid PT_LISTEN_ADDR")?;
        let db_path = env_or("PT_DB_PATH", "./db/app.db");
        let cors_allow = env_or("PT_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("PT_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid PT_REQUEST_TIMEOUT_MS")?;
        let coingecko_base_url = env_or("PT_COINGECKO_BASE_URL", COINGECKO_BASE_URL);
        let coingecko_api_key = std::env::var("PT_COINGECKO_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let interval_secs: u64 = env_or("PT_UPDATE_INTERVAL_SECS", "0")
            .parse()
            .context("Invalid PT_UPDATE_INTERVAL_SECS")?;
        let day_offset_minutes: i32 = env_or("PT_DAY_OFFSET_MINUTES", "0")
            .parse()
            .context("Invalid PT_DAY_OFFSET_MINUTES")?;

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            coingecko_base_url,
            coingecko_api_key,
            update_interval: (interval_secs > 0).then(|| Duration::from_secs(interval_secs)),
            day_offset_minutes,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
