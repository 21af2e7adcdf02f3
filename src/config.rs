use serde::Deserialize;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_RATE_LIMIT_PER_SECOND: u64 = 10;
const DEFAULT_RATE_LIMIT_BURST: u32 = 20;
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rate_limit_per_second: DEFAULT_RATE_LIMIT_PER_SECOND,
            rate_limit_burst: DEFAULT_RATE_LIMIT_BURST,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Reads `name` through `lookup`, falling back to `default` when unset or blank.
fn parse_var<T, F>(lookup: &F, name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{} has an invalid value: '{}'", name, raw)),
        None => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|name| std::env::var(name).ok())?;

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Server Port: {}", config.port);
        tracing::debug!(
            "Rate limit: {}/s, burst {}",
            config.rate_limit_per_second,
            config.rate_limit_burst
        );

        Ok(config)
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = parse_var(&lookup, "PORT", DEFAULT_PORT)?;
        if port == 0 {
            anyhow::bail!("PORT must be a valid number between 1-65535");
        }

        let rate_limit_per_second =
            parse_var(&lookup, "RATE_LIMIT_PER_SECOND", DEFAULT_RATE_LIMIT_PER_SECOND)?;
        let rate_limit_burst = parse_var(&lookup, "RATE_LIMIT_BURST", DEFAULT_RATE_LIMIT_BURST)?;
        if rate_limit_per_second == 0 || rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_PER_SECOND and RATE_LIMIT_BURST must be greater than zero");
        }

        let max_body_bytes = parse_var(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?;

        Ok(Self {
            port,
            rate_limit_per_second,
            rate_limit_burst,
            max_body_bytes,
        })
    }
}
