use std::time::Duration;

use anyhow::bail;

use super::env::var_or;

const DEFAULT_TTL_SECONDS: u64 = 300;

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub ttl: Duration,
}

impl CacheConfig {
    /// Environment variables:
    /// - CACHE_TTL_SECONDS: Age after which catalog entries are dropped (default: 300, must be > 0)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_seconds(var_or("CACHE_TTL_SECONDS", DEFAULT_TTL_SECONDS)?)
    }

    fn from_seconds(seconds: u64) -> anyhow::Result<Self> {
        if seconds == 0 {
            bail!("CACHE_TTL_SECONDS must be greater than 0");
        }
        Ok(Self {
            ttl: Duration::from_secs(seconds),
        })
    }
}
