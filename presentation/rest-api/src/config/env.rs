use std::str::FromStr;

use anyhow::{Context, anyhow};

/// Reads `key`, falling back to `default` when unset.
pub fn var_or<T: FromStr>(key: &str, default: T) -> anyhow::Result<T> {
    parse_or(key, std::env::var(key).ok(), default)
}

/// Reads a variable that has no sensible default.
pub fn required_var(key: &str) -> anyhow::Result<String> {
    std::env::var(key).with_context(|| format!("{key} must be set"))
}

pub(crate) fn parse_or<T: FromStr>(
    key: &str,
    raw: Option<String>,
    default: T,
) -> anyhow::Result<T> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| anyhow!("{key} has an invalid value: {value:?}")),
    }
}
