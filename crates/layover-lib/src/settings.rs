use std::env;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Environment variable overriding the default hop budget.
pub const MAX_HOPS_ENV: &str = "LAYOVER_MAX_HOPS";

/// Environment variable overriding the HTTP listen port.
pub const PORT_ENV: &str = "SERVICE_PORT";

pub const DEFAULT_MAX_HOPS: usize = 4;
pub const DEFAULT_PORT: u16 = 8080;

/// Process-wide settings shared by the CLI and the HTTP service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Hop budget used when a request does not carry its own.
    pub max_hops: usize,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_hops: DEFAULT_MAX_HOPS,
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    /// Read settings from the environment, falling back to defaults for
    /// unset variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let max_hops = parse_setting(MAX_HOPS_ENV, lookup(MAX_HOPS_ENV))?
            .unwrap_or(defaults.max_hops);
        let port = parse_setting(PORT_ENV, lookup(PORT_ENV))?.unwrap_or(defaults.port);

        validate_max_hops(max_hops)?;
        Ok(Self { max_hops, port })
    }
}

/// Reject hop budgets that cannot produce a route between distinct airports.
pub fn validate_max_hops(max_hops: usize) -> Result<usize> {
    if max_hops == 0 {
        return Err(Error::InvalidSetting {
            key: MAX_HOPS_ENV,
            value: max_hops.to_string(),
        });
    }
    Ok(max_hops)
}

fn parse_setting<T: FromStr>(key: &'static str, raw: Option<String>) -> Result<Option<T>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| Error::InvalidSetting { key, value: raw })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.max_hops, 4);
        assert_eq!(settings.port, 8080);
    }

    #[test]
    fn values_are_read_from_environment() {
        let settings =
            Settings::from_lookup(lookup(&[(MAX_HOPS_ENV, "6"), (PORT_ENV, " 9090 ")])).unwrap();
        assert_eq!(settings.max_hops, 6);
        assert_eq!(settings.port, 9090);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let settings = Settings::from_lookup(lookup(&[(MAX_HOPS_ENV, "  ")])).unwrap();
        assert_eq!(settings.max_hops, DEFAULT_MAX_HOPS);
    }

    #[test]
    fn unparsable_values_are_rejected() {
        let err = Settings::from_lookup(lookup(&[(PORT_ENV, "eighty")])).unwrap_err();
        match err {
            Error::InvalidSetting { key, value } => {
                assert_eq!(key, PORT_ENV);
                assert_eq!(value, "eighty");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn zero_hop_budget_is_rejected() {
        let err = Settings::from_lookup(lookup(&[(MAX_HOPS_ENV, "0")])).unwrap_err();
        assert!(matches!(err, Error::InvalidSetting { key: MAX_HOPS_ENV, .. }));
    }
}
