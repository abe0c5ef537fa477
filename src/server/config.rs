use chrono::Duration;

use crate::server::{error::config::ConfigError, util::time::parse_duration};

pub const DEFAULT_API_PORT: u16 = 8080;
pub const DEFAULT_JWT_SECRET: &str = "secret";
pub const DEFAULT_FETCH_CONCURRENCY: usize = 32;
pub const DEFAULT_JWT_DURATION_HOURS: i64 = 24;

pub struct Config {
    pub api_port: u16,
    pub eth_node_url: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_duration: Duration,
    /// Upper bound on concurrent node lookups within a single request, at least 1
    pub fetch_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());
        let require = |var: &str| get(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let api_port = match get("API_PORT") {
            Some(port) => port.trim().parse::<u16>().map_err(|e| invalid("API_PORT", e))?,
            None => DEFAULT_API_PORT,
        };

        let jwt_duration = match get("JWT_DURATION") {
            Some(duration) => parse_duration(&duration).ok_or_else(|| {
                invalid(
                    "JWT_DURATION",
                    "expected seconds or a value suffixed with s, m, h or d",
                )
            })?,
            None => Duration::hours(DEFAULT_JWT_DURATION_HOURS),
        };

        let fetch_concurrency = match get("FETCH_CONCURRENCY") {
            Some(limit) => match limit.trim().parse::<usize>() {
                Ok(limit) => limit.max(1),
                Err(e) => return Err(invalid("FETCH_CONCURRENCY", e)),
            },
            None => DEFAULT_FETCH_CONCURRENCY,
        };

        Ok(Self {
            api_port,
            eth_node_url: require("ETH_NODE_URL")?,
            database_url: require("DB_CONNECTION_URL")?,
            jwt_secret: get("JWT_SECRET").unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string()),
            jwt_duration,
            fetch_concurrency,
        })
    }
}

fn invalid(var: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::Duration;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |var: &str| vars.get(var).cloned()
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("ETH_NODE_URL", "http://localhost:8545"),
        ("DB_CONNECTION_URL", "postgres://localhost/txfetch"),
    ];

    /// Expect defaults for every optional variable
    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();

        assert_eq!(config.api_port, DEFAULT_API_PORT);
        assert_eq!(config.eth_node_url, "http://localhost:8545");
        assert_eq!(config.database_url, "postgres://localhost/txfetch");
        assert_eq!(config.jwt_secret, DEFAULT_JWT_SECRET);
        assert_eq!(config.jwt_duration, Duration::hours(24));
        assert_eq!(config.fetch_concurrency, DEFAULT_FETCH_CONCURRENCY);
    }

    /// Expect explicit values to override the defaults
    #[test]
    fn reads_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("API_PORT", "9000"),
            ("JWT_SECRET", "hunter2"),
            ("JWT_DURATION", "15m"),
            ("FETCH_CONCURRENCY", "4"),
        ]);

        let config = Config::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.api_port, 9000);
        assert_eq!(config.jwt_secret, "hunter2");
        assert_eq!(config.jwt_duration, Duration::minutes(15));
        assert_eq!(config.fetch_concurrency, 4);
    }

    /// Expect a fetch concurrency of zero to be raised to one
    #[test]
    fn raises_zero_fetch_concurrency() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("FETCH_CONCURRENCY", "0"));

        let config = Config::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.fetch_concurrency, 1);
    }

    /// Expect MissingEnvVar naming the first absent required variable
    #[test]
    fn missing_required_variable() {
        let result = Config::from_lookup(lookup(&[("ETH_NODE_URL", "http://localhost:8545")]));

        match result {
            Err(ConfigError::MissingEnvVar(var)) => assert_eq!(var, "DB_CONNECTION_URL"),
            other => panic!("Expected MissingEnvVar, got {:?}", other.err()),
        }
    }

    /// Expect blank values to count as missing
    #[test]
    fn blank_required_variable_is_missing() {
        let result = Config::from_lookup(lookup(&[
            ("ETH_NODE_URL", "  "),
            ("DB_CONNECTION_URL", "postgres://localhost/txfetch"),
        ]));

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(var)) if var == "ETH_NODE_URL"));
    }

    /// Expect InvalidEnvValue for unparsable optional variables
    #[test]
    fn rejects_invalid_values() {
        for (var, value) in [
            ("API_PORT", "http"),
            ("JWT_DURATION", "forever"),
            ("FETCH_CONCURRENCY", "-1"),
        ] {
            let mut vars = REQUIRED.to_vec();
            vars.push((var, value));

            let result = Config::from_lookup(lookup(&vars));

            assert!(
                matches!(&result, Err(ConfigError::InvalidEnvValue { var: v, .. }) if v == var),
                "{}={} should be rejected",
                var,
                value
            );
        }
    }
}
