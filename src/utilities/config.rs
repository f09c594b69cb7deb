use log::LevelFilter;
use std::{env, str::FromStr, time::Duration};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookSettings {
    pub url: String,
    pub signing_key: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub log_level: LevelFilter,
    pub owner_name: String,
    pub require_delivery_address: bool,
    pub orders_per_minute: u64,
    pub webhook: Option<WebhookSettings>,
}

impl Settings {
    pub fn from_env() -> Result<Settings, ConfigError> {
        Settings::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Settings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| String::from("0.0.0.0"));
        let port = parse_or("PORT", lookup("PORT"), 3000u16)?;
        let log_level = parse_or("LOG_LEVEL", lookup("LOG_LEVEL"), LevelFilter::Info)?;
        let owner_name = lookup("OWNER_NAME").unwrap_or_else(|| String::from("Aanya"));
        let require_delivery_address = parse_or(
            "REQUIRE_DELIVERY_ADDRESS",
            lookup("REQUIRE_DELIVERY_ADDRESS"),
            true,
        )?;
        let orders_per_minute = parse_or("ORDERS_PER_MINUTE", lookup("ORDERS_PER_MINUTE"), 20u64)?;
        if orders_per_minute == 0 {
            return Err(ConfigError::Invalid {
                key: "ORDERS_PER_MINUTE",
                value: String::from("0"),
            });
        }

        let webhook = match lookup("ORDER_WEBHOOK_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                let signing_key = lookup("ORDER_WEBHOOK_SIGNING_KEY")
                    .filter(|key| !key.is_empty())
                    .ok_or(ConfigError::Missing("ORDER_WEBHOOK_SIGNING_KEY"))?;
                let timeout_secs = parse_or(
                    "ORDER_WEBHOOK_TIMEOUT_SECS",
                    lookup("ORDER_WEBHOOK_TIMEOUT_SECS"),
                    10u64,
                )?;

                Some(WebhookSettings {
                    url,
                    signing_key,
                    timeout: Duration::from_secs(timeout_secs),
                })
            }
            None => None,
        };

        Ok(Settings {
            host,
            port,
            log_level,
            owner_name,
            require_delivery_address,
            orders_per_minute,
            webhook,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(settings.address(), "0.0.0.0:3000");
        assert_eq!(settings.log_level, LevelFilter::Info);
        assert_eq!(settings.owner_name, "Aanya");
        assert!(settings.require_delivery_address);
        assert_eq!(settings.orders_per_minute, 20);
        assert!(settings.webhook.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = Settings::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "PORT",
                value: String::from("eighty")
            }
        );
    }

    #[test]
    fn test_webhook_requires_signing_key() {
        let err = Settings::from_lookup(lookup_from(&[("ORDER_WEBHOOK_URL", "https://hooks.example.com/orders")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::Missing("ORDER_WEBHOOK_SIGNING_KEY"));
    }

    #[test]
    fn test_webhook_settings() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("ORDER_WEBHOOK_URL", "https://hooks.example.com/orders"),
            ("ORDER_WEBHOOK_SIGNING_KEY", "secret"),
            ("ORDER_WEBHOOK_TIMEOUT_SECS", "3"),
            ("REQUIRE_DELIVERY_ADDRESS", "false"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        let webhook = settings.webhook.unwrap();
        assert_eq!(webhook.timeout, Duration::from_secs(3));
        assert_eq!(webhook.signing_key, "secret");
        assert!(!settings.require_delivery_address);
        assert_eq!(settings.log_level, LevelFilter::Debug);
    }
}
