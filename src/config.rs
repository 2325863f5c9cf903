use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::{
    error::{config_error, Error},
    external::openrouteservice::DEFAULT_API_BASE,
    fares::FareSchedule,
    routing::{DEFAULT_AVERAGE_SPEED_KMH, DEFAULT_PROVIDER_TIMEOUT},
};

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

#[derive(Clone, Debug)]
pub struct RoutingConfig {
    pub api_key: Option<String>,
    pub api_base: String,
    pub timeout: Duration,
    pub average_speed_kmh: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.into(),
            timeout: DEFAULT_PROVIDER_TIMEOUT,
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub routing: RoutingConfig,
    pub fares: FareSchedule,
}

impl Config {
    /// Reads the process environment. Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = FareSchedule::default();

        let routing = RoutingConfig {
            api_key: lookup("ORS_API_KEY").filter(|key| !is_placeholder_key(key)),
            api_base: lookup("ORS_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.into()),
            timeout: Duration::from_millis(parse_or(
                &lookup,
                "ROUTING_TIMEOUT_MS",
                DEFAULT_PROVIDER_TIMEOUT.as_millis() as u64,
            )?),
            average_speed_kmh: positive(
                "ROUTING_AVERAGE_SPEED_KMH",
                parse_or(&lookup, "ROUTING_AVERAGE_SPEED_KMH", DEFAULT_AVERAGE_SPEED_KMH)?,
            )?,
        };

        let fares = FareSchedule {
            base: parse_or(&lookup, "FARE_BASE", defaults.base)?,
            per_km: parse_or(&lookup, "FARE_PER_KM", defaults.per_km)?,
            private_multiplier: parse_or(
                &lookup,
                "FARE_PRIVATE_MULTIPLIER",
                defaults.private_multiplier,
            )?,
            scheduling_fee: parse_or(&lookup, "FARE_SCHEDULING_FEE", defaults.scheduling_fee)?,
        };

        Ok(Self {
            bind_addr: parse_or(&lookup, "BIND_ADDR", default_bind_addr())?,
            routing,
            fares,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            routing: RoutingConfig::default(),
            fares: FareSchedule::default(),
        }
    }
}

/// Blank keys and the usual template values leave the provider disabled.
pub fn is_placeholder_key(key: &str) -> bool {
    let key = key.trim();
    let lowered = key.to_ascii_lowercase();

    key.is_empty()
        || (key.starts_with('<') && key.ends_with('>'))
        || lowered.contains("your_")
        || lowered.contains("your-")
        || matches!(lowered.as_str(), "changeme" | "placeholder" | "none" | "null")
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, Error>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => {
            value.trim().parse().map_err(|_| config_error(name))
        }
        _ => Ok(default),
    }
}

fn positive(name: &str, value: f64) -> Result<f64, Error> {
    match value.is_finite() && value > 0.0 {
        true => Ok(value),
        false => Err(config_error(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, Error> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config(&[]).unwrap();

        assert!(config.routing.api_key.is_none());
        assert_eq!(config.routing.api_base, DEFAULT_API_BASE);
        assert_eq!(config.routing.timeout, Duration::from_secs(5));
        assert_eq!(config.routing.average_speed_kmh, 32.0);
        assert_eq!(config.fares, FareSchedule::default());
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn placeholder_keys_disable_provider() {
        for key in ["", "   ", "<ORS_API_KEY>", "YOUR_ORS_KEY", "your-api-key", "changeme"] {
            let config = config(&[("ORS_API_KEY", key)]).unwrap();
            assert!(config.routing.api_key.is_none(), "{:?}", key);
        }

        let config = config(&[("ORS_API_KEY", "5b3ce3597851110001cf6248abc")]).unwrap();
        assert_eq!(
            config.routing.api_key.as_deref(),
            Some("5b3ce3597851110001cf6248abc")
        );
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config(&[
            ("ROUTING_TIMEOUT_MS", "1500"),
            ("FARE_PER_KM", "4"),
            ("BIND_ADDR", "0.0.0.0:8080"),
        ])
        .unwrap();

        assert_eq!(config.routing.timeout, Duration::from_millis(1500));
        assert_eq!(config.fares.per_km, 4.0);
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn bad_values_are_config_errors() {
        assert_eq!(config(&[("FARE_BASE", "ten")]).unwrap_err().code, 6);
        assert_eq!(config(&[("ROUTING_AVERAGE_SPEED_KMH", "0")]).unwrap_err().code, 6);
    }
}
