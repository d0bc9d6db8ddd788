use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use crate::pricing::FeeSchedule;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::apply_security_headers;

const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub cors_allowed_origins: String,
    pub production: bool,
    pub fees: FeeSchedule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cors_allowed_origins: cors::DEFAULT_ALLOWED_ORIGINS.to_string(),
            production: false,
            fees: FeeSchedule::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let default_fees = defaults.fees;

        Self {
            host: parse_or(&lookup, "HOST", defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .unwrap_or(defaults.cors_allowed_origins),
            production: lookup("RUST_ENV")
                .map(|v| v.to_lowercase() == "production")
                .unwrap_or(false),
            fees: FeeSchedule {
                processor_rate_bps: parse_fee_or(
                    &lookup,
                    "PROCESSOR_FEE_BPS",
                    default_fees.processor_rate_bps,
                ),
                processor_fixed_fee: parse_fee_or(
                    &lookup,
                    "PROCESSOR_FIXED_FEE",
                    default_fees.processor_fixed_fee,
                ),
                application_rate_bps: parse_fee_or(
                    &lookup,
                    "APPLICATION_FEE_BPS",
                    default_fees.application_rate_bps,
                ),
                refund_retained_fee: parse_fee_or(
                    &lookup,
                    "REFUND_RETAINED_FEE",
                    default_fees.refund_retained_fee,
                ),
            },
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Config: invalid value '{}' for {}, using default", raw, key);
                default
            }
        },
        None => default,
    }
}

/// Fee rates and fixed fees must not be negative.
fn parse_fee_or<F>(lookup: &F, key: &str, default: i64) -> i64
where
    F: Fn(&str) -> Option<String>,
{
    let value = parse_or(lookup, key, default);
    if value < 0 {
        tracing::warn!("Config: negative value {} for {}, using default", value, key);
        return default;
    }
    value
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.port, 3001);
        assert!(!config.production);
        assert_eq!(config.fees, FeeSchedule::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3001");
    }

    #[test]
    fn test_overrides_from_env() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("RUST_ENV", "Production"),
            ("APPLICATION_FEE_BPS", "500"),
            ("REFUND_RETAINED_FEE", "0"),
        ]));
        assert_eq!(config.port, 8080);
        assert!(config.production);
        assert_eq!(config.fees.application_rate_bps, 500);
        assert_eq!(config.fees.refund_retained_fee, 0);
        assert_eq!(config.fees.processor_rate_bps, 290);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("PROCESSOR_FIXED_FEE", "thirty"),
            ("PROCESSOR_FEE_BPS", "-290"),
            ("APPLICATION_FEE_BPS", "-1"),
            ("REFUND_RETAINED_FEE", "-30"),
        ]));
        assert_eq!(config.port, 3001);
        assert_eq!(config.fees, FeeSchedule::default());
    }
}
