//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;

use anyhow::Context;

use itemservice_items::RuleSetConfig;
use itemservice_observability::{LogFormat, TracingConfig};

pub const BIND_ADDR_VAR: &str = "ITEMSERVICE_BIND_ADDR";
pub const SEED_SAMPLE_DATA_VAR: &str = "ITEMSERVICE_SEED_SAMPLE_DATA";
pub const VALIDATE_FIELDS_VAR: &str = "ITEMSERVICE_VALIDATE_FIELDS";
pub const LOG_FORMAT_VAR: &str = "ITEMSERVICE_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Start the store with the demo rows.
    pub seed_sample_data: bool,
    pub rules: RuleSetConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            seed_sample_data: true,
            rules: RuleSetConfig::default(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production, a map
    /// in tests).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("{BIND_ADDR_VAR} is not a socket address: {raw_addr:?}"))?;

        let seed_sample_data = bool_var(&lookup, SEED_SAMPLE_DATA_VAR, defaults.seed_sample_data);
        let validate_fields = bool_var(
            &lookup,
            VALIDATE_FIELDS_VAR,
            defaults.rules.validate_name_and_price_and_quantity,
        );

        Ok(Self {
            bind_addr,
            seed_sample_data,
            rules: RuleSetConfig {
                validate_name_and_price_and_quantity: validate_fields,
            },
        })
    }
}

/// Tracing setup from the environment. Read before `ApiConfig` so that config
/// warnings are already logged with the right format.
///
/// Tracing is not installed yet at this point, so a problem with the
/// variable is handed back for the caller to log once it is.
pub fn tracing_config_from_env() -> (TracingConfig, Option<String>) {
    tracing_config_from_lookup(|key| std::env::var(key).ok())
}

pub fn tracing_config_from_lookup<F>(lookup: F) -> (TracingConfig, Option<String>)
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = TracingConfig::default();
    let Some(raw) = lookup(LOG_FORMAT_VAR) else {
        return (defaults, None);
    };
    match LogFormat::parse(&raw) {
        Some(format) => (TracingConfig { format, ..defaults }, None),
        None => {
            let warning = format!(
                "{LOG_FORMAT_VAR}={raw:?} is not a log format; using default {:?}",
                defaults.format
            );
            (defaults, Some(warning))
        }
    }
}

fn bool_var<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!("{key}={raw:?} is not a boolean; using default {default}");
            default
        }
    }
}
