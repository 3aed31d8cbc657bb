//! Application configuration loaded from environment variables.
//!
//! - `ARBCALC_RECONCILE_INCREMENTS`: whether evaluations reconcile the
//!   two legs' quantity increments when a scenario does not say
//!   (`true`/`false`, `1`/`0`, `yes`/`no`; default `true`).

/// Environment variable holding the reconciliation default.
const RECONCILE_VAR: &str = "ARBCALC_RECONCILE_INCREMENTS";

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub reconcile_quantity_increments: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reconcile_quantity_increments: true,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from a variable lookup.
    ///
    /// Empty values are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ArbitrageError::Config`](crate::ArbitrageError::Config) if a
    /// variable holds something other than a boolean.
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(RECONCILE_VAR).filter(|s| !s.is_empty()) {
            config.reconcile_quantity_increments = parse_bool(&value).ok_or_else(|| {
                crate::ArbitrageError::Config(format!(
                    "{RECONCILE_VAR} must be true or false, got {value:?}"
                ))
            })?;
        }

        Ok(config)
    }
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// See [`AppConfig::from_lookup`].
pub fn fetch_config() -> crate::Result<AppConfig> {
    AppConfig::from_lookup(|name| std::env::var(name).ok())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
