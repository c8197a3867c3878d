use std::time::Duration;

use anyhow::{Context, Result};

const TICKS_VAR: &str = "CASCADE_TICKS";
const INTERVAL_VAR: &str = "CASCADE_INTERVAL_MS";

/// Drive-loop configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Number of tick/render iterations.
    pub ticks: u64,
    /// Pause between iterations. Zero disables pacing.
    pub interval: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            ticks: 10,
            interval: Duration::from_millis(1000),
        }
    }
}

impl DriverConfig {
    /// Defaults overridden by `CASCADE_TICKS` and `CASCADE_INTERVAL_MS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(TICKS_VAR) {
            config.ticks = raw
                .trim()
                .parse()
                .with_context(|| format!("{TICKS_VAR}={raw:?} is not a tick count"))?;
        }
        if let Some(raw) = lookup(INTERVAL_VAR) {
            let ms: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{INTERVAL_VAR}={raw:?} is not a millisecond count"))?;
            config.interval = Duration::from_millis(ms);
        }

        Ok(config)
    }
}
