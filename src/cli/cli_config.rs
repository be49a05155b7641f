//! Environment-driven settings for the command-line front end.

use log::{warn, LevelFilter};

pub const SEED_VAR: &str = "REVEAL_CHESS_SEED";
pub const LOG_VAR: &str = "REVEAL_CHESS_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliConfig {
    /// Seed for the first game. `None` draws from the thread RNG.
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: LevelFilter::Warn,
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source. Unparseable values keep the
    /// default and are reported with `warn!`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => warn!("ignoring {SEED_VAR}={raw:?}: expected an unsigned integer"),
            }
        }

        if let Some(raw) = lookup(LOG_VAR) {
            match parse_level(&raw) {
                Some(level) => config.log_level = level,
                None => warn!("ignoring {LOG_VAR}={raw:?}: expected off|error|warn|info|debug|trace"),
            }
        }

        config
    }
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}
