use std::env;

use anyhow::{Context, Result};
use clap::ValueEnum;

/// Decimal places used for the distance when nothing else is configured.
pub const DEFAULT_PRECISION: usize = 6;

/// Most decimal places worth printing; an f64 carries about 17 significant digits.
pub const MAX_PRECISION: usize = 17;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines (default)
    Text,
    /// A single JSON object
    Json,
}

/// What to do when one of the input documents cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Report it, treat the document as empty, and keep going (default)
    Skip,
    /// Abort the run before comparing anything
    Fail,
}

/// Central configuration loaded from environment variables.
///
/// A .env file is loaded at startup via dotenvy. Command-line flags take
/// precedence over anything set here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub missing: MissingPolicy,
    /// Decimal places for the printed distance
    pub precision: usize,
    /// Load both documents concurrently
    pub parallel: bool,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            missing: MissingPolicy::Skip,
            precision: DEFAULT_PRECISION,
            parallel: true,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys keep their
    /// defaults; set but malformed keys are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("TEXTCOMPARE_STRICT") {
            if parse_bool("TEXTCOMPARE_STRICT", &raw)? {
                config.missing = MissingPolicy::Fail;
            }
        }

        if let Some(raw) = lookup("TEXTCOMPARE_PRECISION") {
            let precision: usize = raw.trim().parse().with_context(|| {
                format!("TEXTCOMPARE_PRECISION must be a non-negative integer, got {raw:?}")
            })?;
            if precision > MAX_PRECISION {
                anyhow::bail!(
                    "TEXTCOMPARE_PRECISION must be at most {MAX_PRECISION}, got {precision}"
                );
            }
            config.precision = precision;
        }

        if let Some(raw) = lookup("TEXTCOMPARE_PARALLEL") {
            config.parallel = parse_bool("TEXTCOMPARE_PARALLEL", &raw)?;
        }

        if let Some(raw) = lookup("TEXTCOMPARE_FORMAT") {
            config.format = OutputFormat::from_str(raw.trim(), true).map_err(|_| {
                anyhow::anyhow!("TEXTCOMPARE_FORMAT must be \"text\" or \"json\", got {raw:?}")
            })?;
        }

        Ok(config)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => anyhow::bail!("{key} must be true or false, got {raw:?}"),
    }
}
