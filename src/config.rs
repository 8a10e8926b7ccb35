// Monitor configuration
//
// Defaults mirror the classic detector loop (a pass every five seconds,
// summary output). Every field can be overridden from the environment.

use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::audio::discovery::DEFAULT_BUNDLE_SEARCH_DEPTH;

pub const ENV_INTERVAL_SECS: &str = "AUDIO_DETECT_INTERVAL_SECS";
pub const ENV_REPORT: &str = "AUDIO_DETECT_REPORT";
pub const ENV_BUNDLE_DEPTH: &str = "AUDIO_DETECT_BUNDLE_DEPTH";
pub const ENV_DEBUG: &str = "AUDIO_DETECT_DEBUG";
pub const ENV_LOG: &str = "AUDIO_DETECT_LOG";
pub const ENV_MAX_PASSES: &str = "AUDIO_DETECT_MAX_PASSES";

/// How each scan pass is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// `Any running? <bool>`
    Summary,
    /// One line per active process
    Detailed,
    /// The active descriptors as a JSON array, one line per pass
    Json,
}

impl FromStr for ReportMode {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "detailed" => Ok(Self::Detailed),
            "json" => Ok(Self::Json),
            other => Err(anyhow!(
                "unknown report mode '{}' (expected summary, detailed or json)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Sleep between scan passes
    pub scan_interval: Duration,

    pub report_mode: ReportMode,

    /// Ancestor directories searched for an executable's bundle
    pub bundle_search_depth: usize,

    /// Trace every property read
    pub scan_debug: bool,

    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,

    /// Stop after this many passes; `None` runs until Ctrl-C
    pub max_passes: Option<u64>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            scan_interval: Duration::from_secs(5),
            report_mode: ReportMode::Summary,
            bundle_search_depth: DEFAULT_BUNDLE_SEARCH_DEPTH,
            scan_debug: false,
            log_filter: "info".to_string(),
            max_passes: None,
        }
    }
}

fn env_value<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("invalid value '{}' for {}", raw, name)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("unreadable {}", name)),
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow!("expected a boolean, got '{}'", other)),
    }
}

/// A usable tick period: finite, representable and at least one nanosecond
fn parse_interval(secs: f64) -> Result<Duration> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(anyhow!(
            "{} must be a positive number of seconds",
            ENV_INTERVAL_SECS
        ));
    }
    let interval = Duration::try_from_secs_f64(secs)
        .map_err(|e| anyhow!("{} is out of range: {}", ENV_INTERVAL_SECS, e))?;
    if interval.is_zero() {
        return Err(anyhow!(
            "{} rounds down to zero ({} s)",
            ENV_INTERVAL_SECS,
            secs
        ));
    }
    Ok(interval)
}

impl MonitorConfig {
    /// Defaults overridden by `AUDIO_DETECT_*` environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(secs) = env_value::<f64>(ENV_INTERVAL_SECS)? {
            config.scan_interval = parse_interval(secs)?;
        }
        if let Some(mode) = env_value::<ReportMode>(ENV_REPORT)? {
            config.report_mode = mode;
        }
        if let Some(depth) = env_value::<usize>(ENV_BUNDLE_DEPTH)? {
            config.bundle_search_depth = depth;
        }
        if let Some(raw) = env_value::<String>(ENV_DEBUG)? {
            config.scan_debug =
                parse_flag(&raw).with_context(|| format!("invalid value for {}", ENV_DEBUG))?;
        }
        if let Some(filter) = env_value::<String>(ENV_LOG)? {
            config.log_filter = filter;
        }
        if let Some(passes) = env_value::<u64>(ENV_MAX_PASSES)? {
            config.max_passes = Some(passes);
        }

        Ok(config)
    }
}
