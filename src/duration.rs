//! Human-readable durations for config values, e.g. "10s", "2m", "1h".

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{de, Deserialize, Deserializer};

/// Parse a duration like "500ms", "10s", "2m" or "1h".
///
/// Whitespace is trimmed and units are case-insensitive.
///
/// ```
/// use tokenfolio::duration::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("10s").unwrap(), Duration::from_secs(10));
/// assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
/// ```
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim().to_lowercase();
    let split = s
        .find(|c: char| !c.is_ascii_digit())
        .context("Duration needs a unit (ms, s, m or h)")?;
    let (num, unit) = s.split_at(split);

    let num: u64 = num.parse().context("Invalid number in duration")?;
    let millis_per_unit: u64 = match unit.trim() {
        "ms" => 1,
        "s" => 1_000,
        "m" => 60_000,
        "h" => 3_600_000,
        other => anyhow::bail!("Unknown duration unit {other:?}"),
    };

    let millis = num
        .checked_mul(millis_per_unit)
        .context("Duration is too large")?;
    Ok(Duration::from_millis(millis))
}

pub fn deserialize_duration<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_duration(&raw).map_err(de::Error::custom)
}
