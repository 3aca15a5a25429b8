//! Creation-time decoding for Discord snowflake identifiers

use chrono::{DateTime, TimeZone, Utc};
use tracing::debug;

/// Discord epoch (2015-01-01T00:00:00.000Z) in milliseconds since the Unix epoch.
pub const DISCORD_EPOCH_MS: u128 = 1_420_070_400_000;

/// Number of low bits holding the worker/process/sequence sub-fields.
const TIMESTAMP_SHIFT: u32 = 22;

/// Decode the creation timestamp embedded in a snowflake identifier.
///
/// The identifier is parsed as a non-negative integer into a `u128` so that
/// values past the signed 64-bit range cannot silently overflow. Returns
/// `None` when the string is not a valid integer or the decoded instant is
/// outside the representable timestamp range; callers omit the field rather
/// than emit a bogus date.
pub fn snowflake_timestamp(id: &str) -> Option<DateTime<Utc>> {
    let value = match id.parse::<u128>() {
        Ok(v) => v,
        Err(e) => {
            debug!("Failed to parse snowflake {:?}: {}", id, e);
            return None;
        }
    };

    let millis = (value >> TIMESTAMP_SHIFT) + DISCORD_EPOCH_MS;
    let millis = i64::try_from(millis).ok()?;

    Utc.timestamp_millis_opt(millis).single()
}

/// Decode and format as ISO-8601 with millisecond precision and a `Z` suffix.
pub fn snowflake_timestamp_iso(id: &str) -> Option<String> {
    snowflake_timestamp(id)
        .map(|ts| ts.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
}
