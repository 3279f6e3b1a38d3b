//! Timestamp rendering used in fixture payloads, e.g. `2025-03-14 09:26:53+00:00`.

use chrono::{DateTime, FixedOffset};
use serde::Serializer;

const FIXTURE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";

pub fn format(value: &DateTime<FixedOffset>) -> String {
    value.format(FIXTURE_DATETIME_FORMAT).to_string()
}

pub fn serialize<S>(value: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}
