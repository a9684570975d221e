//! Unix timestamps as Slack sends them

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Seconds since the Unix epoch. Slack sends these as JSON numbers, and
/// occasionally as numeric strings; both decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct JsonTime(pub i64);

impl JsonTime {
    pub fn as_secs(self) -> i64 {
        self.0
    }

    /// `None` when the value is outside chrono's representable range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.0, 0).single()
    }
}

impl<'de> Deserialize<'de> for JsonTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(secs) => Ok(JsonTime(secs)),
            Raw::Float(secs) => Ok(JsonTime(secs.trunc() as i64)),
            Raw::Text(s) if s.is_empty() => Ok(JsonTime(0)),
            Raw::Text(s) => s
                .split('.')
                .next()
                .unwrap_or_default()
                .parse()
                .map(JsonTime)
                .map_err(serde::de::Error::custom),
        }
    }
}
