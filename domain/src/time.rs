//! Timestamps travel on the wire as fractional epoch seconds
//! (`1652207578.789`). Precision below one millisecond is dropped.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

pub type Timestamp = DateTime<Utc>;

/// `#[serde(with = "...")]` adapter for `Option<Timestamp>` members.
pub mod epoch_seconds {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<Timestamp>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(timestamp) => serializer.serialize_f64(to_epoch_seconds(timestamp)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Timestamp>, D::Error> {
        let Some(seconds) = Option::<f64>::deserialize(deserializer)? else {
            return Ok(None);
        };
        from_epoch_seconds(seconds)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {seconds}")))
    }
}

pub fn to_epoch_seconds(timestamp: &Timestamp) -> f64 {
    timestamp.timestamp_millis() as f64 / 1000.0
}

pub fn from_epoch_seconds(seconds: f64) -> Option<Timestamp> {
    if !seconds.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_seconds_keep_millisecond_precision() {
        let timestamp = from_epoch_seconds(1_652_207_578.789).expect("in range");
        assert_eq!(timestamp.timestamp_millis(), 1_652_207_578_789);
        assert_eq!(to_epoch_seconds(&timestamp), 1_652_207_578.789);
    }

    #[test]
    fn non_finite_seconds_are_rejected() {
        assert!(from_epoch_seconds(f64::NAN).is_none());
        assert!(from_epoch_seconds(f64::INFINITY).is_none());
    }
}
