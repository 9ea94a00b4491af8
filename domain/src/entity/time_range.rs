use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constraints::{PERCENTAGE_MAX, TIMESTAMP_MILLIS_MAX};

/// A window of the media in milliseconds.
///
/// Use either `start_time` and `end_time` together, or one of `first` /
/// `last` on its own (the first or last N milliseconds). The service
/// rejects mixed usage; this type does not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct AbsoluteTimeRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = TIMESTAMP_MILLIS_MAX))]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = TIMESTAMP_MILLIS_MAX))]
    pub end_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = TIMESTAMP_MILLIS_MAX))]
    pub first: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = TIMESTAMP_MILLIS_MAX))]
    pub last: Option<i64>,
}

fluent_record!(AbsoluteTimeRange {
    with_start_time(start_time: i64) => "StartTime",
    with_end_time(end_time: i64) => "EndTime",
    with_first(first: i64) => "First",
    with_last(last: i64) => "Last",
});

impl AbsoluteTimeRange {
    pub fn between(start_time: i64, end_time: i64) -> Self {
        Self::new().with_start_time(start_time).with_end_time(end_time)
    }
}

/// A window of the media as percentages of its duration; same usage modes
/// as [`AbsoluteTimeRange`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct RelativeTimeRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = PERCENTAGE_MAX))]
    pub start_percentage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = PERCENTAGE_MAX))]
    pub end_percentage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = PERCENTAGE_MAX))]
    pub first: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = PERCENTAGE_MAX))]
    pub last: Option<i32>,
}

fluent_record!(RelativeTimeRange {
    with_start_percentage(start_percentage: i32) => "StartPercentage",
    with_end_percentage(end_percentage: i32) => "EndPercentage",
    with_first(first: i32) => "First",
    with_last(last: i32) => "Last",
});

impl RelativeTimeRange {
    pub fn between(start_percentage: i32, end_percentage: i32) -> Self {
        Self::new()
            .with_start_percentage(start_percentage)
            .with_end_percentage(end_percentage)
    }
}
