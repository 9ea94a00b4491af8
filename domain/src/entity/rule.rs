use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::constraints::{NAME_MAX, RESOURCE_NAME, TIMESTAMP_MILLIS_MAX};
use crate::time::{epoch_seconds, Timestamp};
use crate::{
    AbsoluteTimeRange, FieldDisplay, InputType, ParticipantRole, RelativeTimeRange,
    SentimentValue, TranscriptFilterType,
};

/// Flags periods without speech longer than `threshold` milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct NonTalkTimeFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = TIMESTAMP_MILLIS_MAX))]
    pub threshold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub absolute_time_range: Option<AbsoluteTimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub relative_time_range: Option<RelativeTimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negate: Option<bool>,
}

fluent_record!(NonTalkTimeFilter {
    with_threshold(threshold: i64) => "Threshold",
    with_absolute_time_range(absolute_time_range: AbsoluteTimeRange) => "AbsoluteTimeRange",
    with_relative_time_range(relative_time_range: RelativeTimeRange) => "RelativeTimeRange",
    with_negate(negate: bool) => "Negate",
});

/// Flags a participant talking over the other for longer than `threshold`
/// milliseconds in total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct InterruptionFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = TIMESTAMP_MILLIS_MAX))]
    pub threshold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_role: Option<ParticipantRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub absolute_time_range: Option<AbsoluteTimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub relative_time_range: Option<RelativeTimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negate: Option<bool>,
}

fluent_record!(InterruptionFilter {
    with_threshold(threshold: i64) => "Threshold",
    with_participant_role(participant_role: ParticipantRole) => "ParticipantRole",
    with_absolute_time_range(absolute_time_range: AbsoluteTimeRange) => "AbsoluteTimeRange",
    with_relative_time_range(relative_time_range: RelativeTimeRange) => "RelativeTimeRange",
    with_negate(negate: bool) => "Negate",
});

/// Matches words or phrases in the transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct TranscriptFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub transcript_filter_type: Option<TranscriptFilterType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub absolute_time_range: Option<AbsoluteTimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub relative_time_range: Option<RelativeTimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_role: Option<ParticipantRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1))]
    pub targets: Option<Vec<String>>,
}

fluent_record!(TranscriptFilter {
    with_transcript_filter_type(transcript_filter_type: TranscriptFilterType) => "TranscriptFilterType",
    with_absolute_time_range(absolute_time_range: AbsoluteTimeRange) => "AbsoluteTimeRange",
    with_relative_time_range(relative_time_range: RelativeTimeRange) => "RelativeTimeRange",
    with_participant_role(participant_role: ParticipantRole) => "ParticipantRole",
    with_negate(negate: bool) => "Negate",
    with_targets(targets: Vec<String>) => "Targets",
});

/// Matches the sentiment of one participant, or of both when no role is
/// given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct SentimentFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1))]
    pub sentiments: Option<Vec<SentimentValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub absolute_time_range: Option<AbsoluteTimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub relative_time_range: Option<RelativeTimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_role: Option<ParticipantRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negate: Option<bool>,
}

fluent_record!(SentimentFilter {
    with_sentiments(sentiments: Vec<SentimentValue>) => "Sentiments",
    with_absolute_time_range(absolute_time_range: AbsoluteTimeRange) => "AbsoluteTimeRange",
    with_relative_time_range(relative_time_range: RelativeTimeRange) => "RelativeTimeRange",
    with_participant_role(participant_role: ParticipantRole) => "ParticipantRole",
    with_negate(negate: bool) => "Negate",
});

/// One criterion of a call analytics category. On the wire a rule is an
/// object with exactly one member, e.g. `{"SentimentFilter": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    NonTalkTimeFilter(NonTalkTimeFilter),
    InterruptionFilter(InterruptionFilter),
    TranscriptFilter(TranscriptFilter),
    SentimentFilter(SentimentFilter),
}

impl Rule {
    pub fn kind(&self) -> &'static str {
        match self {
            Rule::NonTalkTimeFilter(_) => "NonTalkTimeFilter",
            Rule::InterruptionFilter(_) => "InterruptionFilter",
            Rule::TranscriptFilter(_) => "TranscriptFilter",
            Rule::SentimentFilter(_) => "SentimentFilter",
        }
    }
}

impl Validate for Rule {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            Rule::NonTalkTimeFilter(filter) => filter.validate(),
            Rule::InterruptionFilter(filter) => filter.validate(),
            Rule::TranscriptFilter(filter) => filter.validate(),
            Rule::SentimentFilter(filter) => filter.validate(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}: ", self.kind())?;
        match self {
            Rule::NonTalkTimeFilter(filter) => fmt::Display::fmt(filter, f)?,
            Rule::InterruptionFilter(filter) => fmt::Display::fmt(filter, f)?,
            Rule::TranscriptFilter(filter) => fmt::Display::fmt(filter, f)?,
            Rule::SentimentFilter(filter) => fmt::Display::fmt(filter, f)?,
        }
        f.write_str("}")
    }
}

impl FieldDisplay for Rule {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<NonTalkTimeFilter> for Rule {
    fn from(filter: NonTalkTimeFilter) -> Self {
        Rule::NonTalkTimeFilter(filter)
    }
}

impl From<InterruptionFilter> for Rule {
    fn from(filter: InterruptionFilter) -> Self {
        Rule::InterruptionFilter(filter)
    }
}

impl From<TranscriptFilter> for Rule {
    fn from(filter: TranscriptFilter) -> Self {
        Rule::TranscriptFilter(filter)
    }
}

impl From<SentimentFilter> for Rule {
    fn from(filter: SentimentFilter) -> Self {
        Rule::SentimentFilter(filter)
    }
}

/// A named set of rules used to tag call analytics output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 20), nested)]
    pub rules: Option<Vec<Rule>>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<Timestamp>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_update_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
}

fluent_record!(CategoryProperties {
    with_category_name(category_name: String) => "CategoryName",
    with_rules(rules: Vec<Rule>) => "Rules",
    with_create_time(create_time: Timestamp) => "CreateTime",
    with_last_update_time(last_update_time: Timestamp) => "LastUpdateTime",
    with_input_type(input_type: InputType) => "InputType",
});
