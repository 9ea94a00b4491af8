use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constraints::{ARN_MAX, ARN_MIN, DATA_ACCESS_ROLE_ARN, NAME_MAX, RESOURCE_NAME};
use crate::time::{epoch_seconds, Timestamp};
use crate::{
    CallAnalyticsJobSettings, CallAnalyticsJobStatus, ChannelDefinition, Float, LanguageCode,
    Media, MediaFormat, Transcript,
};

/// A post-call analytics job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CallAnalyticsJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub call_analytics_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_analytics_job_status: Option<CallAnalyticsJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 8000, max = 48000))]
    pub media_sample_rate_hertz: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_format: Option<MediaFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub media: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub transcript: Option<Transcript>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Timestamp>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<Timestamp>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = ARN_MIN, max = ARN_MAX), regex(path = *DATA_ACCESS_ROLE_ARN))]
    pub data_access_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identified_language_score: Option<Float>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub settings: Option<CallAnalyticsJobSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 2), nested)]
    pub channel_definitions: Option<Vec<ChannelDefinition>>,
}

fluent_record!(CallAnalyticsJob {
    with_call_analytics_job_name(call_analytics_job_name: String) => "CallAnalyticsJobName",
    with_call_analytics_job_status(call_analytics_job_status: CallAnalyticsJobStatus) => "CallAnalyticsJobStatus",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_media_sample_rate_hertz(media_sample_rate_hertz: i32) => "MediaSampleRateHertz",
    with_media_format(media_format: MediaFormat) => "MediaFormat",
    with_media(media: Media) => "Media",
    with_transcript(transcript: Transcript) => "Transcript",
    with_start_time(start_time: Timestamp) => "StartTime",
    with_creation_time(creation_time: Timestamp) => "CreationTime",
    with_completion_time(completion_time: Timestamp) => "CompletionTime",
    with_failure_reason(failure_reason: String) => "FailureReason",
    with_data_access_role_arn(data_access_role_arn: String) => "DataAccessRoleArn",
    with_identified_language_score(identified_language_score: Float) => "IdentifiedLanguageScore",
    with_settings(settings: CallAnalyticsJobSettings) => "Settings",
    with_channel_definitions(channel_definitions: Vec<ChannelDefinition>) => "ChannelDefinitions",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CallAnalyticsJobSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub call_analytics_job_name: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<Timestamp>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Timestamp>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_analytics_job_status: Option<CallAnalyticsJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

fluent_record!(CallAnalyticsJobSummary {
    with_call_analytics_job_name(call_analytics_job_name: String) => "CallAnalyticsJobName",
    with_creation_time(creation_time: Timestamp) => "CreationTime",
    with_start_time(start_time: Timestamp) => "StartTime",
    with_completion_time(completion_time: Timestamp) => "CompletionTime",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_call_analytics_job_status(call_analytics_job_status: CallAnalyticsJobStatus) => "CallAnalyticsJobStatus",
    with_failure_reason(failure_reason: String) => "FailureReason",
});
