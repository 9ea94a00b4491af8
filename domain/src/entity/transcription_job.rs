use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constraints::{NAME_MAX, RESOURCE_NAME, TAGS_MAX};
use crate::time::{epoch_seconds, Timestamp};
use crate::{
    ContentRedaction, Float, JobExecutionSettings, LanguageCode, LanguageCodeItem,
    LanguageIdSettingsMap, Media, MediaFormat, ModelSettings, OutputLocationType, Settings,
    SubtitlesOutput, Tag, ToxicityDetectionSettings, Transcript, TranscriptionJobStatus,
};

/// Full description of a standard transcription job as returned by
/// `GetTranscriptionJob` and `StartTranscriptionJob`.
///
/// `language_code` is set when the language was given up front or once
/// identification finished; `language_codes` lists every language found
/// when `identify_multiple_languages` was requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct TranscriptionJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub transcription_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_job_status: Option<TranscriptionJobStatus>,
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
    #[validate(nested)]
    pub settings: Option<Settings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub model_settings: Option<ModelSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub job_execution_settings: Option<JobExecutionSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub content_redaction: Option<ContentRedaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identify_language: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identify_multiple_languages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub language_options: Option<Vec<LanguageCode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identified_language_score: Option<Float>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_codes: Option<Vec<LanguageCodeItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = TAGS_MAX), nested)]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub subtitles: Option<SubtitlesOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 5), nested)]
    pub language_id_settings: Option<LanguageIdSettingsMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 1), nested)]
    pub toxicity_detection: Option<Vec<ToxicityDetectionSettings>>,
}

fluent_record!(TranscriptionJob {
    with_transcription_job_name(transcription_job_name: String) => "TranscriptionJobName",
    with_transcription_job_status(transcription_job_status: TranscriptionJobStatus) => "TranscriptionJobStatus",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_media_sample_rate_hertz(media_sample_rate_hertz: i32) => "MediaSampleRateHertz",
    with_media_format(media_format: MediaFormat) => "MediaFormat",
    with_media(media: Media) => "Media",
    with_transcript(transcript: Transcript) => "Transcript",
    with_start_time(start_time: Timestamp) => "StartTime",
    with_creation_time(creation_time: Timestamp) => "CreationTime",
    with_completion_time(completion_time: Timestamp) => "CompletionTime",
    with_failure_reason(failure_reason: String) => "FailureReason",
    with_settings(settings: Settings) => "Settings",
    with_model_settings(model_settings: ModelSettings) => "ModelSettings",
    with_job_execution_settings(job_execution_settings: JobExecutionSettings) => "JobExecutionSettings",
    with_content_redaction(content_redaction: ContentRedaction) => "ContentRedaction",
    with_identify_language(identify_language: bool) => "IdentifyLanguage",
    with_identify_multiple_languages(identify_multiple_languages: bool) => "IdentifyMultipleLanguages",
    with_language_options(language_options: Vec<LanguageCode>) => "LanguageOptions",
    with_identified_language_score(identified_language_score: Float) => "IdentifiedLanguageScore",
    with_language_codes(language_codes: Vec<LanguageCodeItem>) => "LanguageCodes",
    with_tags(tags: Vec<Tag>) => "Tags",
    with_subtitles(subtitles: SubtitlesOutput) => "Subtitles",
    with_language_id_settings(language_id_settings: LanguageIdSettingsMap) => "LanguageIdSettings",
    with_toxicity_detection(toxicity_detection: Vec<ToxicityDetectionSettings>) => "ToxicityDetection",
});

/// Row of `ListTranscriptionJobs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct TranscriptionJobSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub transcription_job_name: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<Timestamp>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Timestamp>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_job_status: Option<TranscriptionJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_location_type: Option<OutputLocationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub content_redaction: Option<ContentRedaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub model_settings: Option<ModelSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identify_language: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identify_multiple_languages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identified_language_score: Option<Float>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_codes: Option<Vec<LanguageCodeItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 1), nested)]
    pub toxicity_detection: Option<Vec<ToxicityDetectionSettings>>,
}

fluent_record!(TranscriptionJobSummary {
    with_transcription_job_name(transcription_job_name: String) => "TranscriptionJobName",
    with_creation_time(creation_time: Timestamp) => "CreationTime",
    with_start_time(start_time: Timestamp) => "StartTime",
    with_completion_time(completion_time: Timestamp) => "CompletionTime",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_transcription_job_status(transcription_job_status: TranscriptionJobStatus) => "TranscriptionJobStatus",
    with_failure_reason(failure_reason: String) => "FailureReason",
    with_output_location_type(output_location_type: OutputLocationType) => "OutputLocationType",
    with_content_redaction(content_redaction: ContentRedaction) => "ContentRedaction",
    with_model_settings(model_settings: ModelSettings) => "ModelSettings",
    with_identify_language(identify_language: bool) => "IdentifyLanguage",
    with_identify_multiple_languages(identify_multiple_languages: bool) => "IdentifyMultipleLanguages",
    with_identified_language_score(identified_language_score: Float) => "IdentifiedLanguageScore",
    with_language_codes(language_codes: Vec<LanguageCodeItem>) => "LanguageCodes",
    with_toxicity_detection(toxicity_detection: Vec<ToxicityDetectionSettings>) => "ToxicityDetection",
});
