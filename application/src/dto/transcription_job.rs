use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use transcribe_domain::constraints::{
    KMS_CONTEXT_MAX, KMS_KEY_ID, KMS_KEY_ID_MAX, NAME_MAX, NEXT_TOKEN_MAX, OUTPUT_BUCKET_MAX,
    OUTPUT_BUCKET_NAME, OUTPUT_KEY, OUTPUT_KEY_MAX, PAGE_SIZE_MAX, RESOURCE_NAME, TAGS_MAX,
};
use transcribe_domain::{
    fluent_record, ContentRedaction, JobExecutionSettings, LanguageCode, LanguageIdSettingsMap,
    Media, MediaFormat, ModelSettings, Settings, Subtitles, Tag, ToxicityDetectionSettings,
    TranscriptionJob, TranscriptionJobStatus, TranscriptionJobSummary,
};

/// Submits media for standard transcription.
///
/// Give either `language_code`, or turn on `identify_language` /
/// `identify_multiple_languages`. Without `output_bucket_name` the
/// transcript lands in a service-managed bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct StartTranscriptionJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub transcription_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 8000, max = 48000))]
    pub media_sample_rate_hertz: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_format: Option<MediaFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, nested)]
    pub media: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = OUTPUT_BUCKET_MAX), regex(path = *OUTPUT_BUCKET_NAME))]
    pub output_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = OUTPUT_KEY_MAX), regex(path = *OUTPUT_KEY))]
    pub output_key: Option<String>,
    #[serde(rename = "OutputEncryptionKMSKeyId", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = KMS_KEY_ID_MAX), regex(path = *KMS_KEY_ID))]
    pub output_encryption_kms_key_id: Option<String>,
    #[serde(rename = "KMSEncryptionContext", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = KMS_CONTEXT_MAX))]
    pub kms_encryption_context: Option<BTreeMap<String, String>>,
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
    #[validate(nested)]
    pub subtitles: Option<Subtitles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = TAGS_MAX), nested)]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 5), nested)]
    pub language_id_settings: Option<LanguageIdSettingsMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 1), nested)]
    pub toxicity_detection: Option<Vec<ToxicityDetectionSettings>>,
}

fluent_record!(StartTranscriptionJobRequest {
    with_transcription_job_name(transcription_job_name: String) => "TranscriptionJobName",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_media_sample_rate_hertz(media_sample_rate_hertz: i32) => "MediaSampleRateHertz",
    with_media_format(media_format: MediaFormat) => "MediaFormat",
    with_media(media: Media) => "Media",
    with_output_bucket_name(output_bucket_name: String) => "OutputBucketName",
    with_output_key(output_key: String) => "OutputKey",
    with_output_encryption_kms_key_id(output_encryption_kms_key_id: String) => "OutputEncryptionKMSKeyId",
    with_kms_encryption_context(kms_encryption_context: BTreeMap<String, String>) => "KMSEncryptionContext",
    with_settings(settings: Settings) => "Settings",
    with_model_settings(model_settings: ModelSettings) => "ModelSettings",
    with_job_execution_settings(job_execution_settings: JobExecutionSettings) => "JobExecutionSettings",
    with_content_redaction(content_redaction: ContentRedaction) => "ContentRedaction",
    with_identify_language(identify_language: bool) => "IdentifyLanguage",
    with_identify_multiple_languages(identify_multiple_languages: bool) => "IdentifyMultipleLanguages",
    with_language_options(language_options: Vec<LanguageCode>) => "LanguageOptions",
    with_subtitles(subtitles: Subtitles) => "Subtitles",
    with_tags(tags: Vec<Tag>) => "Tags",
    with_language_id_settings(language_id_settings: LanguageIdSettingsMap) => "LanguageIdSettings",
    with_toxicity_detection(toxicity_detection: Vec<ToxicityDetectionSettings>) => "ToxicityDetection",
});

/// Result of starting or fetching a transcription job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct TranscriptionJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub transcription_job: Option<TranscriptionJob>,
}

fluent_record!(TranscriptionJobResult {
    with_transcription_job(transcription_job: TranscriptionJob) => "TranscriptionJob",
});

pub type StartTranscriptionJobResult = TranscriptionJobResult;
pub type GetTranscriptionJobResult = TranscriptionJobResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct GetTranscriptionJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub transcription_job_name: Option<String>,
}

fluent_record!(GetTranscriptionJobRequest {
    with_transcription_job_name(transcription_job_name: String) => "TranscriptionJobName",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ListTranscriptionJobsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TranscriptionJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub job_name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = NEXT_TOKEN_MAX))]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = PAGE_SIZE_MAX))]
    pub max_results: Option<i32>,
}

fluent_record!(ListTranscriptionJobsRequest {
    with_status(status: TranscriptionJobStatus) => "Status",
    with_job_name_contains(job_name_contains: String) => "JobNameContains",
    with_next_token(next_token: String) => "NextToken",
    with_max_results(max_results: i32) => "MaxResults",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ListTranscriptionJobsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TranscriptionJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = NEXT_TOKEN_MAX))]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub transcription_job_summaries: Option<Vec<TranscriptionJobSummary>>,
}

fluent_record!(ListTranscriptionJobsResult {
    with_status(status: TranscriptionJobStatus) => "Status",
    with_next_token(next_token: String) => "NextToken",
    with_transcription_job_summaries(transcription_job_summaries: Vec<TranscriptionJobSummary>) => "TranscriptionJobSummaries",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteTranscriptionJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub transcription_job_name: Option<String>,
}

fluent_record!(DeleteTranscriptionJobRequest {
    with_transcription_job_name(transcription_job_name: String) => "TranscriptionJobName",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct DeleteTranscriptionJobResult {}

fluent_record!(DeleteTranscriptionJobResult {});
