use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use transcribe_domain::constraints::{
    KMS_CONTEXT_MAX, KMS_KEY_ID, KMS_KEY_ID_MAX, NAME_MAX, NEXT_TOKEN_MAX, OUTPUT_BUCKET_MAX,
    OUTPUT_BUCKET_NAME, OUTPUT_KEY, OUTPUT_KEY_MAX, PAGE_SIZE_MAX, RESOURCE_NAME, TAGS_MAX,
};
use transcribe_domain::{
    fluent_record, LanguageCode, Media, MediaFormat, MedicalContentIdentificationType,
    MedicalTranscriptionJob, MedicalTranscriptionJobSummary, MedicalTranscriptionSetting,
    MedicalTranscriptionType, Specialty, Tag, TranscriptionJobStatus,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct StartMedicalTranscriptionJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub medical_transcription_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 16000, max = 48000))]
    pub media_sample_rate_hertz: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_format: Option<MediaFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, nested)]
    pub media: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(max = OUTPUT_BUCKET_MAX), regex(path = *OUTPUT_BUCKET_NAME))]
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
    pub settings: Option<MedicalTranscriptionSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_identification_type: Option<MedicalContentIdentificationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub specialty: Option<Specialty>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub kind: Option<MedicalTranscriptionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = TAGS_MAX), nested)]
    pub tags: Option<Vec<Tag>>,
}

fluent_record!(StartMedicalTranscriptionJobRequest {
    with_medical_transcription_job_name(medical_transcription_job_name: String) => "MedicalTranscriptionJobName",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_media_sample_rate_hertz(media_sample_rate_hertz: i32) => "MediaSampleRateHertz",
    with_media_format(media_format: MediaFormat) => "MediaFormat",
    with_media(media: Media) => "Media",
    with_output_bucket_name(output_bucket_name: String) => "OutputBucketName",
    with_output_key(output_key: String) => "OutputKey",
    with_output_encryption_kms_key_id(output_encryption_kms_key_id: String) => "OutputEncryptionKMSKeyId",
    with_kms_encryption_context(kms_encryption_context: BTreeMap<String, String>) => "KMSEncryptionContext",
    with_settings(settings: MedicalTranscriptionSetting) => "Settings",
    with_content_identification_type(content_identification_type: MedicalContentIdentificationType) => "ContentIdentificationType",
    with_specialty(specialty: Specialty) => "Specialty",
    with_type(kind: MedicalTranscriptionType) => "Type",
    with_tags(tags: Vec<Tag>) => "Tags",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalTranscriptionJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub medical_transcription_job: Option<MedicalTranscriptionJob>,
}

fluent_record!(MedicalTranscriptionJobResult {
    with_medical_transcription_job(medical_transcription_job: MedicalTranscriptionJob) => "MedicalTranscriptionJob",
});

pub type StartMedicalTranscriptionJobResult = MedicalTranscriptionJobResult;
pub type GetMedicalTranscriptionJobResult = MedicalTranscriptionJobResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct GetMedicalTranscriptionJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub medical_transcription_job_name: Option<String>,
}

fluent_record!(GetMedicalTranscriptionJobRequest {
    with_medical_transcription_job_name(medical_transcription_job_name: String) => "MedicalTranscriptionJobName",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ListMedicalTranscriptionJobsRequest {
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

fluent_record!(ListMedicalTranscriptionJobsRequest {
    with_status(status: TranscriptionJobStatus) => "Status",
    with_job_name_contains(job_name_contains: String) => "JobNameContains",
    with_next_token(next_token: String) => "NextToken",
    with_max_results(max_results: i32) => "MaxResults",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ListMedicalTranscriptionJobsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TranscriptionJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = NEXT_TOKEN_MAX))]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub medical_transcription_job_summaries: Option<Vec<MedicalTranscriptionJobSummary>>,
}

fluent_record!(ListMedicalTranscriptionJobsResult {
    with_status(status: TranscriptionJobStatus) => "Status",
    with_next_token(next_token: String) => "NextToken",
    with_medical_transcription_job_summaries(medical_transcription_job_summaries: Vec<MedicalTranscriptionJobSummary>) => "MedicalTranscriptionJobSummaries",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteMedicalTranscriptionJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub medical_transcription_job_name: Option<String>,
}

fluent_record!(DeleteMedicalTranscriptionJobRequest {
    with_medical_transcription_job_name(medical_transcription_job_name: String) => "MedicalTranscriptionJobName",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct DeleteMedicalTranscriptionJobResult {}

fluent_record!(DeleteMedicalTranscriptionJobResult {});
