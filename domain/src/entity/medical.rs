use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constraints::{
    ARN_MAX, ARN_MIN, DATA_ACCESS_ROLE_ARN, NAME_MAX, RESOURCE_NAME, TAGS_MAX,
};
use crate::time::{epoch_seconds, Timestamp};
use crate::{
    LanguageCode, Media, MediaFormat, MedicalContentIdentificationType,
    MedicalScribeChannelDefinition, MedicalScribeJobStatus, MedicalScribeLanguageCode,
    MedicalScribeOutput, MedicalScribeSettings, MedicalTranscript, MedicalTranscriptionSetting,
    MedicalTranscriptionType, OutputLocationType, Specialty, Tag, TranscriptionJobStatus,
};

/// A medical transcription job. Medical jobs only accept US English and
/// media sampled at 16 kHz or more.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalTranscriptionJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub medical_transcription_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_job_status: Option<TranscriptionJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 16000, max = 48000))]
    pub media_sample_rate_hertz: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_format: Option<MediaFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub media: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub transcript: Option<MedicalTranscript>,
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
    pub settings: Option<MedicalTranscriptionSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_identification_type: Option<MedicalContentIdentificationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<Specialty>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MedicalTranscriptionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = TAGS_MAX), nested)]
    pub tags: Option<Vec<Tag>>,
}

fluent_record!(MedicalTranscriptionJob {
    with_medical_transcription_job_name(medical_transcription_job_name: String) => "MedicalTranscriptionJobName",
    with_transcription_job_status(transcription_job_status: TranscriptionJobStatus) => "TranscriptionJobStatus",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_media_sample_rate_hertz(media_sample_rate_hertz: i32) => "MediaSampleRateHertz",
    with_media_format(media_format: MediaFormat) => "MediaFormat",
    with_media(media: Media) => "Media",
    with_transcript(transcript: MedicalTranscript) => "Transcript",
    with_start_time(start_time: Timestamp) => "StartTime",
    with_creation_time(creation_time: Timestamp) => "CreationTime",
    with_completion_time(completion_time: Timestamp) => "CompletionTime",
    with_failure_reason(failure_reason: String) => "FailureReason",
    with_settings(settings: MedicalTranscriptionSetting) => "Settings",
    with_content_identification_type(content_identification_type: MedicalContentIdentificationType) => "ContentIdentificationType",
    with_specialty(specialty: Specialty) => "Specialty",
    with_type(kind: MedicalTranscriptionType) => "Type",
    with_tags(tags: Vec<Tag>) => "Tags",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalTranscriptionJobSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub medical_transcription_job_name: Option<String>,
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
    pub specialty: Option<Specialty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_identification_type: Option<MedicalContentIdentificationType>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MedicalTranscriptionType>,
}

fluent_record!(MedicalTranscriptionJobSummary {
    with_medical_transcription_job_name(medical_transcription_job_name: String) => "MedicalTranscriptionJobName",
    with_creation_time(creation_time: Timestamp) => "CreationTime",
    with_start_time(start_time: Timestamp) => "StartTime",
    with_completion_time(completion_time: Timestamp) => "CompletionTime",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_transcription_job_status(transcription_job_status: TranscriptionJobStatus) => "TranscriptionJobStatus",
    with_failure_reason(failure_reason: String) => "FailureReason",
    with_output_location_type(output_location_type: OutputLocationType) => "OutputLocationType",
    with_specialty(specialty: Specialty) => "Specialty",
    with_content_identification_type(content_identification_type: MedicalContentIdentificationType) => "ContentIdentificationType",
    with_type(kind: MedicalTranscriptionType) => "Type",
});

/// A Medical Scribe job: a transcript of a patient-clinician conversation
/// plus a generated clinical note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalScribeJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub medical_scribe_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_scribe_job_status: Option<MedicalScribeJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<MedicalScribeLanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub media: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub medical_scribe_output: Option<MedicalScribeOutput>,
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
    pub settings: Option<MedicalScribeSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = ARN_MIN, max = ARN_MAX), regex(path = *DATA_ACCESS_ROLE_ARN))]
    pub data_access_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 2), nested)]
    pub channel_definitions: Option<Vec<MedicalScribeChannelDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = TAGS_MAX), nested)]
    pub tags: Option<Vec<Tag>>,
}

fluent_record!(MedicalScribeJob {
    with_medical_scribe_job_name(medical_scribe_job_name: String) => "MedicalScribeJobName",
    with_medical_scribe_job_status(medical_scribe_job_status: MedicalScribeJobStatus) => "MedicalScribeJobStatus",
    with_language_code(language_code: MedicalScribeLanguageCode) => "LanguageCode",
    with_media(media: Media) => "Media",
    with_medical_scribe_output(medical_scribe_output: MedicalScribeOutput) => "MedicalScribeOutput",
    with_start_time(start_time: Timestamp) => "StartTime",
    with_creation_time(creation_time: Timestamp) => "CreationTime",
    with_completion_time(completion_time: Timestamp) => "CompletionTime",
    with_failure_reason(failure_reason: String) => "FailureReason",
    with_settings(settings: MedicalScribeSettings) => "Settings",
    with_data_access_role_arn(data_access_role_arn: String) => "DataAccessRoleArn",
    with_channel_definitions(channel_definitions: Vec<MedicalScribeChannelDefinition>) => "ChannelDefinitions",
    with_tags(tags: Vec<Tag>) => "Tags",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalScribeJobSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub medical_scribe_job_name: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<Timestamp>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Timestamp>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<MedicalScribeLanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_scribe_job_status: Option<MedicalScribeJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

fluent_record!(MedicalScribeJobSummary {
    with_medical_scribe_job_name(medical_scribe_job_name: String) => "MedicalScribeJobName",
    with_creation_time(creation_time: Timestamp) => "CreationTime",
    with_start_time(start_time: Timestamp) => "StartTime",
    with_completion_time(completion_time: Timestamp) => "CompletionTime",
    with_language_code(language_code: MedicalScribeLanguageCode) => "LanguageCode",
    with_medical_scribe_job_status(medical_scribe_job_status: MedicalScribeJobStatus) => "MedicalScribeJobStatus",
    with_failure_reason(failure_reason: String) => "FailureReason",
});
