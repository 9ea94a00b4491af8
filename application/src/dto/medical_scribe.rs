use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use transcribe_domain::constraints::{
    ARN_MAX, ARN_MIN, DATA_ACCESS_ROLE_ARN, KMS_CONTEXT_MAX, KMS_KEY_ID, KMS_KEY_ID_MAX,
    NAME_MAX, NEXT_TOKEN_MAX, OUTPUT_BUCKET_MAX, OUTPUT_BUCKET_NAME, PAGE_SIZE_MAX,
    RESOURCE_NAME, TAGS_MAX,
};
use transcribe_domain::{
    fluent_record, Media, MedicalScribeChannelDefinition, MedicalScribeJob,
    MedicalScribeJobStatus, MedicalScribeJobSummary, MedicalScribeSettings, Tag,
};

/// Submits a patient-clinician conversation for Medical Scribe. The
/// service needs `data_access_role_arn` to write into `output_bucket_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct StartMedicalScribeJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub medical_scribe_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, nested)]
    pub media: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(max = OUTPUT_BUCKET_MAX), regex(path = *OUTPUT_BUCKET_NAME))]
    pub output_bucket_name: Option<String>,
    #[serde(rename = "OutputEncryptionKMSKeyId", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = KMS_KEY_ID_MAX), regex(path = *KMS_KEY_ID))]
    pub output_encryption_kms_key_id: Option<String>,
    #[serde(rename = "KMSEncryptionContext", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = KMS_CONTEXT_MAX))]
    pub kms_encryption_context: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = ARN_MIN, max = ARN_MAX), regex(path = *DATA_ACCESS_ROLE_ARN))]
    pub data_access_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, nested)]
    pub settings: Option<MedicalScribeSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 2), nested)]
    pub channel_definitions: Option<Vec<MedicalScribeChannelDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = TAGS_MAX), nested)]
    pub tags: Option<Vec<Tag>>,
}

fluent_record!(StartMedicalScribeJobRequest {
    with_medical_scribe_job_name(medical_scribe_job_name: String) => "MedicalScribeJobName",
    with_media(media: Media) => "Media",
    with_output_bucket_name(output_bucket_name: String) => "OutputBucketName",
    with_output_encryption_kms_key_id(output_encryption_kms_key_id: String) => "OutputEncryptionKMSKeyId",
    with_kms_encryption_context(kms_encryption_context: BTreeMap<String, String>) => "KMSEncryptionContext",
    with_data_access_role_arn(data_access_role_arn: String) => "DataAccessRoleArn",
    with_settings(settings: MedicalScribeSettings) => "Settings",
    with_channel_definitions(channel_definitions: Vec<MedicalScribeChannelDefinition>) => "ChannelDefinitions",
    with_tags(tags: Vec<Tag>) => "Tags",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalScribeJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub medical_scribe_job: Option<MedicalScribeJob>,
}

fluent_record!(MedicalScribeJobResult {
    with_medical_scribe_job(medical_scribe_job: MedicalScribeJob) => "MedicalScribeJob",
});

pub type StartMedicalScribeJobResult = MedicalScribeJobResult;
pub type GetMedicalScribeJobResult = MedicalScribeJobResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct GetMedicalScribeJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub medical_scribe_job_name: Option<String>,
}

fluent_record!(GetMedicalScribeJobRequest {
    with_medical_scribe_job_name(medical_scribe_job_name: String) => "MedicalScribeJobName",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ListMedicalScribeJobsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MedicalScribeJobStatus>,
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

fluent_record!(ListMedicalScribeJobsRequest {
    with_status(status: MedicalScribeJobStatus) => "Status",
    with_job_name_contains(job_name_contains: String) => "JobNameContains",
    with_next_token(next_token: String) => "NextToken",
    with_max_results(max_results: i32) => "MaxResults",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ListMedicalScribeJobsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MedicalScribeJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = NEXT_TOKEN_MAX))]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub medical_scribe_job_summaries: Option<Vec<MedicalScribeJobSummary>>,
}

fluent_record!(ListMedicalScribeJobsResult {
    with_status(status: MedicalScribeJobStatus) => "Status",
    with_next_token(next_token: String) => "NextToken",
    with_medical_scribe_job_summaries(medical_scribe_job_summaries: Vec<MedicalScribeJobSummary>) => "MedicalScribeJobSummaries",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteMedicalScribeJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub medical_scribe_job_name: Option<String>,
}

fluent_record!(DeleteMedicalScribeJobRequest {
    with_medical_scribe_job_name(medical_scribe_job_name: String) => "MedicalScribeJobName",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct DeleteMedicalScribeJobResult {}

fluent_record!(DeleteMedicalScribeJobResult {});
