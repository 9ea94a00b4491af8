use serde::{Deserialize, Serialize};
use validator::Validate;

use transcribe_domain::constraints::{
    ARN_MAX, ARN_MIN, DATA_ACCESS_ROLE_ARN, NAME_MAX, NEXT_TOKEN_MAX, PAGE_SIZE_MAX,
    RESOURCE_NAME, TAGS_MAX, URI, URI_MAX,
};
use transcribe_domain::{
    epoch_seconds, fluent_record, LanguageCode, Tag, Timestamp, VocabularyInfo, VocabularyState,
};

/// Creates a custom vocabulary from inline `phrases` or a file at
/// `vocabulary_file_uri`. Supply one or the other, not both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVocabularyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phrases: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = URI_MAX), regex(path = *URI))]
    pub vocabulary_file_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = TAGS_MAX), nested)]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = ARN_MIN, max = ARN_MAX), regex(path = *DATA_ACCESS_ROLE_ARN))]
    pub data_access_role_arn: Option<String>,
}

fluent_record!(CreateVocabularyRequest {
    with_vocabulary_name(vocabulary_name: String) => "VocabularyName",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_phrases(phrases: Vec<String>) => "Phrases",
    with_vocabulary_file_uri(vocabulary_file_uri: String) => "VocabularyFileUri",
    with_tags(tags: Vec<Tag>) => "Tags",
    with_data_access_role_arn(data_access_role_arn: String) => "DataAccessRoleArn",
});

/// Outcome of creating a standard or medical vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVocabularyResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_state: Option<VocabularyState>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

fluent_record!(CreateVocabularyResult {
    with_vocabulary_name(vocabulary_name: String) => "VocabularyName",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_vocabulary_state(vocabulary_state: VocabularyState) => "VocabularyState",
    with_last_modified_time(last_modified_time: Timestamp) => "LastModifiedTime",
    with_failure_reason(failure_reason: String) => "FailureReason",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct GetVocabularyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_name: Option<String>,
}

fluent_record!(GetVocabularyRequest {
    with_vocabulary_name(vocabulary_name: String) => "VocabularyName",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct GetVocabularyResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_state: Option<VocabularyState>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// Pre-signed location of the vocabulary file.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = URI_MAX))]
    pub download_uri: Option<String>,
}

fluent_record!(GetVocabularyResult {
    with_vocabulary_name(vocabulary_name: String) => "VocabularyName",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_vocabulary_state(vocabulary_state: VocabularyState) => "VocabularyState",
    with_last_modified_time(last_modified_time: Timestamp) => "LastModifiedTime",
    with_failure_reason(failure_reason: String) => "FailureReason",
    with_download_uri(download_uri: String) => "DownloadUri",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ListVocabulariesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = NEXT_TOKEN_MAX))]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = PAGE_SIZE_MAX))]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_equals: Option<VocabularyState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub name_contains: Option<String>,
}

fluent_record!(ListVocabulariesRequest {
    with_next_token(next_token: String) => "NextToken",
    with_max_results(max_results: i32) => "MaxResults",
    with_state_equals(state_equals: VocabularyState) => "StateEquals",
    with_name_contains(name_contains: String) => "NameContains",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ListVocabulariesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VocabularyState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = NEXT_TOKEN_MAX))]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub vocabularies: Option<Vec<VocabularyInfo>>,
}

fluent_record!(ListVocabulariesResult {
    with_status(status: VocabularyState) => "Status",
    with_next_token(next_token: String) => "NextToken",
    with_vocabularies(vocabularies: Vec<VocabularyInfo>) => "Vocabularies",
});

/// Replaces the contents of an existing custom vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateVocabularyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phrases: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = URI_MAX), regex(path = *URI))]
    pub vocabulary_file_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = ARN_MIN, max = ARN_MAX), regex(path = *DATA_ACCESS_ROLE_ARN))]
    pub data_access_role_arn: Option<String>,
}

fluent_record!(UpdateVocabularyRequest {
    with_vocabulary_name(vocabulary_name: String) => "VocabularyName",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_phrases(phrases: Vec<String>) => "Phrases",
    with_vocabulary_file_uri(vocabulary_file_uri: String) => "VocabularyFileUri",
    with_data_access_role_arn(data_access_role_arn: String) => "DataAccessRoleArn",
});

/// Outcome of updating a standard or medical vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateVocabularyResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_state: Option<VocabularyState>,
}

fluent_record!(UpdateVocabularyResult {
    with_vocabulary_name(vocabulary_name: String) => "VocabularyName",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_last_modified_time(last_modified_time: Timestamp) => "LastModifiedTime",
    with_vocabulary_state(vocabulary_state: VocabularyState) => "VocabularyState",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteVocabularyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_name: Option<String>,
}

fluent_record!(DeleteVocabularyRequest {
    with_vocabulary_name(vocabulary_name: String) => "VocabularyName",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct DeleteVocabularyResult {}

fluent_record!(DeleteVocabularyResult {});

/// Medical vocabularies are always read from a file and only support
/// `en-US`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMedicalVocabularyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = URI_MAX), regex(path = *URI))]
    pub vocabulary_file_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = TAGS_MAX), nested)]
    pub tags: Option<Vec<Tag>>,
}

fluent_record!(CreateMedicalVocabularyRequest {
    with_vocabulary_name(vocabulary_name: String) => "VocabularyName",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_vocabulary_file_uri(vocabulary_file_uri: String) => "VocabularyFileUri",
    with_tags(tags: Vec<Tag>) => "Tags",
});

pub type CreateMedicalVocabularyResult = CreateVocabularyResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct GetMedicalVocabularyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_name: Option<String>,
}

fluent_record!(GetMedicalVocabularyRequest {
    with_vocabulary_name(vocabulary_name: String) => "VocabularyName",
});

pub type GetMedicalVocabularyResult = GetVocabularyResult;
pub type ListMedicalVocabulariesResult = ListVocabulariesResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ListMedicalVocabulariesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = NEXT_TOKEN_MAX))]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = PAGE_SIZE_MAX))]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_equals: Option<VocabularyState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub name_contains: Option<String>,
}

fluent_record!(ListMedicalVocabulariesRequest {
    with_next_token(next_token: String) => "NextToken",
    with_max_results(max_results: i32) => "MaxResults",
    with_state_equals(state_equals: VocabularyState) => "StateEquals",
    with_name_contains(name_contains: String) => "NameContains",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateMedicalVocabularyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = URI_MAX), regex(path = *URI))]
    pub vocabulary_file_uri: Option<String>,
}

fluent_record!(UpdateMedicalVocabularyRequest {
    with_vocabulary_name(vocabulary_name: String) => "VocabularyName",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_vocabulary_file_uri(vocabulary_file_uri: String) => "VocabularyFileUri",
});

pub type UpdateMedicalVocabularyResult = UpdateVocabularyResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteMedicalVocabularyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_name: Option<String>,
}

fluent_record!(DeleteMedicalVocabularyRequest {
    with_vocabulary_name(vocabulary_name: String) => "VocabularyName",
});

pub type DeleteMedicalVocabularyResult = DeleteVocabularyResult;
