use serde::{Deserialize, Serialize};
use validator::Validate;

use transcribe_domain::constraints::{
    ARN_MAX, ARN_MIN, DATA_ACCESS_ROLE_ARN, NAME_MAX, NEXT_TOKEN_MAX, PAGE_SIZE_MAX,
    RESOURCE_NAME, TAGS_MAX, URI, URI_MAX,
};
use transcribe_domain::{
    epoch_seconds, fluent_record, LanguageCode, Tag, Timestamp, VocabularyFilterInfo,
};

/// Creates a list of words to remove, mask or tag in transcripts. Words
/// come either inline or from `vocabulary_filter_file_uri`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVocabularyFilterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_filter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub words: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = URI_MAX), regex(path = *URI))]
    pub vocabulary_filter_file_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = TAGS_MAX), nested)]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = ARN_MIN, max = ARN_MAX), regex(path = *DATA_ACCESS_ROLE_ARN))]
    pub data_access_role_arn: Option<String>,
}

fluent_record!(CreateVocabularyFilterRequest {
    with_vocabulary_filter_name(vocabulary_filter_name: String) => "VocabularyFilterName",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_words(words: Vec<String>) => "Words",
    with_vocabulary_filter_file_uri(vocabulary_filter_file_uri: String) => "VocabularyFilterFileUri",
    with_tags(tags: Vec<Tag>) => "Tags",
    with_data_access_role_arn(data_access_role_arn: String) => "DataAccessRoleArn",
});

/// Outcome of creating or updating a vocabulary filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct VocabularyFilterResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_filter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<Timestamp>,
}

fluent_record!(VocabularyFilterResult {
    with_vocabulary_filter_name(vocabulary_filter_name: String) => "VocabularyFilterName",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_last_modified_time(last_modified_time: Timestamp) => "LastModifiedTime",
});

pub type CreateVocabularyFilterResult = VocabularyFilterResult;
pub type UpdateVocabularyFilterResult = VocabularyFilterResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct GetVocabularyFilterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_filter_name: Option<String>,
}

fluent_record!(GetVocabularyFilterRequest {
    with_vocabulary_filter_name(vocabulary_filter_name: String) => "VocabularyFilterName",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct GetVocabularyFilterResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_filter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = URI_MAX))]
    pub download_uri: Option<String>,
}

fluent_record!(GetVocabularyFilterResult {
    with_vocabulary_filter_name(vocabulary_filter_name: String) => "VocabularyFilterName",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_last_modified_time(last_modified_time: Timestamp) => "LastModifiedTime",
    with_download_uri(download_uri: String) => "DownloadUri",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ListVocabularyFiltersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = NEXT_TOKEN_MAX))]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = PAGE_SIZE_MAX))]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub name_contains: Option<String>,
}

fluent_record!(ListVocabularyFiltersRequest {
    with_next_token(next_token: String) => "NextToken",
    with_max_results(max_results: i32) => "MaxResults",
    with_name_contains(name_contains: String) => "NameContains",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ListVocabularyFiltersResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = NEXT_TOKEN_MAX))]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub vocabulary_filters: Option<Vec<VocabularyFilterInfo>>,
}

fluent_record!(ListVocabularyFiltersResult {
    with_next_token(next_token: String) => "NextToken",
    with_vocabulary_filters(vocabulary_filters: Vec<VocabularyFilterInfo>) => "VocabularyFilters",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateVocabularyFilterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_filter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub words: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = URI_MAX), regex(path = *URI))]
    pub vocabulary_filter_file_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = ARN_MIN, max = ARN_MAX), regex(path = *DATA_ACCESS_ROLE_ARN))]
    pub data_access_role_arn: Option<String>,
}

fluent_record!(UpdateVocabularyFilterRequest {
    with_vocabulary_filter_name(vocabulary_filter_name: String) => "VocabularyFilterName",
    with_words(words: Vec<String>) => "Words",
    with_vocabulary_filter_file_uri(vocabulary_filter_file_uri: String) => "VocabularyFilterFileUri",
    with_data_access_role_arn(data_access_role_arn: String) => "DataAccessRoleArn",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteVocabularyFilterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_filter_name: Option<String>,
}

fluent_record!(DeleteVocabularyFilterRequest {
    with_vocabulary_filter_name(vocabulary_filter_name: String) => "VocabularyFilterName",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct DeleteVocabularyFilterResult {}

fluent_record!(DeleteVocabularyFilterResult {});
