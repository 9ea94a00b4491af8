use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constraints::{NAME_MAX, RESOURCE_NAME};
use crate::time::{epoch_seconds, Timestamp};
use crate::{LanguageCode, VocabularyState};

/// Row of `ListVocabularies` and `ListMedicalVocabularies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct VocabularyInfo {
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

fluent_record!(VocabularyInfo {
    with_vocabulary_name(vocabulary_name: String) => "VocabularyName",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_last_modified_time(last_modified_time: Timestamp) => "LastModifiedTime",
    with_vocabulary_state(vocabulary_state: VocabularyState) => "VocabularyState",
});

/// Row of `ListVocabularyFilters`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct VocabularyFilterInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_filter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<Timestamp>,
}

fluent_record!(VocabularyFilterInfo {
    with_vocabulary_filter_name(vocabulary_filter_name: String) => "VocabularyFilterName",
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_last_modified_time(last_modified_time: Timestamp) => "LastModifiedTime",
});
