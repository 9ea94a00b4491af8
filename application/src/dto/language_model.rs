use serde::{Deserialize, Serialize};
use validator::Validate;

use transcribe_domain::constraints::{NAME_MAX, NEXT_TOKEN_MAX, PAGE_SIZE_MAX, RESOURCE_NAME, TAGS_MAX};
use transcribe_domain::{
    fluent_record, BaseModelName, ClmLanguageCode, InputDataConfig, LanguageModel, ModelStatus,
    Tag,
};

/// Trains a custom language model from text in S3.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLanguageModelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub language_code: Option<ClmLanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub base_model_name: Option<BaseModelName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, nested)]
    pub input_data_config: Option<InputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = TAGS_MAX), nested)]
    pub tags: Option<Vec<Tag>>,
}

fluent_record!(CreateLanguageModelRequest {
    with_language_code(language_code: ClmLanguageCode) => "LanguageCode",
    with_base_model_name(base_model_name: BaseModelName) => "BaseModelName",
    with_model_name(model_name: String) => "ModelName",
    with_input_data_config(input_data_config: InputDataConfig) => "InputDataConfig",
    with_tags(tags: Vec<Tag>) => "Tags",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLanguageModelResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<ClmLanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_model_name: Option<BaseModelName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub input_data_config: Option<InputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_status: Option<ModelStatus>,
}

fluent_record!(CreateLanguageModelResult {
    with_language_code(language_code: ClmLanguageCode) => "LanguageCode",
    with_base_model_name(base_model_name: BaseModelName) => "BaseModelName",
    with_model_name(model_name: String) => "ModelName",
    with_input_data_config(input_data_config: InputDataConfig) => "InputDataConfig",
    with_model_status(model_status: ModelStatus) => "ModelStatus",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLanguageModelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub model_name: Option<String>,
}

fluent_record!(DescribeLanguageModelRequest {
    with_model_name(model_name: String) => "ModelName",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLanguageModelResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub language_model: Option<LanguageModel>,
}

fluent_record!(DescribeLanguageModelResult {
    with_language_model(language_model: LanguageModel) => "LanguageModel",
});

/// Lists custom language models, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ListLanguageModelsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_equals: Option<ModelStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = NEXT_TOKEN_MAX))]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = PAGE_SIZE_MAX))]
    pub max_results: Option<i32>,
}

fluent_record!(ListLanguageModelsRequest {
    with_status_equals(status_equals: ModelStatus) => "StatusEquals",
    with_name_contains(name_contains: String) => "NameContains",
    with_next_token(next_token: String) => "NextToken",
    with_max_results(max_results: i32) => "MaxResults",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ListLanguageModelsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = NEXT_TOKEN_MAX))]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub models: Option<Vec<LanguageModel>>,
}

fluent_record!(ListLanguageModelsResult {
    with_next_token(next_token: String) => "NextToken",
    with_models(models: Vec<LanguageModel>) => "Models",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteLanguageModelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub model_name: Option<String>,
}

fluent_record!(DeleteLanguageModelRequest {
    with_model_name(model_name: String) => "ModelName",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct DeleteLanguageModelResult {}

fluent_record!(DeleteLanguageModelResult {});
