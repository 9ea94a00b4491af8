use serde::{Deserialize, Serialize};
use validator::Validate;

use transcribe_domain::constraints::{
    ARN_MAX, ARN_MIN, DATA_ACCESS_ROLE_ARN, KMS_KEY_ID, KMS_KEY_ID_MAX, NAME_MAX,
    NEXT_TOKEN_MAX, PAGE_SIZE_MAX, RESOURCE_NAME, URI, URI_MAX,
};
use transcribe_domain::{
    fluent_record, CallAnalyticsJob, CallAnalyticsJobSettings, CallAnalyticsJobStatus,
    CallAnalyticsJobSummary, CategoryProperties, ChannelDefinition, InputType, Media, Rule,
};

/// Submits a call recording for post-call analytics. Every category that
/// exists when the job starts is applied to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct StartCallAnalyticsJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub call_analytics_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, nested)]
    pub media: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = URI_MAX), regex(path = *URI))]
    pub output_location: Option<String>,
    #[serde(rename = "OutputEncryptionKMSKeyId", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = KMS_KEY_ID_MAX), regex(path = *KMS_KEY_ID))]
    pub output_encryption_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = ARN_MIN, max = ARN_MAX), regex(path = *DATA_ACCESS_ROLE_ARN))]
    pub data_access_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub settings: Option<CallAnalyticsJobSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 2), nested)]
    pub channel_definitions: Option<Vec<ChannelDefinition>>,
}

fluent_record!(StartCallAnalyticsJobRequest {
    with_call_analytics_job_name(call_analytics_job_name: String) => "CallAnalyticsJobName",
    with_media(media: Media) => "Media",
    with_output_location(output_location: String) => "OutputLocation",
    with_output_encryption_kms_key_id(output_encryption_kms_key_id: String) => "OutputEncryptionKMSKeyId",
    with_data_access_role_arn(data_access_role_arn: String) => "DataAccessRoleArn",
    with_settings(settings: CallAnalyticsJobSettings) => "Settings",
    with_channel_definitions(channel_definitions: Vec<ChannelDefinition>) => "ChannelDefinitions",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CallAnalyticsJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub call_analytics_job: Option<CallAnalyticsJob>,
}

fluent_record!(CallAnalyticsJobResult {
    with_call_analytics_job(call_analytics_job: CallAnalyticsJob) => "CallAnalyticsJob",
});

pub type StartCallAnalyticsJobResult = CallAnalyticsJobResult;
pub type GetCallAnalyticsJobResult = CallAnalyticsJobResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct GetCallAnalyticsJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub call_analytics_job_name: Option<String>,
}

fluent_record!(GetCallAnalyticsJobRequest {
    with_call_analytics_job_name(call_analytics_job_name: String) => "CallAnalyticsJobName",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ListCallAnalyticsJobsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CallAnalyticsJobStatus>,
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

fluent_record!(ListCallAnalyticsJobsRequest {
    with_status(status: CallAnalyticsJobStatus) => "Status",
    with_job_name_contains(job_name_contains: String) => "JobNameContains",
    with_next_token(next_token: String) => "NextToken",
    with_max_results(max_results: i32) => "MaxResults",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ListCallAnalyticsJobsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CallAnalyticsJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = NEXT_TOKEN_MAX))]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub call_analytics_job_summaries: Option<Vec<CallAnalyticsJobSummary>>,
}

fluent_record!(ListCallAnalyticsJobsResult {
    with_status(status: CallAnalyticsJobStatus) => "Status",
    with_next_token(next_token: String) => "NextToken",
    with_call_analytics_job_summaries(call_analytics_job_summaries: Vec<CallAnalyticsJobSummary>) => "CallAnalyticsJobSummaries",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteCallAnalyticsJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub call_analytics_job_name: Option<String>,
}

fluent_record!(DeleteCallAnalyticsJobRequest {
    with_call_analytics_job_name(call_analytics_job_name: String) => "CallAnalyticsJobName",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct DeleteCallAnalyticsJobResult {}

fluent_record!(DeleteCallAnalyticsJobResult {});

/// Creates a category from up to 20 rules. A call matches the category
/// when every rule matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCallAnalyticsCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 20), nested)]
    pub rules: Option<Vec<Rule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
}

fluent_record!(CreateCallAnalyticsCategoryRequest {
    with_category_name(category_name: String) => "CategoryName",
    with_rules(rules: Vec<Rule>) => "Rules",
    with_input_type(input_type: InputType) => "InputType",
});

/// Result of creating, fetching or updating a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CallAnalyticsCategoryResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub category_properties: Option<CategoryProperties>,
}

fluent_record!(CallAnalyticsCategoryResult {
    with_category_properties(category_properties: CategoryProperties) => "CategoryProperties",
});

pub type CreateCallAnalyticsCategoryResult = CallAnalyticsCategoryResult;
pub type GetCallAnalyticsCategoryResult = CallAnalyticsCategoryResult;
pub type UpdateCallAnalyticsCategoryResult = CallAnalyticsCategoryResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct GetCallAnalyticsCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub category_name: Option<String>,
}

fluent_record!(GetCallAnalyticsCategoryRequest {
    with_category_name(category_name: String) => "CategoryName",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ListCallAnalyticsCategoriesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = NEXT_TOKEN_MAX))]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = PAGE_SIZE_MAX))]
    pub max_results: Option<i32>,
}

fluent_record!(ListCallAnalyticsCategoriesRequest {
    with_next_token(next_token: String) => "NextToken",
    with_max_results(max_results: i32) => "MaxResults",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ListCallAnalyticsCategoriesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = NEXT_TOKEN_MAX))]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub categories: Option<Vec<CategoryProperties>>,
}

fluent_record!(ListCallAnalyticsCategoriesResult {
    with_next_token(next_token: String) => "NextToken",
    with_categories(categories: Vec<CategoryProperties>) => "Categories",
});

/// Replaces every rule of an existing category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateCallAnalyticsCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 20), nested)]
    pub rules: Option<Vec<Rule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
}

fluent_record!(UpdateCallAnalyticsCategoryRequest {
    with_category_name(category_name: String) => "CategoryName",
    with_rules(rules: Vec<Rule>) => "Rules",
    with_input_type(input_type: InputType) => "InputType",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteCallAnalyticsCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub category_name: Option<String>,
}

fluent_record!(DeleteCallAnalyticsCategoryRequest {
    with_category_name(category_name: String) => "CategoryName",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct DeleteCallAnalyticsCategoryResult {}

fluent_record!(DeleteCallAnalyticsCategoryResult {});
