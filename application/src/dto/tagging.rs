use serde::{Deserialize, Serialize};
use validator::Validate;

use transcribe_domain::constraints::{RESOURCE_ARN_MAX, TAGS_MAX, TRANSCRIBE_ARN};
use transcribe_domain::{fluent_record, Tag};

/// Attaches tags to a job, vocabulary, filter, model or category, named by
/// its ARN, e.g. `arn:aws:transcribe:us-west-2:111122223333:transcription-job/name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = RESOURCE_ARN_MAX), regex(path = *TRANSCRIBE_ARN))]
    pub resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = TAGS_MAX), nested)]
    pub tags: Option<Vec<Tag>>,
}

fluent_record!(TagResourceRequest {
    with_resource_arn(resource_arn: String) => "ResourceArn",
    with_tags(tags: Vec<Tag>) => "Tags",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct TagResourceResult {}

fluent_record!(TagResourceResult {});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UntagResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = RESOURCE_ARN_MAX), regex(path = *TRANSCRIBE_ARN))]
    pub resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = TAGS_MAX))]
    pub tag_keys: Option<Vec<String>>,
}

fluent_record!(UntagResourceRequest {
    with_resource_arn(resource_arn: String) => "ResourceArn",
    with_tag_keys(tag_keys: Vec<String>) => "TagKeys",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct UntagResourceResult {}

fluent_record!(UntagResourceResult {});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = RESOURCE_ARN_MAX), regex(path = *TRANSCRIBE_ARN))]
    pub resource_arn: Option<String>,
}

fluent_record!(ListTagsForResourceRequest {
    with_resource_arn(resource_arn: String) => "ResourceArn",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = RESOURCE_ARN_MAX), regex(path = *TRANSCRIBE_ARN))]
    pub resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = TAGS_MAX), nested)]
    pub tags: Option<Vec<Tag>>,
}

fluent_record!(ListTagsForResourceResult {
    with_resource_arn(resource_arn: String) => "ResourceArn",
    with_tags(tags: Vec<Tag>) => "Tags",
});
