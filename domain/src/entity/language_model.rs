use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constraints::{NAME_MAX, RESOURCE_NAME};
use crate::time::{epoch_seconds, Timestamp};
use crate::{BaseModelName, ClmLanguageCode, InputDataConfig, ModelStatus};

/// A custom language model. `upgrade_availability` is true when a newer
/// base model can be used to retrain it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct LanguageModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub model_name: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<Timestamp>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<ClmLanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_model_name: Option<BaseModelName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_status: Option<ModelStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_availability: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub input_data_config: Option<InputDataConfig>,
}

fluent_record!(LanguageModel {
    with_model_name(model_name: String) => "ModelName",
    with_create_time(create_time: Timestamp) => "CreateTime",
    with_last_modified_time(last_modified_time: Timestamp) => "LastModifiedTime",
    with_language_code(language_code: ClmLanguageCode) => "LanguageCode",
    with_base_model_name(base_model_name: BaseModelName) => "BaseModelName",
    with_model_status(model_status: ModelStatus) => "ModelStatus",
    with_upgrade_availability(upgrade_availability: bool) => "UpgradeAvailability",
    with_failure_reason(failure_reason: String) => "FailureReason",
    with_input_data_config(input_data_config: InputDataConfig) => "InputDataConfig",
});
