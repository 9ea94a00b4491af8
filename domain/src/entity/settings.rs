use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constraints::{
    ARN_MAX, ARN_MIN, DATA_ACCESS_ROLE_ARN, NAME_MAX, RESOURCE_NAME, URI, URI_MAX,
};
use crate::{
    Float, LanguageCode, MedicalScribeParticipantRole, ParticipantRole, PiiEntityType,
    RedactionOutput, RedactionType, SubtitleFormat, ToxicityCategory, VocabularyFilterMethod,
};

/// Optional processing settings of a transcription job.
///
/// `show_speaker_labels` and `channel_identification` are mutually
/// exclusive on the service side, and `max_speaker_labels` is only read
/// when speaker labels are on. Neither pairing is checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_speaker_labels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 2, max = 30))]
    pub max_speaker_labels: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_identification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_alternatives: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 2, max = 10))]
    pub max_alternatives: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_filter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_filter_method: Option<VocabularyFilterMethod>,
}

fluent_record!(Settings {
    with_vocabulary_name(vocabulary_name: String) => "VocabularyName",
    with_show_speaker_labels(show_speaker_labels: bool) => "ShowSpeakerLabels",
    with_max_speaker_labels(max_speaker_labels: i32) => "MaxSpeakerLabels",
    with_channel_identification(channel_identification: bool) => "ChannelIdentification",
    with_show_alternatives(show_alternatives: bool) => "ShowAlternatives",
    with_max_alternatives(max_alternatives: i32) => "MaxAlternatives",
    with_vocabulary_filter_name(vocabulary_filter_name: String) => "VocabularyFilterName",
    with_vocabulary_filter_method(vocabulary_filter_method: VocabularyFilterMethod) => "VocabularyFilterMethod",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalTranscriptionSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_speaker_labels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 2, max = 30))]
    pub max_speaker_labels: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_identification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_alternatives: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 2, max = 10))]
    pub max_alternatives: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_name: Option<String>,
}

fluent_record!(MedicalTranscriptionSetting {
    with_show_speaker_labels(show_speaker_labels: bool) => "ShowSpeakerLabels",
    with_max_speaker_labels(max_speaker_labels: i32) => "MaxSpeakerLabels",
    with_channel_identification(channel_identification: bool) => "ChannelIdentification",
    with_show_alternatives(show_alternatives: bool) => "ShowAlternatives",
    with_max_alternatives(max_alternatives: i32) => "MaxAlternatives",
    with_vocabulary_name(vocabulary_name: String) => "VocabularyName",
});

/// Exactly one of `show_speaker_labels` and `channel_identification` must
/// be on for the service to accept a Medical Scribe job, and
/// `vocabulary_filter_method` must accompany `vocabulary_filter_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalScribeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_speaker_labels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 2, max = 30))]
    pub max_speaker_labels: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_identification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_filter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_filter_method: Option<VocabularyFilterMethod>,
}

fluent_record!(MedicalScribeSettings {
    with_show_speaker_labels(show_speaker_labels: bool) => "ShowSpeakerLabels",
    with_max_speaker_labels(max_speaker_labels: i32) => "MaxSpeakerLabels",
    with_channel_identification(channel_identification: bool) => "ChannelIdentification",
    with_vocabulary_name(vocabulary_name: String) => "VocabularyName",
    with_vocabulary_filter_name(vocabulary_filter_name: String) => "VocabularyFilterName",
    with_vocabulary_filter_method(vocabulary_filter_method: VocabularyFilterMethod) => "VocabularyFilterMethod",
});

/// PII redaction requested for a transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ContentRedaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub redaction_type: Option<RedactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub redaction_output: Option<RedactionOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 11))]
    pub pii_entity_types: Option<Vec<PiiEntityType>>,
}

fluent_record!(ContentRedaction {
    with_redaction_type(redaction_type: RedactionType) => "RedactionType",
    with_redaction_output(redaction_output: RedactionOutput) => "RedactionOutput",
    with_pii_entity_types(pii_entity_types: Vec<PiiEntityType>) => "PiiEntityTypes",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ModelSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub language_model_name: Option<String>,
}

fluent_record!(ModelSettings {
    with_language_model_name(language_model_name: String) => "LanguageModelName",
});

/// Queueing behavior when the account's concurrent job limit is reached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct JobExecutionSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_deferred_execution: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = ARN_MIN, max = ARN_MAX), regex(path = *DATA_ACCESS_ROLE_ARN))]
    pub data_access_role_arn: Option<String>,
}

fluent_record!(JobExecutionSettings {
    with_allow_deferred_execution(allow_deferred_execution: bool) => "AllowDeferredExecution",
    with_data_access_role_arn(data_access_role_arn: String) => "DataAccessRoleArn",
});

/// Per-language resources applied once automatic language identification
/// has picked a language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct LanguageIdSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_filter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub language_model_name: Option<String>,
}

fluent_record!(LanguageIdSettings {
    with_vocabulary_name(vocabulary_name: String) => "VocabularyName",
    with_vocabulary_filter_name(vocabulary_filter_name: String) => "VocabularyFilterName",
    with_language_model_name(language_model_name: String) => "LanguageModelName",
});

pub type LanguageIdSettingsMap = BTreeMap<LanguageCode, LanguageIdSettings>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CallAnalyticsJobSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub vocabulary_filter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_filter_method: Option<VocabularyFilterMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = NAME_MAX), regex(path = *RESOURCE_NAME))]
    pub language_model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub content_redaction: Option<ContentRedaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub language_options: Option<Vec<LanguageCode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 5), nested)]
    pub language_id_settings: Option<LanguageIdSettingsMap>,
}

fluent_record!(CallAnalyticsJobSettings {
    with_vocabulary_name(vocabulary_name: String) => "VocabularyName",
    with_vocabulary_filter_name(vocabulary_filter_name: String) => "VocabularyFilterName",
    with_vocabulary_filter_method(vocabulary_filter_method: VocabularyFilterMethod) => "VocabularyFilterMethod",
    with_language_model_name(language_model_name: String) => "LanguageModelName",
    with_content_redaction(content_redaction: ContentRedaction) => "ContentRedaction",
    with_language_options(language_options: Vec<LanguageCode>) => "LanguageOptions",
    with_language_id_settings(language_id_settings: LanguageIdSettingsMap) => "LanguageIdSettings",
});

/// Subtitle files requested alongside a transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct Subtitles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formats: Option<Vec<SubtitleFormat>>,
    /// Numbering of the first caption, 0 or 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 1))]
    pub output_start_index: Option<i32>,
}

fluent_record!(Subtitles {
    with_formats(formats: Vec<SubtitleFormat>) => "Formats",
    with_output_start_index(output_start_index: i32) => "OutputStartIndex",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct SubtitlesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formats: Option<Vec<SubtitleFormat>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_file_uris: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 1))]
    pub output_start_index: Option<i32>,
}

fluent_record!(SubtitlesOutput {
    with_formats(formats: Vec<SubtitleFormat>) => "Formats",
    with_subtitle_file_uris(subtitle_file_uris: Vec<String>) => "SubtitleFileUris",
    with_output_start_index(output_start_index: i32) => "OutputStartIndex",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ToxicityDetectionSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 1))]
    pub toxicity_categories: Option<Vec<ToxicityCategory>>,
}

fluent_record!(ToxicityDetectionSettings {
    with_toxicity_categories(toxicity_categories: Vec<ToxicityCategory>) => "ToxicityCategories",
});

/// Assigns a call participant to an audio channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ChannelDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 1))]
    pub channel_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_role: Option<ParticipantRole>,
}

fluent_record!(ChannelDefinition {
    with_channel_id(channel_id: i32) => "ChannelId",
    with_participant_role(participant_role: ParticipantRole) => "ParticipantRole",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalScribeChannelDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, range(min = 0, max = 1))]
    pub channel_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub participant_role: Option<MedicalScribeParticipantRole>,
}

fluent_record!(MedicalScribeChannelDefinition {
    with_channel_id(channel_id: i32) => "ChannelId",
    with_participant_role(participant_role: MedicalScribeParticipantRole) => "ParticipantRole",
});

/// Training data location of a custom language model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct InputDataConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = URI_MAX), regex(path = *URI))]
    pub s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = URI_MAX), regex(path = *URI))]
    pub tuning_data_s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = ARN_MIN, max = ARN_MAX), regex(path = *DATA_ACCESS_ROLE_ARN))]
    pub data_access_role_arn: Option<String>,
}

fluent_record!(InputDataConfig {
    with_s3_uri(s3_uri: String) => "S3Uri",
    with_tuning_data_s3_uri(tuning_data_s3_uri: String) => "TuningDataS3Uri",
    with_data_access_role_arn(data_access_role_arn: String) => "DataAccessRoleArn",
});

/// One language identified in multi-language media and how long it was
/// spoken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct LanguageCodeItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_seconds: Option<Float>,
}

fluent_record!(LanguageCodeItem {
    with_language_code(language_code: LanguageCode) => "LanguageCode",
    with_duration_in_seconds(duration_in_seconds: Float) => "DurationInSeconds",
});
