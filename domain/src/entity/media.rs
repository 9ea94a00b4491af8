use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constraints::{URI, URI_MAX};

/// Location of the input media file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct Media {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = URI_MAX), regex(path = *URI))]
    pub media_file_uri: Option<String>,
    /// Only set on call analytics jobs with redaction enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = URI_MAX), regex(path = *URI))]
    pub redacted_media_file_uri: Option<String>,
}

fluent_record!(Media {
    with_media_file_uri(media_file_uri: String) => "MediaFileUri",
    with_redacted_media_file_uri(redacted_media_file_uri: String) => "RedactedMediaFileUri",
});

/// Where the finished transcript can be downloaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct Transcript {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = URI_MAX), regex(path = *URI))]
    pub transcript_file_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = URI_MAX), regex(path = *URI))]
    pub redacted_transcript_file_uri: Option<String>,
}

fluent_record!(Transcript {
    with_transcript_file_uri(transcript_file_uri: String) => "TranscriptFileUri",
    with_redacted_transcript_file_uri(redacted_transcript_file_uri: String) => "RedactedTranscriptFileUri",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalTranscript {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = URI_MAX), regex(path = *URI))]
    pub transcript_file_uri: Option<String>,
}

fluent_record!(MedicalTranscript {
    with_transcript_file_uri(transcript_file_uri: String) => "TranscriptFileUri",
});

/// Output locations of a Medical Scribe job: the conversation transcript and
/// the generated clinical document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalScribeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = URI_MAX), regex(path = *URI))]
    pub transcript_file_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = URI_MAX), regex(path = *URI))]
    pub clinical_document_uri: Option<String>,
}

fluent_record!(MedicalScribeOutput {
    with_transcript_file_uri(transcript_file_uri: String) => "TranscriptFileUri",
    with_clinical_document_uri(clinical_document_uri: String) => "ClinicalDocumentUri",
});

/// A key:value pair attached to a job, vocabulary, model or category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1, max = 128))]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required, length(max = 256))]
    pub value: Option<String>,
}

fluent_record!(Tag {
    with_key(key: String) => "Key",
    with_value(value: String) => "Value",
});

impl Tag {
    pub fn pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with_key(key).with_value(value)
    }
}
