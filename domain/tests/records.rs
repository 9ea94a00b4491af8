use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde_json::json;
use transcribe_domain::time::from_epoch_seconds;
use transcribe_domain::{
    CategoryProperties, ContentRedaction, Float, InputType, InterruptionFilter, LanguageCode,
    LanguageCodeItem, LanguageIdSettings, LanguageModel, Media, MediaFormat,
    MedicalTranscriptionJob, MedicalTranscriptionType, RedactionOutput, RedactionType, Rule,
    Settings, Tag, TranscriptionJob, TranscriptionJobStatus, VocabularyInfo, VocabularyState,
};
use validator::Validate;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn sample_job() -> TranscriptionJob {
    TranscriptionJob::new()
        .with_transcription_job_name("meeting-2024-05")
        .with_transcription_job_status(TranscriptionJobStatus::Completed)
        .with_language_code(LanguageCode::EnUs)
        .with_media_format(MediaFormat::Wav)
        .with_media(Media::new().with_media_file_uri("s3://audio/meeting.wav"))
        .with_settings(Settings::new().with_show_speaker_labels(true).with_max_speaker_labels(4))
}

#[test]
fn with_setters_populate_the_matching_field() {
    let job = sample_job();

    assert_eq!(job.transcription_job_name.as_deref(), Some("meeting-2024-05"));
    assert_eq!(job.transcription_job_status, Some(TranscriptionJobStatus::Completed));
    assert_eq!(job.language_code, Some(LanguageCode::EnUs));
    assert_eq!(
        job.media.as_ref().and_then(|media| media.media_file_uri.as_deref()),
        Some("s3://audio/meeting.wav")
    );
    assert!(job.failure_reason.is_none());
    assert_eq!(TranscriptionJob::new(), TranscriptionJob::default());
}

#[test]
fn identical_records_are_equal_and_hash_alike() {
    let left = sample_job();
    let right = sample_job();

    assert_eq!(left, right);
    assert_eq!(hash_of(&left), hash_of(&right));

    let changed = sample_job().with_failure_reason("unsupported codec");
    assert_ne!(left, changed);

    let empty_settings = sample_job().with_settings(Settings::new());
    assert_ne!(left, empty_settings);
}

fn assert_each_member_counts<T>(base: T, variants: Vec<(&str, T)>)
where
    T: Clone + Hash + PartialEq + std::fmt::Debug,
{
    assert_eq!(base, base.clone());
    assert_eq!(hash_of(&base), hash_of(&base.clone()));
    for (member, variant) in variants {
        assert_ne!(base, variant, "changing {member} left the record equal");
    }
}

#[test]
fn changing_any_single_member_breaks_equality() {
    let tag = Tag::pair("team", "speech");
    assert_each_member_counts(
        tag.clone(),
        vec![
            ("Key", tag.clone().with_key("owner")),
            ("Value", tag.clone().with_value("voice")),
            ("Value cleared", Tag::new().with_key("team")),
        ],
    );

    let modified = from_epoch_seconds(1_700_000_000.0).expect("timestamp in range");
    let vocabulary = VocabularyInfo::new()
        .with_vocabulary_name("terms")
        .with_language_code(LanguageCode::EnUs)
        .with_last_modified_time(modified)
        .with_vocabulary_state(VocabularyState::Ready);
    let later = from_epoch_seconds(1_700_000_000.001).expect("timestamp in range");
    assert_each_member_counts(
        vocabulary.clone(),
        vec![
            ("VocabularyName", vocabulary.clone().with_vocabulary_name("terms-2")),
            ("LanguageCode", vocabulary.clone().with_language_code(LanguageCode::EnGb)),
            ("LastModifiedTime", vocabulary.clone().with_last_modified_time(later)),
            ("VocabularyState", vocabulary.clone().with_vocabulary_state(VocabularyState::Failed)),
        ],
    );

    let rule: Rule = InterruptionFilter::new().with_threshold(1_000).into();
    let category = CategoryProperties::new()
        .with_category_name("interruptions")
        .with_rules(vec![rule])
        .with_input_type(InputType::RealTime);
    let stricter: Rule = InterruptionFilter::new().with_threshold(2_000).into();
    assert_each_member_counts(
        category.clone(),
        vec![
            ("CategoryName", category.clone().with_category_name("talk-over")),
            ("Rules", category.clone().with_rules(vec![stricter])),
            ("CreateTime", category.clone().with_create_time(modified)),
            ("InputType", category.clone().with_input_type(InputType::PostCall)),
        ],
    );
}

#[test]
fn float_members_compare_by_value_bits() {
    let item = LanguageCodeItem::new()
        .with_language_code(LanguageCode::FrFr)
        .with_duration_in_seconds(12.5_f32);

    assert_eq!(item.duration_in_seconds, Some(Float(12.5)));
    assert_eq!(hash_of(&item), hash_of(&item.clone()));
    assert_ne!(item, item.clone().with_duration_in_seconds(12.25_f32));
}

#[test]
fn display_lists_only_present_members_by_wire_name() {
    assert_eq!(Tag::pair("team", "speech").to_string(), "{Key: team,Value: speech}");
    assert_eq!(Tag::new().to_string(), "{}");

    let rendered = sample_job().to_string();
    assert!(rendered.starts_with("{TranscriptionJobName: meeting-2024-05,"));
    assert!(rendered.contains("TranscriptionJobStatus: COMPLETED"));
    assert!(rendered.contains("Media: {MediaFileUri: s3://audio/meeting.wav}"));
    assert!(rendered.contains("Settings: {ShowSpeakerLabels: true,MaxSpeakerLabels: 4}"));
    assert!(!rendered.contains("FailureReason"));

    let redaction = ContentRedaction::new()
        .with_redaction_type(RedactionType::Pii)
        .with_redaction_output(RedactionOutput::Redacted)
        .with_pii_entity_types(vec![
            transcribe_domain::PiiEntityType::Name,
            transcribe_domain::PiiEntityType::Email,
        ]);
    assert_eq!(
        redaction.to_string(),
        "{RedactionType: PII,RedactionOutput: redacted,PiiEntityTypes: [NAME, EMAIL]}"
    );
}

#[test]
fn records_serialize_to_pascal_case_without_absent_members() {
    let creation = from_epoch_seconds(1_652_207_578.789).expect("timestamp in range");
    let job = sample_job().with_creation_time(creation);

    let value = serde_json::to_value(&job).expect("serializes");
    assert_eq!(
        value,
        json!({
            "TranscriptionJobName": "meeting-2024-05",
            "TranscriptionJobStatus": "COMPLETED",
            "LanguageCode": "en-US",
            "MediaFormat": "wav",
            "Media": { "MediaFileUri": "s3://audio/meeting.wav" },
            "CreationTime": 1_652_207_578.789,
            "Settings": { "ShowSpeakerLabels": true, "MaxSpeakerLabels": 4 }
        })
    );

    let decoded: TranscriptionJob = serde_json::from_value(value).expect("deserializes");
    assert_eq!(decoded, job);
}

#[test]
fn medical_job_kind_travels_as_type() {
    let job = MedicalTranscriptionJob::new()
        .with_medical_transcription_job_name("visit-42")
        .with_type(MedicalTranscriptionType::Dictation);

    let value = serde_json::to_value(&job).expect("serializes");
    assert_eq!(
        value,
        json!({ "MedicalTranscriptionJobName": "visit-42", "Type": "DICTATION" })
    );
    assert_eq!(
        job.to_string(),
        "{MedicalTranscriptionJobName: visit-42,Type: DICTATION}"
    );
}

#[test]
fn language_id_settings_are_keyed_by_language_code() {
    let mut settings = BTreeMap::new();
    settings.insert(
        LanguageCode::EnGb,
        LanguageIdSettings::new().with_vocabulary_name("british-terms"),
    );
    let job = TranscriptionJob::new()
        .with_identify_language(true)
        .with_language_id_settings(settings);

    let value = serde_json::to_value(&job).expect("serializes");
    assert_eq!(
        value,
        json!({
            "IdentifyLanguage": true,
            "LanguageIdSettings": { "en-GB": { "VocabularyName": "british-terms" } }
        })
    );
    let decoded: TranscriptionJob = serde_json::from_value(value).expect("deserializes");
    assert_eq!(decoded, job);
}

#[test]
fn unknown_enum_values_are_rejected_on_decode() {
    let error = serde_json::from_value::<VocabularyInfo>(json!({
        "VocabularyName": "terms",
        "VocabularyState": "DELETED"
    }))
    .expect_err("unknown state");

    assert!(error
        .to_string()
        .contains("Cannot create enum from DELETED value!"));

    let info: VocabularyInfo = serde_json::from_value(json!({
        "VocabularyName": "terms",
        "VocabularyState": "READY",
        "LastModifiedTime": 1_700_000_000.5
    }))
    .expect("known state");
    assert_eq!(info.vocabulary_state, Some(VocabularyState::Ready));
    assert_eq!(
        info.last_modified_time.map(|time| time.timestamp_millis()),
        Some(1_700_000_000_500)
    );
}

#[test]
fn validation_applies_documented_constraints() {
    assert!(sample_job().validate().is_ok());

    let bad_name = sample_job().with_transcription_job_name("has spaces");
    assert!(bad_name.validate().is_err());

    let too_few_speakers =
        sample_job().with_settings(Settings::new().with_max_speaker_labels(1));
    let errors = too_few_speakers.validate().expect_err("range violated");
    assert!(errors.to_string().contains("max_speaker_labels"));

    let too_many_speakers =
        sample_job().with_settings(Settings::new().with_max_speaker_labels(31));
    assert!(too_many_speakers.validate().is_err());

    let bad_rate = sample_job().with_media_sample_rate_hertz(4000);
    assert!(bad_rate.validate().is_err());

    let bad_uri = sample_job().with_media(Media::new().with_media_file_uri("ftp://audio"));
    assert!(bad_uri.validate().is_err());
}

#[test]
fn paired_settings_are_not_cross_checked() {
    let settings = Settings::new()
        .with_show_speaker_labels(true)
        .with_channel_identification(true)
        .with_max_alternatives(3);

    assert!(settings.validate().is_ok());
}

#[test]
fn required_members_are_enforced() {
    assert!(ContentRedaction::new().validate().is_err());
    assert!(Tag::new().with_key("team").validate().is_err());
    assert!(Tag::pair("team", "").validate().is_ok());

    let model = LanguageModel::new().with_input_data_config(
        transcribe_domain::InputDataConfig::new().with_s3_uri("s3://training/data"),
    );
    assert!(model.validate().is_err());
}
