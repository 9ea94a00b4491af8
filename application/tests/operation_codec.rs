use std::collections::BTreeMap;

use serde_json::{json, Value};
use transcribe_application::{
    ApplicationError, CreateCallAnalyticsCategoryRequest, DeleteVocabularyRequest,
    GetTranscriptionJobRequest, ListVocabulariesRequest, Operation,
    StartMedicalTranscriptionJobRequest, StartTranscriptionJobRequest, WireCodec,
};
use transcribe_domain::{
    LanguageCode, Media, MediaFormat, MedicalTranscriptionType, ParticipantRole, SentimentFilter,
    SentimentValue, Settings, Specialty, TranscriptionJobStatus,
};

fn start_request() -> StartTranscriptionJobRequest {
    let mut context = BTreeMap::new();
    context.insert("team".to_string(), "speech".to_string());

    StartTranscriptionJobRequest::new()
        .with_transcription_job_name("support-call-17")
        .with_language_code(LanguageCode::EnUs)
        .with_media_format(MediaFormat::Mp3)
        .with_media(Media::new().with_media_file_uri("s3://calls/17.mp3"))
        .with_output_bucket_name("transcripts-bucket")
        .with_output_encryption_kms_key_id("alias/transcripts")
        .with_kms_encryption_context(context)
        .with_settings(Settings::new().with_show_speaker_labels(true).with_max_speaker_labels(2))
}

#[test]
fn encode_request_produces_wire_json() {
    let codec = WireCodec::default();
    let body = codec.encode_request(&start_request()).expect("valid request");
    let value: Value = serde_json::from_str(&body).expect("json body");

    assert_eq!(
        value,
        json!({
            "TranscriptionJobName": "support-call-17",
            "LanguageCode": "en-US",
            "MediaFormat": "mp3",
            "Media": { "MediaFileUri": "s3://calls/17.mp3" },
            "OutputBucketName": "transcripts-bucket",
            "OutputEncryptionKMSKeyId": "alias/transcripts",
            "KMSEncryptionContext": { "team": "speech" },
            "Settings": { "ShowSpeakerLabels": true, "MaxSpeakerLabels": 2 }
        })
    );
}

#[test]
fn encode_request_rejects_constraint_violations() {
    let codec = WireCodec::new(true);
    let missing_media = StartTranscriptionJobRequest::new().with_transcription_job_name("job");

    let error = codec
        .encode_request(&missing_media)
        .expect_err("media is required");
    match error {
        ApplicationError::Validation(message) => assert!(message.contains("media")),
        other => panic!("unexpected error: {other}"),
    }

    let lenient = WireCodec::new(false);
    let body = lenient
        .encode_request(&missing_media)
        .expect("validation disabled");
    assert_eq!(body, r#"{"TranscriptionJobName":"job"}"#);
}

#[test]
fn decode_result_reads_nested_records_and_timestamps() {
    let codec = WireCodec::default();
    let result = codec
        .decode_result::<GetTranscriptionJobRequest>(
            r#"{
                "TranscriptionJob": {
                    "TranscriptionJobName": "support-call-17",
                    "TranscriptionJobStatus": "IN_PROGRESS",
                    "CreationTime": 1700000000.25,
                    "Media": { "MediaFileUri": "s3://calls/17.mp3" }
                }
            }"#,
        )
        .expect("decodes");

    let job = result.transcription_job.expect("job present");
    assert_eq!(job.transcription_job_status, Some(TranscriptionJobStatus::InProgress));
    assert_eq!(
        job.creation_time.map(|time| time.timestamp_millis()),
        Some(1_700_000_000_250)
    );
    assert!(job.completion_time.is_none());
}

#[test]
fn unknown_enum_values_surface_as_serialization_errors() {
    let codec = WireCodec::default();
    let error = codec
        .decode_result::<GetTranscriptionJobRequest>(
            r#"{"TranscriptionJob": {"TranscriptionJobStatus": "PAUSED"}}"#,
        )
        .expect_err("unknown status");

    match error {
        ApplicationError::Serialization(message) => {
            assert!(message.contains("Cannot create enum from PAUSED value!"))
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_results_decode_from_empty_objects() {
    let codec = WireCodec::default();
    let result = codec
        .decode_result::<DeleteVocabularyRequest>("{}")
        .expect("empty body");
    assert_eq!(result.to_string(), "{}");
}

#[test]
fn medical_request_uses_type_member() {
    let request = StartMedicalTranscriptionJobRequest::new()
        .with_medical_transcription_job_name("visit-9")
        .with_language_code(LanguageCode::EnUs)
        .with_media(Media::new().with_media_file_uri("s3://clinic/visit-9.wav"))
        .with_output_bucket_name("clinic-output")
        .with_specialty(Specialty::PrimaryCare)
        .with_type(MedicalTranscriptionType::Conversation);

    let body = WireCodec::default()
        .encode_request(&request)
        .expect("valid request");
    let value: Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(value["Type"], "CONVERSATION");
    assert_eq!(value["Specialty"], "PRIMARYCARE");

    let low_rate = request.clone().with_media_sample_rate_hertz(8000);
    assert!(WireCodec::default().encode_request(&low_rate).is_err());
}

#[test]
fn category_requests_carry_tagged_rules() {
    let request = CreateCallAnalyticsCategoryRequest::new()
        .with_category_name("unhappy-customers")
        .with_rules(vec![SentimentFilter::new()
            .with_sentiments(vec![SentimentValue::Negative])
            .with_participant_role(ParticipantRole::Customer)
            .into()]);

    let body = WireCodec::default()
        .encode_request(&request)
        .expect("valid request");
    assert_eq!(
        body,
        r#"{"CategoryName":"unhappy-customers","Rules":[{"SentimentFilter":{"Sentiments":["NEGATIVE"],"ParticipantRole":"CUSTOMER"}}]}"#
    );

    let decoded = WireCodec::default()
        .decode_request::<CreateCallAnalyticsCategoryRequest>(&body)
        .expect("decodes");
    assert_eq!(decoded, request);
}

#[test]
fn list_requests_bound_page_size() {
    let codec = WireCodec::default();
    assert!(codec
        .encode_request(&ListVocabulariesRequest::new().with_max_results(100))
        .is_ok());
    assert!(codec
        .encode_request(&ListVocabulariesRequest::new().with_max_results(0))
        .is_err());
    assert!(codec
        .encode_request(&ListVocabulariesRequest::new().with_max_results(101))
        .is_err());
    assert_eq!(ListVocabulariesRequest::target(), "Transcribe.ListVocabularies");
}
