use transcribe_application::{ApplicationError, OperationRegistry, WireCodec, OPERATION_NAMES};

fn registry() -> OperationRegistry {
    OperationRegistry::transcribe(WireCodec::default())
}

#[test]
fn registry_lists_every_operation_in_order() {
    let registry = registry();
    let names = registry.names();

    assert_eq!(names, OPERATION_NAMES.to_vec());
    assert_eq!(registry.len(), 43);
    assert_eq!(names.first(), Some(&"CreateLanguageModel"));
    assert_eq!(names.last(), Some(&"ListTagsForResource"));
    assert!(registry.contains("StartMedicalScribeJob"));
    assert_eq!(registry.target("TagResource"), Some("Transcribe.TagResource"));
    assert_eq!(registry.target("StartJob"), None);
}

#[test]
fn normalize_drops_nulls_and_unknown_members() {
    let body = r#"{
        "Phrases": ["Transcribe", "diarization"],
        "LanguageCode": "en-US",
        "VocabularyName": "product-terms",
        "Tags": null,
        "Unrelated": 1
    }"#;

    let normalized = registry()
        .normalize("CreateVocabulary", body)
        .expect("valid request");
    assert_eq!(
        normalized,
        r#"{"VocabularyName":"product-terms","LanguageCode":"en-US","Phrases":["Transcribe","diarization"]}"#
    );
}

#[test]
fn normalize_rejects_unknown_operations() {
    let error = registry()
        .normalize("StartTranslationJob", "{}")
        .expect_err("not a transcribe operation");
    assert!(matches!(error, ApplicationError::UnknownOperation(name) if name == "StartTranslationJob"));
}

#[test]
fn normalize_always_validates() {
    let lenient = OperationRegistry::transcribe(WireCodec::new(false));
    let error = lenient
        .normalize("GetVocabulary", r#"{"VocabularyName": "bad name"}"#)
        .expect_err("pattern violated");
    assert!(matches!(error, ApplicationError::Validation(_)));

    let error = lenient
        .normalize("TagResource", r#"{"ResourceArn": "arn:aws:s3:::bucket", "Tags": []}"#)
        .expect_err("not a transcribe arn");
    assert!(matches!(error, ApplicationError::Validation(_)));
}

#[test]
fn normalize_reports_malformed_json() {
    let error = registry()
        .normalize("GetVocabulary", "{not json")
        .expect_err("malformed");
    assert!(matches!(error, ApplicationError::Serialization(_)));
}
