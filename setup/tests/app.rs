use transcribe_application::{ListTranscriptionJobsRequest, PagedRequest};
use transcribe_configuration::{AppConfig, ClientConfig};
use transcribe_setup::cli::{execute, Commands};
use transcribe_setup::Application;

fn app_with(client: ClientConfig) -> Application {
    Application::new(AppConfig {
        client,
        ..AppConfig::default()
    })
    .expect("valid config")
}

#[test]
fn application_wires_codec_from_config() {
    let strict = app_with(ClientConfig::default());
    assert!(strict.codec().validates_requests());
    assert_eq!(strict.registry().len(), 43);

    let lenient = app_with(ClientConfig {
        validate_requests: false,
        ..ClientConfig::default()
    });
    assert!(!lenient.codec().validates_requests());
}

#[test]
fn endpoint_override_must_be_http() {
    let config = AppConfig {
        client: ClientConfig {
            endpoint: Some("ftp://localhost".to_string()),
            ..ClientConfig::default()
        },
        ..AppConfig::default()
    };
    assert!(Application::new(config).is_err());
}

#[test]
fn first_page_uses_configured_page_size() {
    let app = app_with(ClientConfig {
        page_size: 20,
        ..ClientConfig::default()
    });

    let request = app.first_page(ListTranscriptionJobsRequest::new());
    assert_eq!(PagedRequest::max_results(&request), Some(20));

    let chosen = app.first_page(ListTranscriptionJobsRequest::new().with_max_results(5));
    assert_eq!(PagedRequest::max_results(&chosen), Some(5));
}

#[test]
fn operations_command_lists_targets() {
    let app = app_with(ClientConfig::default());
    let output = execute(&app, &Commands::Operations).expect("lists");

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 43);
    assert_eq!(lines[0], "CreateLanguageModel\tTranscribe.CreateLanguageModel");
    assert!(lines.contains(&"StartCallAnalyticsJob\tTranscribe.StartCallAnalyticsJob"));
}

#[test]
fn values_command_prints_wire_values() {
    let app = app_with(ClientConfig::default());
    let output = execute(
        &app,
        &Commands::Values {
            name: "TranscriptionJobStatus".to_string(),
        },
    )
    .expect("known enumeration");
    assert_eq!(output, "QUEUED\nIN_PROGRESS\nFAILED\nCOMPLETED");

    let error = execute(
        &app,
        &Commands::Values {
            name: "Colour".to_string(),
        },
    )
    .expect_err("unknown enumeration");
    assert!(error.to_string().contains("unknown enumeration `Colour`"));
}

#[test]
fn check_command_normalizes_a_request_file() {
    let app = app_with(ClientConfig::default());
    let path = std::env::temp_dir().join(format!("transcribe-check-{}.json", std::process::id()));
    let body = serde_json::json!({
        "LanguageCode": "en-US",
        "VocabularyFilterName": "profanity",
        "Words": ["darn"]
    });
    std::fs::write(&path, body.to_string()).expect("writes request");

    let output = execute(
        &app,
        &Commands::Check {
            operation: "CreateVocabularyFilter".to_string(),
            input: path.to_string_lossy().to_string(),
        },
    );
    std::fs::remove_file(&path).ok();

    assert_eq!(
        output.expect("valid request"),
        r#"{"VocabularyFilterName":"profanity","LanguageCode":"en-US","Words":["darn"]}"#
    );
}

#[test]
fn check_command_reports_rejections() {
    let app = app_with(ClientConfig::default());
    let error = execute(
        &app,
        &Commands::Check {
            operation: "DescribeJob".to_string(),
            input: "/nonexistent/request.json".to_string(),
        },
    )
    .expect_err("missing file");
    assert!(error.to_string().contains("reading /nonexistent/request.json"));

    let error = app
        .check("DeleteTranscriptionJob", "{}")
        .expect_err("name required");
    assert!(error.to_string().contains("Validation error"));
}
