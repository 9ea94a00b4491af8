use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::Value;

#[test]
fn check_prints_only_json_on_stdout() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_transcribe-model"))
        .args(["check", "StartTranscriptionJob", "-"])
        .env("RUST_LOG", "debug")
        .env_remove("TRANSCRIBE_SDK_CONFIG_FILE")
        .env_remove("TRANSCRIBE_SDK_ENDPOINT")
        .env_remove("TRANSCRIBE_SDK_PAGE_SIZE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawns transcribe-model");

    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(br#"{"TranscriptionJobName":"a","Media":{"MediaFileUri":"s3://b/a.wav"}}"#)
        .expect("writes request");

    let output = child.wait_with_output().expect("runs to completion");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let value: Value = serde_json::from_str(stdout.trim()).expect("stdout is one JSON document");
    assert_eq!(value["TranscriptionJobName"], "a");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("initializing transcribe model"));
}

#[test]
fn rejected_request_exits_non_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_transcribe-model"))
        .args(["check", "DeleteTranscriptionJob", "/nonexistent/request.json"])
        .env_remove("TRANSCRIBE_SDK_CONFIG_FILE")
        .env_remove("TRANSCRIBE_SDK_ENDPOINT")
        .env_remove("TRANSCRIBE_SDK_PAGE_SIZE")
        .output()
        .expect("runs transcribe-model");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
