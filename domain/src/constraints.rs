//! Member patterns published with the service model. Patterns are anchored
//! at both ends: the service matches the whole value.

use std::sync::LazyLock;

use regex::Regex;

// Patterns are literals.
fn pattern(source: &str) -> Regex {
    match Regex::new(source) {
        Ok(regex) => regex,
        Err(error) => panic!("invalid member pattern {source}: {error}"),
    }
}

/// Job, vocabulary, filter, model and category names.
pub static RESOURCE_NAME: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[0-9a-zA-Z._-]+$"));

pub static DATA_ACCESS_ROLE_ARN: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"^arn:(aws|aws-cn|aws-us-gov|aws-iso-{0,1}[a-z]{0,1}):iam::[0-9]{0,63}:role/[A-Za-z0-9:_/+=,@.-]{0,1024}$",
    )
});

pub static TRANSCRIBE_ARN: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"^arn:aws(-[^:]+)?:transcribe:[a-zA-Z0-9-]*:[0-9]{12}:[a-zA-Z-]*/[0-9a-zA-Z._-]+$")
});

pub static OUTPUT_BUCKET_NAME: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^[a-z0-9][\.\-a-z0-9]{1,61}[a-z0-9]$"));

pub static OUTPUT_KEY: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^[a-zA-Z0-9\-_.!*'()/]{1,1024}$"));

pub static KMS_KEY_ID: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^[A-Za-z0-9][A-Za-z0-9:_/+=,@.-]{0,2048}$"));

pub static URI: LazyLock<Regex> = LazyLock::new(|| pattern(r"^(s3://|http(s*)://).+$"));

pub const NAME_MAX: u64 = 200;
pub const URI_MAX: u64 = 2000;
pub const ARN_MIN: u64 = 20;
pub const ARN_MAX: u64 = 2048;
pub const TIMESTAMP_MILLIS_MAX: i64 = 14_400_000;
pub const PERCENTAGE_MAX: i32 = 100;
pub const PAGE_SIZE_MAX: i32 = 100;
pub const NEXT_TOKEN_MAX: u64 = 8192;
pub const OUTPUT_BUCKET_MAX: u64 = 64;
pub const OUTPUT_KEY_MAX: u64 = 1024;
pub const KMS_KEY_ID_MAX: u64 = 2048;
pub const KMS_CONTEXT_MAX: u64 = 10;
pub const RESOURCE_ARN_MAX: u64 = 1011;
pub const TAGS_MAX: u64 = 200;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_name_matches_whole_value() {
        assert!(RESOURCE_NAME.is_match("call-2024_05.v1"));
        assert!(!RESOURCE_NAME.is_match("has space"));
        assert!(!RESOURCE_NAME.is_match(""));
    }

    #[test]
    fn role_arn_pattern_accepts_partitions() {
        assert!(DATA_ACCESS_ROLE_ARN.is_match("arn:aws:iam::111122223333:role/Admin"));
        assert!(DATA_ACCESS_ROLE_ARN.is_match("arn:aws-cn:iam::111122223333:role/path/Admin"));
        assert!(!DATA_ACCESS_ROLE_ARN.is_match("arn:aws:s3:::bucket"));
    }

    #[test]
    fn bucket_and_uri_patterns() {
        assert!(OUTPUT_BUCKET_NAME.is_match("my-output.bucket"));
        assert!(!OUTPUT_BUCKET_NAME.is_match("My_Bucket"));
        assert!(URI.is_match("s3://bucket/audio.wav"));
        assert!(URI.is_match("https://example.com/a.mp3"));
        assert!(!URI.is_match("ftp://example.com/a.mp3"));
    }

    #[test]
    fn every_pattern_compiles() {
        assert!(TRANSCRIBE_ARN.is_match(
            "arn:aws:transcribe:us-east-1:111122223333:vocabulary/terms"
        ));
        assert!(OUTPUT_KEY.is_match("calls/2024/"));
        assert!(KMS_KEY_ID.is_match("alias/transcripts"));
        assert!(!KMS_KEY_ID.is_match(""));
    }
}
