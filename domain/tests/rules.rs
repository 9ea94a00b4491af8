use serde_json::json;
use transcribe_domain::{
    AbsoluteTimeRange, CategoryProperties, InputType, InterruptionFilter, NonTalkTimeFilter,
    ParticipantRole, RelativeTimeRange, Rule, SentimentFilter, SentimentValue, TranscriptFilter,
    TranscriptFilterType,
};
use validator::Validate;

fn escalation_rules() -> Vec<Rule> {
    vec![
        SentimentFilter::new()
            .with_sentiments(vec![SentimentValue::Negative])
            .with_participant_role(ParticipantRole::Customer)
            .with_relative_time_range(RelativeTimeRange::new().with_last(20))
            .into(),
        TranscriptFilter::new()
            .with_transcript_filter_type(TranscriptFilterType::Exact)
            .with_targets(vec!["manager".to_string(), "cancel".to_string()])
            .into(),
    ]
}

#[test]
fn rules_are_single_member_objects_on_the_wire() {
    let rule: Rule = NonTalkTimeFilter::new()
        .with_threshold(30_000)
        .with_absolute_time_range(AbsoluteTimeRange::between(0, 60_000))
        .into();

    let value = serde_json::to_value(&rule).expect("serializes");
    assert_eq!(
        value,
        json!({
            "NonTalkTimeFilter": {
                "Threshold": 30000,
                "AbsoluteTimeRange": { "StartTime": 0, "EndTime": 60000 }
            }
        })
    );

    let decoded: Rule = serde_json::from_value(value).expect("deserializes");
    assert_eq!(decoded, rule);
    assert_eq!(decoded.kind(), "NonTalkTimeFilter");
}

#[test]
fn category_round_trips_through_json() {
    let category = CategoryProperties::new()
        .with_category_name("escalations")
        .with_rules(escalation_rules())
        .with_input_type(InputType::PostCall);

    let value = serde_json::to_value(&category).expect("serializes");
    assert_eq!(value["Rules"][0]["SentimentFilter"]["Sentiments"], json!(["NEGATIVE"]));
    assert_eq!(value["Rules"][1]["TranscriptFilter"]["TranscriptFilterType"], "EXACT");
    assert_eq!(value["InputType"], "POST_CALL");

    let decoded: CategoryProperties = serde_json::from_value(value).expect("deserializes");
    assert_eq!(decoded, category);
    assert!(decoded.validate().is_ok());
}

#[test]
fn rule_display_names_the_filter() {
    let rule: Rule = InterruptionFilter::new()
        .with_threshold(5_000)
        .with_participant_role(ParticipantRole::Agent)
        .with_negate(false)
        .into();

    assert_eq!(
        rule.to_string(),
        "{InterruptionFilter: {Threshold: 5000,ParticipantRole: AGENT,Negate: false}}"
    );
}

#[test]
fn filters_validate_their_ranges_and_required_members() {
    let out_of_range: Rule = NonTalkTimeFilter::new().with_threshold(14_400_001).into();
    assert!(out_of_range.validate().is_err());

    let bad_percentage: Rule = SentimentFilter::new()
        .with_sentiments(vec![SentimentValue::Mixed])
        .with_relative_time_range(RelativeTimeRange::between(50, 101))
        .into();
    assert!(bad_percentage.validate().is_err());

    let missing_targets: Rule = TranscriptFilter::new()
        .with_transcript_filter_type(TranscriptFilterType::Exact)
        .into();
    assert!(missing_targets.validate().is_err());

    let empty_sentiments: Rule = SentimentFilter::new().with_sentiments(Vec::new()).into();
    assert!(empty_sentiments.validate().is_err());
}

#[test]
fn time_range_usage_modes_are_not_cross_checked() {
    let mixed = AbsoluteTimeRange::between(1_000, 500).with_first(10);
    assert!(mixed.validate().is_ok());
}

#[test]
fn categories_bound_the_rule_count() {
    let no_rules = CategoryProperties::new()
        .with_category_name("empty")
        .with_rules(Vec::new());
    assert!(no_rules.validate().is_err());

    let rule: Rule = InterruptionFilter::new().with_threshold(1_000).into();
    let too_many = CategoryProperties::new().with_rules(vec![rule; 21]);
    assert!(too_many.validate().is_err());

    let nested_failure = CategoryProperties::new().with_rules(vec![TranscriptFilter::new().into()]);
    assert!(nested_failure.validate().is_err());
}
