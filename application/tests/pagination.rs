use transcribe_application::{
    next_page, ListTranscriptionJobsRequest, ListTranscriptionJobsResult,
    ListVocabularyFiltersRequest, ListVocabularyFiltersResult, PagedRequest, PagedResult,
};
use transcribe_domain::{TranscriptionJobStatus, TranscriptionJobSummary, VocabularyFilterInfo};

#[test]
fn next_page_carries_the_continuation_token() {
    let request = ListTranscriptionJobsRequest::new()
        .with_status(TranscriptionJobStatus::Completed)
        .with_max_results(25);
    let result = ListTranscriptionJobsResult::new()
        .with_status(TranscriptionJobStatus::Completed)
        .with_next_token("page-2")
        .with_transcription_job_summaries(vec![
            TranscriptionJobSummary::new().with_transcription_job_name("a"),
            TranscriptionJobSummary::new().with_transcription_job_name("b"),
        ]);

    assert_eq!(result.items().len(), 2);

    let next = next_page(&request, &result).expect("more pages");
    assert_eq!(PagedRequest::next_token(&next), Some("page-2"));
    assert_eq!(next.status, Some(TranscriptionJobStatus::Completed));
    assert_eq!(next.max_results, Some(25));
}

#[test]
fn last_page_has_no_follow_up() {
    let request = ListVocabularyFiltersRequest::new();

    let without_token = ListVocabularyFiltersResult::new()
        .with_vocabulary_filters(vec![VocabularyFilterInfo::new()]);
    assert!(next_page(&request, &without_token).is_none());

    let empty_token = ListVocabularyFiltersResult::new().with_next_token("");
    assert!(next_page(&request, &empty_token).is_none());
    assert!(empty_token.items().is_empty());
}

#[test]
fn default_page_size_only_fills_gaps() {
    let unset = ListVocabularyFiltersRequest::new().with_default_page_size(100);
    assert_eq!(PagedRequest::max_results(&unset), Some(100));

    let chosen = ListVocabularyFiltersRequest::new()
        .with_max_results(10)
        .with_default_page_size(100);
    assert_eq!(PagedRequest::max_results(&chosen), Some(10));
}
