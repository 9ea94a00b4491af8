use crate::dto::*;
use crate::Operation;

/// A `List*` request that can ask for the page after a continuation token.
pub trait PagedRequest: Operation + Clone {
    fn next_token(&self) -> Option<&str>;
    fn max_results(&self) -> Option<i32>;
    fn with_next_token(self, token: String) -> Self;
    /// Sets the page size unless the caller already chose one.
    fn with_default_page_size(self, page_size: i32) -> Self;
}

/// A `List*` result: one page of items plus the token of the next page.
pub trait PagedResult {
    type Item;

    fn next_token(&self) -> Option<&str>;
    fn items(&self) -> &[Self::Item];
}

/// The request for the page after `result`, or `None` on the last page.
pub fn next_page<R>(request: &R, result: &R::Output) -> Option<R>
where
    R: PagedRequest,
    R::Output: PagedResult,
{
    let token = result.next_token().filter(|token| !token.is_empty())?;
    Some(request.clone().with_next_token(token.to_string()))
}

macro_rules! paged_requests {
    ($($request:ty),+ $(,)?) => {
        $(
            impl PagedRequest for $request {
                fn next_token(&self) -> Option<&str> {
                    self.next_token.as_deref()
                }

                fn max_results(&self) -> Option<i32> {
                    self.max_results
                }

                fn with_next_token(mut self, token: String) -> Self {
                    self.next_token = Some(token);
                    self
                }

                fn with_default_page_size(mut self, page_size: i32) -> Self {
                    self.max_results.get_or_insert(page_size);
                    self
                }
            }
        )+
    };
}

macro_rules! paged_results {
    ($($result:ty => $items:ident: $item:ty),+ $(,)?) => {
        $(
            impl PagedResult for $result {
                type Item = $item;

                fn next_token(&self) -> Option<&str> {
                    self.next_token.as_deref()
                }

                fn items(&self) -> &[$item] {
                    self.$items.as_deref().unwrap_or(&[])
                }
            }
        )+
    };
}

paged_requests!(
    ListLanguageModelsRequest,
    ListVocabulariesRequest,
    ListMedicalVocabulariesRequest,
    ListVocabularyFiltersRequest,
    ListTranscriptionJobsRequest,
    ListMedicalTranscriptionJobsRequest,
    ListCallAnalyticsJobsRequest,
    ListCallAnalyticsCategoriesRequest,
    ListMedicalScribeJobsRequest,
);

// ListMedicalVocabularies shares its result record with ListVocabularies.
paged_results!(
    ListLanguageModelsResult => models: transcribe_domain::LanguageModel,
    ListVocabulariesResult => vocabularies: transcribe_domain::VocabularyInfo,
    ListVocabularyFiltersResult => vocabulary_filters: transcribe_domain::VocabularyFilterInfo,
    ListTranscriptionJobsResult => transcription_job_summaries: transcribe_domain::TranscriptionJobSummary,
    ListMedicalTranscriptionJobsResult => medical_transcription_job_summaries: transcribe_domain::MedicalTranscriptionJobSummary,
    ListCallAnalyticsJobsResult => call_analytics_job_summaries: transcribe_domain::CallAnalyticsJobSummary,
    ListCallAnalyticsCategoriesResult => categories: transcribe_domain::CategoryProperties,
    ListMedicalScribeJobsResult => medical_scribe_job_summaries: transcribe_domain::MedicalScribeJobSummary,
);
