use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::dto::*;
use crate::registry::OperationRegistryBuilder;

/// Prefix of the JSON protocol target header, `Transcribe.<Operation>`.
pub const TARGET_PREFIX: &str = "Transcribe";

/// A request record bound to the service operation that accepts it.
pub trait Operation: Serialize + DeserializeOwned + Validate + Debug {
    type Output: Serialize + DeserializeOwned + Debug;

    const NAME: &'static str;

    fn target() -> String {
        format!("{TARGET_PREFIX}.{}", Self::NAME)
    }
}

macro_rules! operations {
    ($($name:ident: $request:ty => $result:ty),+ $(,)?) => {
        $(
            impl Operation for $request {
                type Output = $result;
                const NAME: &'static str = stringify!($name);
            }
        )+

        /// Every operation name, grouped the way the client interface groups them.
        pub const OPERATION_NAMES: &[&str] = &[$(stringify!($name)),+];

        pub(crate) fn register_all(builder: OperationRegistryBuilder) -> OperationRegistryBuilder {
            builder $(.register::<$request>())+
        }
    };
}

operations! {
    CreateLanguageModel: CreateLanguageModelRequest => CreateLanguageModelResult,
    DescribeLanguageModel: DescribeLanguageModelRequest => DescribeLanguageModelResult,
    ListLanguageModels: ListLanguageModelsRequest => ListLanguageModelsResult,
    DeleteLanguageModel: DeleteLanguageModelRequest => DeleteLanguageModelResult,

    CreateVocabulary: CreateVocabularyRequest => CreateVocabularyResult,
    GetVocabulary: GetVocabularyRequest => GetVocabularyResult,
    ListVocabularies: ListVocabulariesRequest => ListVocabulariesResult,
    UpdateVocabulary: UpdateVocabularyRequest => UpdateVocabularyResult,
    DeleteVocabulary: DeleteVocabularyRequest => DeleteVocabularyResult,

    CreateMedicalVocabulary: CreateMedicalVocabularyRequest => CreateMedicalVocabularyResult,
    GetMedicalVocabulary: GetMedicalVocabularyRequest => GetMedicalVocabularyResult,
    ListMedicalVocabularies: ListMedicalVocabulariesRequest => ListMedicalVocabulariesResult,
    UpdateMedicalVocabulary: UpdateMedicalVocabularyRequest => UpdateMedicalVocabularyResult,
    DeleteMedicalVocabulary: DeleteMedicalVocabularyRequest => DeleteMedicalVocabularyResult,

    CreateVocabularyFilter: CreateVocabularyFilterRequest => CreateVocabularyFilterResult,
    GetVocabularyFilter: GetVocabularyFilterRequest => GetVocabularyFilterResult,
    ListVocabularyFilters: ListVocabularyFiltersRequest => ListVocabularyFiltersResult,
    UpdateVocabularyFilter: UpdateVocabularyFilterRequest => UpdateVocabularyFilterResult,
    DeleteVocabularyFilter: DeleteVocabularyFilterRequest => DeleteVocabularyFilterResult,

    StartTranscriptionJob: StartTranscriptionJobRequest => StartTranscriptionJobResult,
    GetTranscriptionJob: GetTranscriptionJobRequest => GetTranscriptionJobResult,
    ListTranscriptionJobs: ListTranscriptionJobsRequest => ListTranscriptionJobsResult,
    DeleteTranscriptionJob: DeleteTranscriptionJobRequest => DeleteTranscriptionJobResult,

    StartMedicalTranscriptionJob: StartMedicalTranscriptionJobRequest => StartMedicalTranscriptionJobResult,
    GetMedicalTranscriptionJob: GetMedicalTranscriptionJobRequest => GetMedicalTranscriptionJobResult,
    ListMedicalTranscriptionJobs: ListMedicalTranscriptionJobsRequest => ListMedicalTranscriptionJobsResult,
    DeleteMedicalTranscriptionJob: DeleteMedicalTranscriptionJobRequest => DeleteMedicalTranscriptionJobResult,

    StartCallAnalyticsJob: StartCallAnalyticsJobRequest => StartCallAnalyticsJobResult,
    GetCallAnalyticsJob: GetCallAnalyticsJobRequest => GetCallAnalyticsJobResult,
    ListCallAnalyticsJobs: ListCallAnalyticsJobsRequest => ListCallAnalyticsJobsResult,
    DeleteCallAnalyticsJob: DeleteCallAnalyticsJobRequest => DeleteCallAnalyticsJobResult,
    CreateCallAnalyticsCategory: CreateCallAnalyticsCategoryRequest => CreateCallAnalyticsCategoryResult,
    GetCallAnalyticsCategory: GetCallAnalyticsCategoryRequest => GetCallAnalyticsCategoryResult,
    ListCallAnalyticsCategories: ListCallAnalyticsCategoriesRequest => ListCallAnalyticsCategoriesResult,
    UpdateCallAnalyticsCategory: UpdateCallAnalyticsCategoryRequest => UpdateCallAnalyticsCategoryResult,
    DeleteCallAnalyticsCategory: DeleteCallAnalyticsCategoryRequest => DeleteCallAnalyticsCategoryResult,

    StartMedicalScribeJob: StartMedicalScribeJobRequest => StartMedicalScribeJobResult,
    GetMedicalScribeJob: GetMedicalScribeJobRequest => GetMedicalScribeJobResult,
    ListMedicalScribeJobs: ListMedicalScribeJobsRequest => ListMedicalScribeJobsResult,
    DeleteMedicalScribeJob: DeleteMedicalScribeJobRequest => DeleteMedicalScribeJobResult,

    TagResource: TagResourceRequest => TagResourceResult,
    UntagResource: UntagResourceRequest => UntagResourceResult,
    ListTagsForResource: ListTagsForResourceRequest => ListTagsForResourceResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_prefixes_the_operation_name() {
        assert_eq!(
            StartTranscriptionJobRequest::target(),
            "Transcribe.StartTranscriptionJob"
        );
        assert_eq!(ListTagsForResourceRequest::NAME, "ListTagsForResource");
    }

    #[test]
    fn every_operation_is_listed_once() {
        let mut names = OPERATION_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), OPERATION_NAMES.len());
        assert_eq!(OPERATION_NAMES.len(), 43);
    }
}
