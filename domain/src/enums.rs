use crate::DomainError;

/// Common surface of every wire enumeration.
pub trait WireEnum: Copy + Sized + 'static {
    const TYPE_NAME: &'static str;

    fn values() -> &'static [Self];
    fn as_str(&self) -> &'static str;
    fn from_value(value: &str) -> Result<Self, DomainError>;
}

wire_enum! {
    pub enum TranscriptionJobStatus {
        Queued => "QUEUED",
        InProgress => "IN_PROGRESS",
        Failed => "FAILED",
        Completed => "COMPLETED",
    }
}

wire_enum! {
    pub enum CallAnalyticsJobStatus {
        Queued => "QUEUED",
        InProgress => "IN_PROGRESS",
        Failed => "FAILED",
        Completed => "COMPLETED",
    }
}

wire_enum! {
    pub enum MedicalScribeJobStatus {
        Queued => "QUEUED",
        InProgress => "IN_PROGRESS",
        Failed => "FAILED",
        Completed => "COMPLETED",
    }
}

wire_enum! {
    /// Languages accepted for standard and call analytics transcription.
    pub enum LanguageCode {
        AfZa => "af-ZA",
        ArAe => "ar-AE",
        ArSa => "ar-SA",
        CyGb => "cy-GB",
        DaDk => "da-DK",
        DeCh => "de-CH",
        DeDe => "de-DE",
        EnAb => "en-AB",
        EnAu => "en-AU",
        EnGb => "en-GB",
        EnIe => "en-IE",
        EnIn => "en-IN",
        EnUs => "en-US",
        EnWl => "en-WL",
        EsEs => "es-ES",
        EsUs => "es-US",
        FaIr => "fa-IR",
        FrCa => "fr-CA",
        FrFr => "fr-FR",
        GaIe => "ga-IE",
        GdGb => "gd-GB",
        HeIl => "he-IL",
        HiIn => "hi-IN",
        IdId => "id-ID",
        ItIt => "it-IT",
        JaJp => "ja-JP",
        KoKr => "ko-KR",
        MsMy => "ms-MY",
        NlNl => "nl-NL",
        PtBr => "pt-BR",
        PtPt => "pt-PT",
        RuRu => "ru-RU",
        TaIn => "ta-IN",
        TeIn => "te-IN",
        TrTr => "tr-TR",
        ZhCn => "zh-CN",
        ZhTw => "zh-TW",
        ThTh => "th-TH",
        EnZa => "en-ZA",
        EnNz => "en-NZ",
    }
}

wire_enum! {
    /// Medical Scribe only supports US English.
    pub enum MedicalScribeLanguageCode {
        EnUs => "en-US",
    }
}

wire_enum! {
    /// Languages a custom language model can be trained for.
    pub enum ClmLanguageCode {
        EnUs => "en-US",
        HiIn => "hi-IN",
        EsUs => "es-US",
        EnGb => "en-GB",
        EnAu => "en-AU",
    }
}

wire_enum! {
    pub enum MediaFormat {
        Mp3 => "mp3",
        Mp4 => "mp4",
        Wav => "wav",
        Flac => "flac",
        Ogg => "ogg",
        Amr => "amr",
        Webm => "webm",
    }
}

wire_enum! {
    pub enum VocabularyState {
        Pending => "PENDING",
        Ready => "READY",
        Failed => "FAILED",
    }
}

wire_enum! {
    pub enum ModelStatus {
        InProgress => "IN_PROGRESS",
        Failed => "FAILED",
        Completed => "COMPLETED",
    }
}

wire_enum! {
    /// Acoustic base of a custom language model: `NarrowBand` below 16 kHz.
    pub enum BaseModelName {
        NarrowBand => "NarrowBand",
        WideBand => "WideBand",
    }
}

wire_enum! {
    pub enum Specialty {
        PrimaryCare => "PRIMARYCARE",
    }
}

wire_enum! {
    /// Wire member `Type` of medical transcription jobs.
    pub enum MedicalTranscriptionType {
        Conversation => "CONVERSATION",
        Dictation => "DICTATION",
    }
}

wire_enum! {
    pub enum MedicalContentIdentificationType {
        Phi => "PHI",
    }
}

wire_enum! {
    pub enum RedactionType {
        Pii => "PII",
    }
}

wire_enum! {
    pub enum RedactionOutput {
        Redacted => "redacted",
        RedactedAndUnredacted => "redacted_and_unredacted",
    }
}

wire_enum! {
    pub enum PiiEntityType {
        BankAccountNumber => "BANK_ACCOUNT_NUMBER",
        BankRouting => "BANK_ROUTING",
        CreditDebitNumber => "CREDIT_DEBIT_NUMBER",
        CreditDebitCvv => "CREDIT_DEBIT_CVV",
        CreditDebitExpiry => "CREDIT_DEBIT_EXPIRY",
        Pin => "PIN",
        Email => "EMAIL",
        Address => "ADDRESS",
        Name => "NAME",
        Phone => "PHONE",
        Ssn => "SSN",
        All => "ALL",
    }
}

wire_enum! {
    pub enum VocabularyFilterMethod {
        Remove => "remove",
        Mask => "mask",
        Tag => "tag",
    }
}

wire_enum! {
    pub enum ParticipantRole {
        Agent => "AGENT",
        Customer => "CUSTOMER",
    }
}

wire_enum! {
    pub enum MedicalScribeParticipantRole {
        Patient => "PATIENT",
        Clinician => "CLINICIAN",
    }
}

wire_enum! {
    pub enum SentimentValue {
        Positive => "POSITIVE",
        Negative => "NEGATIVE",
        Neutral => "NEUTRAL",
        Mixed => "MIXED",
    }
}

wire_enum! {
    pub enum TranscriptFilterType {
        Exact => "EXACT",
    }
}

wire_enum! {
    pub enum OutputLocationType {
        CustomerBucket => "CUSTOMER_BUCKET",
        ServiceBucket => "SERVICE_BUCKET",
    }
}

wire_enum! {
    pub enum SubtitleFormat {
        Vtt => "vtt",
        Srt => "srt",
    }
}

wire_enum! {
    /// Whether a call analytics category applies to streaming or batch calls.
    pub enum InputType {
        RealTime => "REAL_TIME",
        PostCall => "POST_CALL",
    }
}

wire_enum! {
    pub enum ToxicityCategory {
        All => "ALL",
    }
}

fn wire_values<E: WireEnum>() -> (&'static str, Vec<&'static str>) {
    (E::TYPE_NAME, E::values().iter().map(WireEnum::as_str).collect())
}

/// Every enumeration of the model with its allowed wire values.
pub fn enumerations() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        wire_values::<TranscriptionJobStatus>(),
        wire_values::<CallAnalyticsJobStatus>(),
        wire_values::<MedicalScribeJobStatus>(),
        wire_values::<LanguageCode>(),
        wire_values::<MedicalScribeLanguageCode>(),
        wire_values::<ClmLanguageCode>(),
        wire_values::<MediaFormat>(),
        wire_values::<VocabularyState>(),
        wire_values::<ModelStatus>(),
        wire_values::<BaseModelName>(),
        wire_values::<Specialty>(),
        wire_values::<MedicalTranscriptionType>(),
        wire_values::<MedicalContentIdentificationType>(),
        wire_values::<RedactionType>(),
        wire_values::<RedactionOutput>(),
        wire_values::<PiiEntityType>(),
        wire_values::<VocabularyFilterMethod>(),
        wire_values::<ParticipantRole>(),
        wire_values::<MedicalScribeParticipantRole>(),
        wire_values::<SentimentValue>(),
        wire_values::<TranscriptFilterType>(),
        wire_values::<OutputLocationType>(),
        wire_values::<SubtitleFormat>(),
        wire_values::<InputType>(),
        wire_values::<ToxicityCategory>(),
    ]
}

/// Allowed wire values of the enumeration called `type_name`.
pub fn allowed_values(type_name: &str) -> Option<Vec<&'static str>> {
    enumerations()
        .into_iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, values)| values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_round_trip<E>()
    where
        E: WireEnum + PartialEq + std::fmt::Debug + std::fmt::Display,
    {
        for value in E::values() {
            assert_eq!(E::from_value(&value.to_string()).as_ref(), Ok(value));
            assert_eq!(E::from_value(value.as_str()).as_ref(), Ok(value));
        }
        assert!(E::from_value("").is_err());
        assert!(E::from_value("NOT-A-VALUE").is_err());
    }

    #[test]
    fn every_enumeration_round_trips() {
        assert_round_trip::<TranscriptionJobStatus>();
        assert_round_trip::<CallAnalyticsJobStatus>();
        assert_round_trip::<MedicalScribeJobStatus>();
        assert_round_trip::<LanguageCode>();
        assert_round_trip::<MedicalScribeLanguageCode>();
        assert_round_trip::<ClmLanguageCode>();
        assert_round_trip::<MediaFormat>();
        assert_round_trip::<VocabularyState>();
        assert_round_trip::<ModelStatus>();
        assert_round_trip::<BaseModelName>();
        assert_round_trip::<Specialty>();
        assert_round_trip::<MedicalTranscriptionType>();
        assert_round_trip::<MedicalContentIdentificationType>();
        assert_round_trip::<RedactionType>();
        assert_round_trip::<RedactionOutput>();
        assert_round_trip::<PiiEntityType>();
        assert_round_trip::<VocabularyFilterMethod>();
        assert_round_trip::<ParticipantRole>();
        assert_round_trip::<MedicalScribeParticipantRole>();
        assert_round_trip::<SentimentValue>();
        assert_round_trip::<TranscriptFilterType>();
        assert_round_trip::<OutputLocationType>();
        assert_round_trip::<SubtitleFormat>();
        assert_round_trip::<InputType>();
        assert_round_trip::<ToxicityCategory>();
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(MediaFormat::from_value("wav"), Ok(MediaFormat::Wav));
        assert!(MediaFormat::from_value("WAV").is_err());
        assert!(LanguageCode::from_value("en-us").is_err());
    }

    #[test]
    fn errors_name_the_offending_value() {
        let error = VocabularyState::from_value("DELETED").unwrap_err();
        assert_eq!(
            error,
            DomainError::InvalidArgument("Cannot create enum from DELETED value!".to_string())
        );
        assert_eq!(
            VocabularyState::from_value("").unwrap_err().to_string(),
            "Invalid argument: Value cannot be null or empty!"
        );
    }

    #[test]
    fn language_codes_keep_table_order() {
        let values = LanguageCode::values();
        assert_eq!(values.len(), 40);
        assert_eq!(values.first(), Some(&LanguageCode::AfZa));
        assert_eq!(values.last(), Some(&LanguageCode::EnNz));
    }

    #[test]
    fn allowed_values_are_listed_by_type_name() {
        assert_eq!(
            allowed_values("VocabularyFilterMethod"),
            Some(vec!["remove", "mask", "tag"])
        );
        assert_eq!(allowed_values("Unknown"), None);
        assert_eq!(enumerations().len(), 25);
    }
}
