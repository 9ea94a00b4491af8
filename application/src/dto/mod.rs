mod call_analytics;
mod language_model;
mod medical_scribe;
mod medical_transcription_job;
mod tagging;
mod transcription_job;
mod vocabulary;
mod vocabulary_filter;

pub use call_analytics::*;
pub use language_model::*;
pub use medical_scribe::*;
pub use medical_transcription_job::*;
pub use tagging::*;
pub use transcription_job::*;
pub use vocabulary::*;
pub use vocabulary_filter::*;
