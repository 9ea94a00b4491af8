mod call_analytics;
mod language_model;
mod media;
mod medical;
mod rule;
mod settings;
mod time_range;
mod transcription_job;
mod vocabulary;

pub use call_analytics::*;
pub use language_model::*;
pub use media::*;
pub use medical::*;
pub use rule::*;
pub use settings::*;
pub use time_range::*;
pub use transcription_job::*;
pub use vocabulary::*;
