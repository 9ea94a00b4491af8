#[macro_use]
mod macros;

pub mod constraints;
mod display;
pub mod entity;
pub mod enums;
mod error;
mod float;
pub mod time;

pub use display::FieldDisplay;
pub use entity::*;
pub use enums::*;
pub use error::DomainError;
pub use float::Float;
pub use time::{epoch_seconds, Timestamp};
