//! Type definitions for the score inference pipeline

pub mod input;
pub mod record;
pub mod response;

pub use input::StudentInput;
pub use record::{NormalizedRecord, Substitution};
pub use response::PredictionReport;
