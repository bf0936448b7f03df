//! Student Score Inference Pipeline
//!
//! Glue layer around a pre-trained tabular regression model: wraps raw
//! categorical/numeric fields into a single-row frame, runs it through a
//! fitted preprocessor and the model, and returns the predicted score.

pub mod config;
pub mod error;
pub mod frame;
pub mod models;
pub mod record_builder;
pub mod types;
pub mod vocabulary;

pub use config::AppConfig;
pub use error::{MalformedRecordError, PipelineError};
pub use frame::TabularFrame;
pub use models::pipeline::PredictPipeline;
pub use record_builder::RecordBuilder;
pub use types::{input::StudentInput, record::NormalizedRecord, response::PredictionReport};
pub use vocabulary::Vocabulary;
