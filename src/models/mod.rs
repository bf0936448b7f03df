//! Artifact loading and inference components

pub mod loader;
pub mod pipeline;
pub mod schema;

pub use loader::ArtifactLoader;
pub use pipeline::PredictPipeline;
pub use schema::PreprocessorSchema;
