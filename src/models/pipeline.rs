//! Predict pipeline: preprocessor transform followed by model predict.

use crate::config::ArtifactsConfig;
use crate::error::PipelineError;
use crate::frame::TabularFrame;
use crate::models::loader::{ArtifactLoader, LoadedArtifact};
use crate::models::schema::PreprocessorSchema;
use crate::vocabulary::Vocabulary;
use ort::value::Tensor;
use tracing::{debug, info};

/// Inference pipeline over the two loaded artifacts.
///
/// Both artifacts and the preprocessor schema are loaded once at
/// construction and cached for the lifetime of the pipeline; the artifacts
/// are static, so there is no invalidation. The schema is verified against
/// the static vocabulary before any prediction can run.
pub struct PredictPipeline {
    preprocessor: LoadedArtifact,
    model: LoadedArtifact,
    schema: PreprocessorSchema,
}

impl PredictPipeline {
    /// Load both artifacts and the schema, failing fast on a missing file,
    /// an undeserializable artifact, or a vocabulary/schema mismatch.
    pub fn load(config: &ArtifactsConfig) -> Result<Self, PipelineError> {
        let loader = ArtifactLoader::with_threads(config.onnx_threads)?;

        let preprocessor = loader.load(config.preprocessor_path(), "preprocessor")?;
        let model = loader.load(config.model_path(), "model")?;

        let schema = PreprocessorSchema::load(config.schema_path())?;
        schema.verify(&Vocabulary::new())?;

        info!("Predict pipeline initialized");

        Ok(Self {
            preprocessor,
            model,
            schema,
        })
    }

    /// Run one frame through the preprocessor and the model.
    ///
    /// Returns the raw model output, unmodified. Any failure is surfaced as
    /// a [`PipelineError`] carrying the failing artifact's context.
    pub fn predict(&mut self, frame: &TabularFrame) -> Result<Vec<f32>, PipelineError> {
        let encoded = self.schema.encode(frame)?;
        debug!(features = ?encoded, "Frame encoded for preprocessor");

        let scaled = run_artifact(&mut self.preprocessor, &encoded)?;
        debug!(scaled_len = scaled.len(), "Preprocessor transform complete");

        let outputs = run_artifact(&mut self.model, &scaled)?;
        if outputs.is_empty() {
            return Err(PipelineError::EmptyOutput {
                name: self.model.name.clone(),
            });
        }

        debug!(outputs = ?outputs, "Model predict complete");
        Ok(outputs)
    }
}

/// Run a single artifact on a feature vector shaped `[1, len]`.
fn run_artifact(artifact: &mut LoadedArtifact, features: &[f32]) -> Result<Vec<f32>, PipelineError> {
    let shape = vec![1_i64, features.len() as i64];
    let input_tensor =
        Tensor::from_array((shape, features.to_vec())).map_err(|source| PipelineError::Inference {
            name: artifact.name.clone(),
            source,
        })?;

    let input_name = artifact.input_name.clone();
    let outputs = artifact
        .session
        .run(ort::inputs![input_name.as_str() => input_tensor])
        .map_err(|source| PipelineError::Inference {
            name: artifact.name.clone(),
            source,
        })?;

    // Prefer the resolved output name.
    if let Some(value) = outputs.get(&artifact.output_name) {
        let (_, data) =
            value
                .try_extract_tensor::<f32>()
                .map_err(|source| PipelineError::Inference {
                    name: artifact.name.clone(),
                    source,
                })?;
        return Ok(data.to_vec());
    }

    // Fallback: first output that extracts as an f32 tensor.
    for (_name, value) in outputs.iter() {
        if let Ok((_, data)) = value.try_extract_tensor::<f32>() {
            return Ok(data.to_vec());
        }
    }

    Err(PipelineError::EmptyOutput {
        name: artifact.name.clone(),
    })
}
