//! ONNX artifact loader

use crate::error::PipelineError;
use ort::session::{builder::GraphOptimizationLevel, Session};
use std::path::Path;
use tracing::info;

/// A loaded ONNX artifact with resolved tensor names
pub struct LoadedArtifact {
    /// Artifact name, for diagnostics
    pub name: String,
    /// ONNX Runtime session
    pub session: Session,
    /// Input name for the graph
    pub input_name: String,
    /// Output name for the result tensor
    pub output_name: String,
}

/// Loader for the model and preprocessor artifacts
pub struct ArtifactLoader {
    /// Number of threads for ONNX inference
    onnx_threads: usize,
}

impl ArtifactLoader {
    /// Create a new artifact loader with specified number of threads
    pub fn with_threads(onnx_threads: usize) -> Result<Self, PipelineError> {
        // Initialize ONNX Runtime
        ort::init().commit();
        info!(onnx_threads = onnx_threads, "ONNX Runtime initialized");
        Ok(Self { onnx_threads })
    }

    /// Load a single ONNX artifact from file
    pub fn load<P: AsRef<Path>>(&self, path: P, name: &str) -> Result<LoadedArtifact, PipelineError> {
        let path = path.as_ref();

        info!(artifact = %name, path = %path.display(), threads = self.onnx_threads, "Loading artifact");

        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(ort::Error::from)?
            .with_intra_threads(self.onnx_threads)
            .map_err(ort::Error::from)?
            .commit_from_file(path)
            .map_err(|source| PipelineError::Artifact {
                name: name.to_string(),
                path: path.to_path_buf(),
                source,
            })?;

        // Resolve input/output names from the graph
        let input_name = session
            .inputs()
            .first()
            .map(|i| i.name().to_string())
            .unwrap_or_else(|| "float_input".to_string());

        let output_name = session
            .outputs()
            .iter()
            .find(|o| o.name().contains("variable") || o.name().contains("output"))
            .map(|o| o.name().to_string())
            .unwrap_or_else(|| {
                session
                    .outputs()
                    .last()
                    .map(|o| o.name().to_string())
                    .unwrap_or_else(|| "variable".to_string())
            });

        info!(
            artifact = %name,
            input = %input_name,
            output = %output_name,
            "Artifact loaded successfully"
        );

        Ok(LoadedArtifact {
            name: name.to_string(),
            session,
            input_name,
            output_name,
        })
    }
}
