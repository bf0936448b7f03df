//! Configuration management for the score inference pipeline

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub artifacts: ArtifactsConfig,
    pub logging: LoggingConfig,
}

/// Locations of the serialized model artifacts
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    /// Directory containing the artifact files
    #[serde(default = "default_artifacts_dir")]
    pub dir: String,
    /// Trained regression model file
    #[serde(default = "default_model_file")]
    pub model_file: String,
    /// Fitted preprocessor file
    #[serde(default = "default_preprocessor_file")]
    pub preprocessor_file: String,
    /// Preprocessor schema sidecar exported at training time
    #[serde(default = "default_schema_file")]
    pub schema_file: String,
    /// Number of threads for ONNX inference per session (default: 1)
    #[serde(default = "default_onnx_threads")]
    pub onnx_threads: usize,
}

fn default_artifacts_dir() -> String {
    "artifacts".to_string()
}

fn default_model_file() -> String {
    "model.onnx".to_string()
}

fn default_preprocessor_file() -> String {
    "preprocessor.onnx".to_string()
}

fn default_schema_file() -> String {
    "schema.json".to_string()
}

fn default_onnx_threads() -> usize {
    1
}

impl ArtifactsConfig {
    pub fn model_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.model_file)
    }

    pub fn preprocessor_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.preprocessor_file)
    }

    pub fn schema_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.schema_file)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty)
    pub format: String,
}

impl AppConfig {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/config.toml")
    }

    /// Load configuration from a specific path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            artifacts: ArtifactsConfig {
                dir: default_artifacts_dir(),
                model_file: default_model_file(),
                preprocessor_file: default_preprocessor_file(),
                schema_file: default_schema_file(),
                onnx_threads: 1,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.artifacts.dir, "artifacts");
        assert_eq!(config.artifacts.onnx_threads, 1);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_log_level_parses_as_directive() {
        let config = AppConfig::default();
        let directive = format!("student_score_pipeline={}", config.logging.level);
        assert!(directive
            .parse::<tracing_subscriber::filter::Directive>()
            .is_ok());
    }

    #[test]
    fn test_artifact_paths() {
        let config = AppConfig::default();
        assert_eq!(
            config.artifacts.model_path(),
            PathBuf::from("artifacts/model.onnx")
        );
        assert_eq!(
            config.artifacts.preprocessor_path(),
            PathBuf::from("artifacts/preprocessor.onnx")
        );
        assert_eq!(
            config.artifacts.schema_path(),
            PathBuf::from("artifacts/schema.json")
        );
    }
}
