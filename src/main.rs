//! Student Score Pipeline - Main Entry Point
//!
//! Reads one student record as JSON from stdin, normalizes it, runs the
//! preprocessor and model artifacts, and prints a prediction report.

use anyhow::{Context, Result};
use std::io::Read;
use student_score_pipeline::{
    config::AppConfig, frame::TabularFrame, models::pipeline::PredictPipeline,
    record_builder::RecordBuilder, types::input::StudentInput,
    types::response::PredictionReport,
};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging at the configured level
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(format!("student_score_pipeline={}", config.logging.level).parse()?);
    if config.logging.format == "json" {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("Starting student score pipeline");
    info!(
        artifacts_dir = %config.artifacts.dir,
        onnx_threads = config.artifacts.onnx_threads,
        "Configuration loaded successfully"
    );

    // Load artifacts and verify the preprocessor schema
    let mut pipeline = PredictPipeline::load(&config.artifacts)?;

    // Read one record from stdin
    let mut raw_json = String::new();
    std::io::stdin()
        .read_to_string(&mut raw_json)
        .context("Failed to read input from stdin")?;
    let raw: StudentInput =
        serde_json::from_str(&raw_json).context("Failed to deserialize student record")?;

    // Normalize, surfacing every defaulting decision
    let builder = RecordBuilder::new();
    let normalization = builder.build(&raw);
    for substitution in &normalization.substitutions {
        warn!(
            field = substitution.field,
            supplied = ?substitution.supplied,
            applied = %substitution.applied,
            "Input value replaced by default"
        );
    }

    let frame = TabularFrame::from_record(&normalization.record)?;
    let outputs = pipeline.predict(&frame)?;
    let predicted_score = outputs
        .first()
        .copied()
        .context("Model returned no output")?;

    info!(predicted_score, "Prediction complete");

    let report = PredictionReport::new(predicted_score, outputs, normalization.substitutions);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
