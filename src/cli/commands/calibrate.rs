//! Calibrate command implementation

use super::{spec_or_default, to_pretty_json};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{CalibrateArgs, OutputFormat};
use crate::eval::drift::{FeatureBatch, FeatureReference, ReferenceBuilder};
use crate::eval::threshold::resolve_operating_threshold;
use crate::io::{load_batch, load_scored_samples, save_metadata, ModelMetadata};
use crate::report::{threshold_markdown, threshold_text};

pub fn run_calibrate(args: CalibrateArgs, level: LogLevel) -> Result<(), String> {
    let spec = spec_or_default(args.config.as_deref())?;
    log(level, LogLevel::Normal, &format!("Calibrating: {}", args.model_name));

    let samples = load_scored_samples(&args.scores).map_err(|e| e.to_string())?;
    log(
        level,
        LogLevel::Verbose,
        &format!("  Validation samples: {} ({})", samples.len(), args.scores.display()),
    );

    let operating = resolve_operating_threshold(&samples, &spec.cost, &spec.threshold)
        .map_err(|e| format!("Threshold selection failed: {e}"))?;

    let mut train = load_batch(&args.train).map_err(|e| e.to_string())?;
    if train.remove(&args.label_column).is_some() {
        log(
            level,
            LogLevel::Verbose,
            &format!("  Dropped label column '{}' from reference", args.label_column),
        );
    }
    let reference = build_reference(&train, spec.drift.bins)?;
    let training_rows = train.values().map(|c| c.len()).max().unwrap_or(0);
    log(
        level,
        LogLevel::Verbose,
        &format!("  Reference features: {} ({training_rows} rows)", reference.len()),
    );

    let metadata = ModelMetadata::new(args.model_name, spec.cost, operating, reference)
        .with_rows(training_rows, samples.len());
    save_metadata(&metadata, &args.output).map_err(|e| e.to_string())?;

    match args.format {
        OutputFormat::Json => println!("{}", to_pretty_json(&metadata.threshold)?),
        OutputFormat::Markdown => print!("{}", threshold_markdown(&metadata.threshold)),
        OutputFormat::Text => log(level, LogLevel::Normal, threshold_text(&metadata.threshold).trim_end()),
    }
    log(level, LogLevel::Normal, &format!("✓ Metadata written to {}", args.output.display()));
    Ok(())
}

fn build_reference(train: &FeatureBatch, bins: usize) -> Result<FeatureReference, String> {
    let mut builder = ReferenceBuilder::new(bins);
    for (name, values) in train {
        builder = builder
            .column(name.as_str(), values)
            .map_err(|e| format!("Failed to capture reference for '{name}': {e}"))?;
    }
    builder.build().map_err(|e| e.to_string())
}
