//! Human-readable renderings of threshold and drift results
//!
//! The evaluation core only returns data; formatting lives here.

mod markdown;
mod text;


pub use markdown::{drift_markdown, evaluation_markdown, threshold_markdown};
pub use text::{drift_text, evaluation_text, threshold_text};

use crate::eval::threshold::ThresholdSource;

fn source_label(source: &ThresholdSource) -> String {
    match source {
        ThresholdSource::Optimized => "cost-optimized".to_string(),
        ThresholdSource::DefaultFallback { reason } => {
            let first_line = reason.lines().next().unwrap_or_default();
            format!("default fallback ({first_line})")
        }
    }
}

fn optional_metric(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.4}"))
}
