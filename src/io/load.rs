//! Reading JSON inputs and artifacts

use super::metadata::ModelMetadata;
use crate::eval::drift::{FeatureBatch, FeatureValues};
use crate::eval::threshold::ScoredSample;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        Error::Serialization(format!("JSON deserialization of {} failed: {e}", path.display()))
    })
}

/// Load model metadata, validating the drift reference
pub fn load_metadata(path: impl AsRef<Path>) -> Result<ModelMetadata> {
    let path = path.as_ref();
    let metadata: ModelMetadata = read_json(path)?;
    metadata.reference.validate()?;
    metadata.costs.validate()?;
    if !(0.0..=1.0).contains(&metadata.threshold.threshold) {
        return Err(Error::InvalidParameter(format!(
            "stored threshold {} outside [0, 1]",
            metadata.threshold.threshold
        )));
    }
    debug!(
        path = %path.display(),
        model = %metadata.model_name,
        features = metadata.reference.len(),
        "loaded model metadata"
    );
    Ok(metadata)
}

/// Load scored samples from a JSON array of `{id, label?, probability}`
pub fn load_scored_samples(path: impl AsRef<Path>) -> Result<Vec<ScoredSample>> {
    let path = path.as_ref();
    let samples: Vec<ScoredSample> = read_json(path)?;
    debug!(path = %path.display(), samples = samples.len(), "loaded scored samples");
    Ok(samples)
}

/// Column as written on disk; `null` marks a missing value
#[derive(Deserialize)]
#[serde(untagged)]
enum RawColumn {
    Numeric(Vec<Option<f64>>),
    Categorical(Vec<Option<String>>),
}

impl From<RawColumn> for FeatureValues {
    fn from(raw: RawColumn) -> Self {
        match raw {
            RawColumn::Numeric(values) => {
                FeatureValues::Numeric(values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
            }
            RawColumn::Categorical(values) => {
                FeatureValues::Categorical(values.into_iter().flatten().collect())
            }
        }
    }
}

/// Parse a feature batch from JSON text
///
/// Numeric nulls become NaN (missing); categorical nulls are dropped.
pub fn parse_batch(content: &str) -> Result<FeatureBatch> {
    let raw: BTreeMap<String, RawColumn> = serde_json::from_str(content).map_err(|e| {
        Error::Serialization(format!(
            "feature batch must map feature names to arrays of numbers or strings: {e}"
        ))
    })?;
    Ok(raw.into_iter().map(|(name, column)| (name, column.into())).collect())
}

/// Load a feature batch or training columns from a JSON file
pub fn load_batch(path: impl AsRef<Path>) -> Result<FeatureBatch> {
    let path = path.as_ref();
    let batch = parse_batch(&fs::read_to_string(path)?)?;
    debug!(path = %path.display(), features = batch.len(), "loaded feature batch");
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::drift::{
        compute_drift, FeatureBaseline, FeatureReference, ReferenceBuilder, ReferenceDistribution,
        SeverityThresholds,
    };
    use crate::eval::threshold::{CostModel, OperatingThreshold, ThresholdSource};
    use crate::io::{save_json, save_metadata};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn metadata() -> ModelMetadata {
        let reference = ReferenceBuilder::new(4)
            .numeric("tenure", &[1.0, 5.0, 12.0, 24.0, 36.0, 60.0])
            .unwrap()
            .categorical("contract", &["monthly", "annual", "monthly"])
            .unwrap()
            .build()
            .unwrap();
        let threshold = OperatingThreshold {
            threshold: 0.5,
            source: ThresholdSource::DefaultFallback { reason: "no positives".into() },
            selection: None,
        };
        ModelMetadata::new("churn-xgb", CostModel::churn_economics(500.0, 50.0), threshold, reference)
            .with_rows(6, 20)
    }

    #[test]
    fn test_metadata_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        let original = metadata();
        save_metadata(&original, file.path()).unwrap();

        let text = std::fs::read_to_string(file.path()).unwrap();
        assert!(text.contains("\"-inf\""));
        assert!(text.contains("\"model_name\": \"churn-xgb\""));

        let loaded = load_metadata(file.path()).unwrap();
        assert_eq!(loaded, original);
        assert_eq!(loaded.training_rows, 6);
    }

    #[test]
    fn test_load_metadata_rejects_invalid_reference() {
        let mut broken = metadata();
        let mut features = broken.reference.features().to_vec();
        features[0] = FeatureBaseline {
            name: "tenure".into(),
            distribution: ReferenceDistribution::Numeric {
                edges: vec![0.0, 10.0],
                proportions: vec![1.0],
            },
        };
        // Bypass constructor validation to simulate an edited file
        let json = serde_json::to_string(&serde_json::json!({ "features": features })).unwrap();
        broken.reference = serde_json::from_str::<FeatureReference>(&json).unwrap();

        let file = NamedTempFile::new().unwrap();
        save_json(&broken, file.path()).unwrap();
        assert!(matches!(load_metadata(file.path()), Err(Error::InvalidReference { .. })));
    }

    #[test]
    fn test_load_scored_samples() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "c1", "label": 1, "probability": 0.8}}, {{"id": "c2", "probability": 0.1}}]"#
        )
        .unwrap();

        let samples = load_scored_samples(file.path()).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].label, Some(true));
        assert_eq!(samples[1].label, None);
    }

    #[test]
    fn test_parse_batch_nulls() {
        let batch = parse_batch(
            r#"{"tenure": [1, null, 3.5], "contract": ["monthly", null, "annual"], "empty": []}"#,
        )
        .unwrap();

        match &batch["tenure"] {
            FeatureValues::Numeric(v) => {
                assert_eq!(v.len(), 3);
                assert!(v[1].is_nan());
                assert_eq!(v[2], 3.5);
            }
            other => panic!("expected numeric column, got {other:?}"),
        }
        assert_eq!(batch["contract"], FeatureValues::from(vec!["monthly", "annual"]));
        assert!(batch["empty"].is_empty());
    }

    #[test]
    fn test_parsed_empty_categorical_column_is_empty_batch() {
        let reference = ReferenceBuilder::new(2)
            .numeric("tenure", &[1.0, 2.0, 3.0, 4.0])
            .unwrap()
            .categorical("contract", &["monthly", "annual"])
            .unwrap()
            .build()
            .unwrap();
        let thresholds = SeverityThresholds::default();

        for content in [
            r#"{"tenure": [1, 2], "contract": []}"#,
            r#"{"tenure": [1, 2], "contract": [null, null]}"#,
        ] {
            let batch = parse_batch(content).unwrap();
            let err = compute_drift(&reference, &batch, &thresholds).unwrap_err();
            assert!(matches!(err, Error::EmptyBatch), "{content}: {err:?}");
        }
    }

    #[test]
    fn test_parse_batch_rejects_mixed_columns() {
        assert!(matches!(parse_batch(r#"{"x": [1, "a"]}"#), Err(Error::Serialization(_))));
        assert!(matches!(parse_batch(r#"[1, 2]"#), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(load_batch("/nonexistent/batch.json"), Err(Error::Io(_))));
    }
}
