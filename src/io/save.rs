//! Writing JSON artifacts

use super::metadata::ModelMetadata;
use crate::{Error, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Serialize any value as pretty JSON to `path`
pub fn save_json<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let data = serde_json::to_string_pretty(value)
        .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.write_all(b"\n")?;
    debug!(path = %path.display(), bytes = data.len(), "wrote json");
    Ok(())
}

/// Save model metadata as pretty JSON
///
/// # Example
///
/// ```no_run
/// use churnguard::io::{load_metadata, save_metadata};
///
/// let metadata = load_metadata("model.json")?;
/// save_metadata(&metadata, "model-copy.json")?;
/// # Ok::<(), churnguard::Error>(())
/// ```
pub fn save_metadata(metadata: &ModelMetadata, path: impl AsRef<Path>) -> Result<()> {
    save_json(metadata, path)
}
