//! Reading monitor configuration from disk.

use super::schema::MonitorSpec;
use super::validate::validate_spec;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Serialization format of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Infer from the file extension; anything but `.json` is read as YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Parse and validate a monitor configuration from text
pub fn parse_spec(content: &str, format: ConfigFormat) -> Result<MonitorSpec> {
    let spec: MonitorSpec = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))?,
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse JSON config: {e}")))?,
    };
    validate_spec(&spec).map_err(|e| Error::ConfigError(format!("Invalid config: {e}")))?;
    Ok(spec)
}

/// Load and validate a configuration file
pub fn load_spec<P: AsRef<Path>>(path: P) -> Result<MonitorSpec> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("Failed to read config file {}: {e}", path.display()))
    })?;
    let spec = parse_spec(&content, ConfigFormat::from_path(path))?;
    debug!(path = %path.display(), "loaded monitor config");
    Ok(spec)
}
