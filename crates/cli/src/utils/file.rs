use anyhow::{Context, Result};
use mojodoc_core::{ExtractionRequest, ExtractorConfig};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read an extraction request from a JSON file
pub fn read_request(path: &Path) -> Result<ExtractionRequest> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse request {}", path.display()))
}

/// Load the configuration: the explicit file when given, otherwise the
/// nearest config file above `start_dir`, otherwise the defaults
pub fn load_config(explicit: Option<&Path>, start_dir: &Path) -> Result<ExtractorConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match ExtractorConfig::find_config_file(start_dir) {
            Some(path) => path,
            None => {
                debug!("No config file found from {}, using defaults", start_dir.display());
                return Ok(ExtractorConfig::default());
            }
        },
    };

    debug!("Loading config from {}", path.display());
    ExtractorConfig::load_from_file(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))
}
