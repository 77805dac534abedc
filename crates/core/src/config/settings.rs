use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Config file names looked up, in order, in each directory
pub const CONFIG_FILE_NAMES: [&str; 2] = [".mojodoc.json", "mojodoc.json"];

/// One documentation back-end reading snapshot files with the given suffix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub name: String,
    pub suffix: String,
}

impl BackendConfig {
    pub fn new(name: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            suffix: suffix.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ExtractorConfig {
    /// Directory under the build directory where sources archives are unpacked
    pub sources_directory: String,
    /// Extra source root under each project's build directory
    pub generated_sources: PathBuf,
    /// Annotation index file inside the classes directory
    pub annotation_index: String,
    // Later back-ends win when two of them document the same class
    pub backends: Vec<BackendConfig>,
    /// Additional build-tool-injected roles, mapped to their expression
    pub injected_components: BTreeMap<String, String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            sources_directory: "maven-plugin-plugin-sources".to_string(),
            generated_sources: PathBuf::from("generated-sources").join("plugin"),
            annotation_index: "mojo-annotations.json".to_string(),
            backends: vec![
                BackendConfig::new("kotlin", ".kdoc.json"),
                BackendConfig::new("java", ".javadoc.json"),
            ],
            injected_components: BTreeMap::new(),
        }
    }
}

impl ExtractorConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ExtractorConfig = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.sources_directory.trim().is_empty() {
            return Err(Error::ConfigError(
                "sources_directory must not be empty".to_string(),
            ));
        }

        for backend in &self.backends {
            if backend.suffix.is_empty() {
                return Err(Error::ConfigError(format!(
                    "backend '{}' has an empty suffix",
                    backend.name
                )));
            }
        }

        Ok(())
    }
}
