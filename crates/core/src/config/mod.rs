//! Configuration management for mojodoc

mod settings;

// Re-export main types
pub use settings::{BackendConfig, ExtractorConfig, CONFIG_FILE_NAMES};
