//! mojodoc - Build-time metadata extraction for plugin goals
//!
//! This crate provides functionality to:
//! - Locate where the sources of annotated goal classes live
//! - Gather source documentation for them through pluggable back-ends
//! - Resolve documentation over class hierarchies
//! - Assemble finished, deterministically ordered goal descriptors
pub mod config;
pub mod error;
pub mod extractor;
pub mod interfaces;
pub mod services;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::ExtractorConfig;
pub use extractor::{DescriptorExtractor, Documentation, Extraction, ExtractionReport, ExtractionWarning};
