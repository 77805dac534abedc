//! Documentation back-end interface

use crate::error::Result;
use crate::types::{ClassDocMap, ScanRequest};

/// Maps scan requests to per-class documentation.
///
/// A back-end is invoked once per extraction with every scan request, and
/// links superclass documentation across all of them.
pub trait DocBackend: Send + Sync {
    /// Name used in logs and configuration
    fn name(&self) -> &str;

    fn scan(&self, requests: &[ScanRequest]) -> Result<ClassDocMap>;
}
