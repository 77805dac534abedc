use anyhow::{Context, Result};
use mojodoc_core::DescriptorExtractor;
use std::path::Path;

use super::config_search_start;
use crate::display::{format_class_doc, print_warnings};
use crate::utils::{load_config, read_request};

pub fn docs_command(request_path: &Path, config: Option<&Path>) -> Result<()> {
    let config = load_config(config, config_search_start(request_path))?;
    let request = read_request(request_path)?;

    let extractor = DescriptorExtractor::with_config(config);
    let documentation = extractor
        .document(&request)
        .with_context(|| format!("Failed to gather documentation for {}", request.project.id()))?;

    print_warnings(&documentation.report.warnings);

    println!(
        "📚 {} documented classes from {} scan requests",
        documentation.class_docs.len(),
        documentation.report.scan_requests.len()
    );
    for doc in documentation.class_docs.values() {
        println!("   {}", format_class_doc(doc));
    }

    Ok(())
}
