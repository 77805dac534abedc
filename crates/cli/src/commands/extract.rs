use anyhow::{Context, Result};
use mojodoc_core::DescriptorExtractor;
use std::fs;
use std::path::Path;
use tracing::info;

use super::config_search_start;
use crate::display::print_warnings;
use crate::utils::{load_config, read_request};

pub fn extract_command(request_path: &Path, output: Option<&Path>, config: Option<&Path>) -> Result<()> {
    let config = load_config(config, config_search_start(request_path))?;
    let request = read_request(request_path)?;

    let extractor = DescriptorExtractor::with_config(config);
    let extraction = extractor
        .execute(&request)
        .with_context(|| format!("Failed to extract descriptors for {}", request.project.id()))?;

    print_warnings(&extraction.report.warnings);

    let json = serde_json::to_string_pretty(&extraction.descriptors)
        .context("Failed to serialize descriptors")?;

    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write descriptors to {}", path.display()))?;
            info!("Wrote {} descriptors to {}", extraction.descriptors.len(), path.display());
            eprintln!(
                "✅ Wrote {} goal descriptors to {}",
                extraction.descriptors.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
