use anyhow::{Context, Result};
use mojodoc_core::ExtractorConfig;
use std::{env, path::Path};
use tracing::info;

pub fn init_command(dir: Option<&Path>, force: bool) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => env::current_dir().context("Failed to get current directory")?,
    };

    let config_path = dir.join("mojodoc.json");
    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    ExtractorConfig::default()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    info!("Created config {}", config_path.display());
    println!("✅ Created config: {}", config_path.display());

    Ok(())
}
