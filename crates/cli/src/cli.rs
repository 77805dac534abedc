use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{docs_command, extract_command, init_command};

#[derive(Parser, Debug)]
#[command(name = "mojodoc")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Configuration file (defaults to the nearest mojodoc.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract goal descriptors for a build
    #[command(visible_alias = "x")]
    Extract {
        /// Path to the extraction request (JSON)
        request: PathBuf,

        /// Write descriptors to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the documentation gathered for a build
    #[command(visible_alias = "d")]
    Docs {
        /// Path to the extraction request (JSON)
        request: PathBuf,
    },
    /// Write a default configuration file
    Init {
        /// Directory to write mojodoc.json into (defaults to current directory)
        dir: Option<PathBuf>,

        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = self.config.as_deref();
        match self.command {
            Commands::Extract { request, output } => {
                extract_command(&request, output.as_deref(), config)
            }
            Commands::Docs { request } => docs_command(&request, config),
            Commands::Init { dir, force } => init_command(dir.as_deref(), force),
        }
    }
}
