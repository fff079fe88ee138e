//! Cloudpost CLI: upload local files to the media provider and delete the local copies.
//!
//! Set CLOUD_NAME, CLOUD_API_KEY and CLOUD_API_SECRET (a `.env` file is read if present).

use anyhow::Context;
use clap::{Parser, Subcommand};
use cloudpost_cli::{init_tracing, utf8_paths, UploadReport};
use cloudpost_core::{Config, ResourceType};
use cloudpost_storage::create_uploader;
use futures::future::join_all;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cloudpost", about = "Cloud media upload CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload files, deleting each local copy afterwards
    Upload {
        /// Paths of the files to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Remote folder (overrides CLOUD_UPLOAD_FOLDER)
        #[arg(long)]
        folder: Option<String>,
        /// auto, image, video or raw (overrides CLOUD_RESOURCE_TYPE)
        #[arg(long)]
        resource_type: Option<ResourceType>,
    },
    /// Validate configuration and print it with secrets redacted
    Check,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = Config::from_env().context(
        "Failed to load configuration. Set CLOUD_NAME, CLOUD_API_KEY and CLOUD_API_SECRET",
    )?;
    config.validate().context("Invalid configuration")?;

    match cli.command {
        Commands::Upload {
            files,
            folder,
            resource_type,
        } => {
            if let Some(folder) = folder {
                config.upload_folder = Some(folder);
            }
            if let Some(resource_type) = resource_type {
                config.default_resource_type = resource_type;
            }

            let uploader = create_uploader(&config).context("Failed to create uploader")?;

            let paths = utf8_paths(&files)?;
            let results = join_all(paths.iter().map(|path| uploader.upload(path))).await;

            let mut failed = 0usize;
            for (path, result) in paths.iter().zip(results.iter()) {
                match result {
                    Ok(outcome) => print_json(&UploadReport::new(path, outcome))?,
                    Err(e) => {
                        failed += 1;
                        eprintln!("{}: {}", path, e);
                    }
                }
            }

            tracing::info!(
                total = paths.len(),
                failed,
                "Upload batch finished"
            );

            if failed > 0 {
                anyhow::bail!("{} of {} uploads failed", failed, paths.len());
            }
        }
        Commands::Check => {
            println!("{:#?}", config);
        }
    }

    Ok(())
}
