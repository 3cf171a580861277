//! CLI for imgrab.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use imgrab_core::archive::DEFAULT_LABEL;
use imgrab_core::config;
use std::path::PathBuf;

use commands::{run_config, run_fetch, run_retrieve, run_scan};

/// Top-level CLI for imgrab.
#[derive(Debug, Parser)]
#[command(name = "imgrab")]
#[command(about = "imgrab: collect a page's images and icons into a zip", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the distinct images and icons referenced by a page.
    Scan {
        /// Page URL, including scheme (http/https).
        url: String,
        /// Print the scan report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Scan a page, download its images and write images_<host>.zip.
    Fetch {
        /// Page URL, including scheme (http/https).
        url: String,
        /// Directory to write the archive into (default: current directory).
        #[arg(long, short, value_name = "DIR")]
        out: Option<PathBuf>,
        /// Only keep images with these extensions (e.g. --only png,svg).
        #[arg(long, value_delimiter = ',', value_name = "EXT")]
        only: Vec<String>,
    },

    /// Download an explicit list of image URLs into images_<label>.zip.
    Retrieve {
        /// Image URLs to download.
        #[arg(required = true)]
        urls: Vec<String>,
        /// Label used in the archive name.
        #[arg(long, default_value = DEFAULT_LABEL)]
        label: String,
        /// Directory to write the archive into (default: current directory).
        #[arg(long, short, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Show the config file path and effective settings.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Scan { url, json } => run_scan(&cfg, &url, json).await?,
            CliCommand::Fetch { url, out, only } => {
                let out_dir = resolve_out_dir(out)?;
                run_fetch(&cfg, &url, &out_dir, &only).await?;
            }
            CliCommand::Retrieve { urls, label, out } => {
                let out_dir = resolve_out_dir(out)?;
                run_retrieve(&cfg, urls, &label, &out_dir).await?;
            }
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

fn resolve_out_dir(out: Option<PathBuf>) -> Result<PathBuf> {
    match out {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}

#[cfg(test)]
mod tests;
