//! CLI for the gtc geotag backend client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gtc_core::config;
use gtc_core::dispatch::{Action, Dispatcher};

use commands::{run_download, run_download_all, run_download_tagged, run_lookup, run_tag};

/// Top-level CLI for the gtc geotag backend client.
#[derive(Debug, Parser)]
#[command(name = "gtc")]
#[command(about = "gtc: client for the geotag backend (tag, lookup, download)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Tag an image with form fields (must include image_id_val).
    Tag {
        /// Form field as NAME=VALUE; repeatable.
        #[arg(short = 'f', long = "field", value_name = "NAME=VALUE")]
        field: Vec<String>,
    },

    /// Look up coordinates for an address form.
    Lookup {
        /// Form field as NAME=VALUE; repeatable (e.g. -f "address=10 Downing St").
        #[arg(short = 'f', long = "field", value_name = "NAME=VALUE")]
        field: Vec<String>,
    },

    /// Download one image by its id.
    Download {
        /// Image identifier.
        image_id: u64,
    },

    /// Download every upload as one archive.
    DownloadAll,

    /// Download only the tagged uploads (not bound in the default dispatcher).
    DownloadTagged,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let dispatcher = Dispatcher::with_default_bindings();
        let download_dir = match &cfg.download_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        match cli.command {
            CliCommand::Tag { field } => {
                dispatcher.ensure_bound(Action::TagImage)?;
                run_tag(&cfg, &field)?;
            }
            CliCommand::Lookup { field } => {
                dispatcher.ensure_bound(Action::LookupCoordinates)?;
                run_lookup(&cfg, &field)?;
            }
            CliCommand::Download { image_id } => {
                dispatcher.ensure_bound(Action::DownloadImage)?;
                run_download(&cfg, image_id, &download_dir)?;
            }
            CliCommand::DownloadAll => {
                dispatcher.ensure_bound(Action::DownloadAll)?;
                run_download_all(&cfg, &download_dir)?;
            }
            CliCommand::DownloadTagged => {
                dispatcher.ensure_bound(Action::DownloadTagged)?;
                run_download_tagged(&cfg, &download_dir)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
