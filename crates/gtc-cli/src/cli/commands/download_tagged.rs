//! `gtc download-tagged` – download only the tagged uploads.
//!
//! Reachable only when the dispatcher binds `Action::DownloadTagged`; the
//! default bindings leave it off, so `run_from_args` refuses before getting
//! here.

use anyhow::Result;
use gtc_core::actions;
use gtc_core::config::GtcConfig;
use std::path::Path;

pub fn run_download_tagged(cfg: &GtcConfig, dir: &Path) -> Result<()> {
    let saved = actions::download_tagged(cfg, dir)?;
    println!(
        "Saved {} ({}) to {}",
        saved.filename,
        saved.content_type.as_deref().unwrap_or("unknown type"),
        saved.path.display()
    );
    Ok(())
}
