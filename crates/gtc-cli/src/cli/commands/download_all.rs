//! `gtc download-all` – download the archive of every upload.

use anyhow::Result;
use gtc_core::actions;
use gtc_core::config::GtcConfig;
use std::path::Path;

pub fn run_download_all(cfg: &GtcConfig, dir: &Path) -> Result<()> {
    let saved = actions::download_all(cfg, dir)?;
    println!(
        "Saved {} ({}) to {}",
        saved.filename,
        saved.content_type.as_deref().unwrap_or("unknown type"),
        saved.path.display()
    );
    Ok(())
}
