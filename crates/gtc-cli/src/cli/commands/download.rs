//! `gtc download <image_id>` – download one image.

use anyhow::Result;
use gtc_core::actions;
use gtc_core::config::GtcConfig;
use std::path::Path;

pub fn run_download(cfg: &GtcConfig, image_id: u64, dir: &Path) -> Result<()> {
    let saved = actions::download_image(cfg, image_id, dir)?;
    println!(
        "Saved {} ({}) to {}",
        saved.filename,
        saved.content_type.as_deref().unwrap_or("unknown type"),
        saved.path.display()
    );
    Ok(())
}
