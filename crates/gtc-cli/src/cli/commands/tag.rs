//! `gtc tag -f name=value ...` – tag an image and print the JSON response.

use anyhow::Result;
use gtc_core::actions;
use gtc_core::config::GtcConfig;
use gtc_core::form::fields_from_pairs;

pub fn run_tag(cfg: &GtcConfig, field_pairs: &[String]) -> Result<()> {
    let fields = fields_from_pairs(field_pairs);
    let resp = actions::tag_image(cfg, &fields)?;
    println!("{}", serde_json::to_string_pretty(&resp)?);
    Ok(())
}
