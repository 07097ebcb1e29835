//! `gtc lookup -f address=...` – look up coordinates and print the view.

use anyhow::Result;
use gtc_core::actions;
use gtc_core::config::GtcConfig;
use gtc_core::form::fields_from_pairs;

pub fn run_lookup(cfg: &GtcConfig, field_pairs: &[String]) -> Result<()> {
    let fields = fields_from_pairs(field_pairs);
    let view = actions::lookup_coordinates(cfg, &fields)?;
    if view.error_visible {
        println!("error: {}", view.error);
    } else if !view.address.is_empty() {
        println!("address:     {}", view.address);
        println!("coordinates: {}{}", view.latitude, view.longitude);
    } else {
        println!("no result");
    }
    Ok(())
}
