//! The five client operations, each one request/response cycle.
//!
//! Every function is stateless: serialize (if the operation carries a form),
//! POST, then interpret the response. Nothing is shared across calls.

use crate::config::GtcConfig;
use crate::endpoints;
use crate::error::ClientError;
use crate::form::FormFields;
use crate::http;
use crate::save_as::{self, SavedFile};
use crate::view::CoordinateView;
use serde_json::Value;
use std::path::Path;

/// Tag an image: POST the form to `/geotag/{image_id}` and hand back the
/// JSON response as-is. The image id comes out of the `image_id_val` field.
pub fn tag_image(cfg: &GtcConfig, fields: &FormFields) -> Result<Value, ClientError> {
    let image_id = fields.image_id()?;
    let url = endpoints::tag_image(&cfg.base_url, image_id);
    let resp = http::post_form(&url, &fields.serialize(), cfg)?;
    resp.json()
}

/// Look up coordinates for an address form and fold the response into a
/// fresh [`CoordinateView`].
pub fn lookup_coordinates(
    cfg: &GtcConfig,
    fields: &FormFields,
) -> Result<CoordinateView, ClientError> {
    let url = endpoints::lookup_coordinates(&cfg.base_url);
    let resp = http::post_form(&url, &fields.serialize(), cfg)?;
    let mut view = CoordinateView::new();
    view.apply(&resp.json()?);
    Ok(view)
}

/// Download one image to `dir`, named from the response headers.
pub fn download_image(
    cfg: &GtcConfig,
    image_id: u64,
    dir: &Path,
) -> Result<SavedFile, ClientError> {
    let url = endpoints::download_image(&cfg.base_url, image_id);
    fetch_attachment(cfg, &url, dir)
}

/// Download the archive of every upload.
pub fn download_all(cfg: &GtcConfig, dir: &Path) -> Result<SavedFile, ClientError> {
    let url = endpoints::download_all(&cfg.base_url);
    fetch_attachment(cfg, &url, dir)
}

/// Download the archive of tagged uploads only. Implemented and reachable,
/// but the default dispatcher leaves this action unbound.
pub fn download_tagged(cfg: &GtcConfig, dir: &Path) -> Result<SavedFile, ClientError> {
    let url = endpoints::download_tagged(&cfg.base_url);
    fetch_attachment(cfg, &url, dir)
}

/// Shared download path: empty-body POST, then save the binary payload under
/// the `content-disposition` name.
fn fetch_attachment(cfg: &GtcConfig, url: &str, dir: &Path) -> Result<SavedFile, ClientError> {
    let resp = http::post_empty(url, cfg)?;
    save_as::save_attachment(dir, &resp.headers, &resp.body)
}
