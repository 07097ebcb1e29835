//! URL builders for the geotag backend endpoints.

/// Join a path onto the configured base URL, tolerating a trailing slash.
fn join(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// POST target for tagging one image: `/geotag/{image_id}`.
pub fn tag_image(base_url: &str, image_id: u64) -> String {
    join(base_url, &format!("/geotag/{image_id}"))
}

/// POST target for address → coordinates lookup.
pub fn lookup_coordinates(base_url: &str) -> String {
    join(base_url, "/geotag/location/coordinates")
}

/// POST target for downloading one image: `/geotag/{image_id}/download`.
pub fn download_image(base_url: &str, image_id: u64) -> String {
    join(base_url, &format!("/geotag/{image_id}/download"))
}

/// POST target for downloading every upload as one archive.
pub fn download_all(base_url: &str) -> String {
    join(base_url, "/geotag/download/all")
}

/// POST target for downloading only the tagged uploads.
pub fn download_tagged(base_url: &str) -> String {
    join(base_url, "/geotag/download/tagged")
}
