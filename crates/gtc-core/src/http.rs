//! HTTP plumbing: blocking POSTs via the curl crate (libcurl Easy).
//!
//! Headers are collected line by line through the header callback, the body
//! through the write callback. Runs on the calling thread.

use crate::config::GtcConfig;
use crate::error::ClientError;
use crate::headers::HeaderMap;
use std::str;
use std::time::Duration;

/// A completed response: status code, parsed header map, raw body bytes.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: u32,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Parse the body as JSON.
    pub fn json(&self) -> Result<serde_json::Value, ClientError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// POST urlencoded form fields and return the full response.
/// Non-2xx statuses are errors.
pub fn post_form(url: &str, body: &str, cfg: &GtcConfig) -> Result<HttpResponse, ClientError> {
    post(url, Some(body), cfg)
}

/// POST with an empty body (download endpoints take no fields).
pub fn post_empty(url: &str, cfg: &GtcConfig) -> Result<HttpResponse, ClientError> {
    post(url, None, cfg)
}

fn post(url: &str, body: Option<&str>, cfg: &GtcConfig) -> Result<HttpResponse, ClientError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.post(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(cfg.request_timeout_secs))?;

    match body {
        Some(fields) => {
            easy.post_fields_copy(fields.as_bytes())?;
            let mut list = curl::easy::List::new();
            list.append("Content-Type: application/x-www-form-urlencoded")?;
            easy.http_headers(list)?;
        }
        None => {
            easy.post_field_size(0)?;
        }
    }

    let mut header_lines: Vec<String> = Vec::new();
    let mut body_buf: Vec<u8> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body_buf.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    tracing::debug!(url, status, bytes = body_buf.len(), "POST completed");
    if !(200..300).contains(&status) {
        return Err(ClientError::Http(status));
    }

    Ok(HttpResponse {
        status,
        headers: HeaderMap::from_lines(&header_lines),
        body: body_buf,
    })
}
