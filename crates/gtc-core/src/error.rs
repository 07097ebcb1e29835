//! Client error taxonomy shared by the action functions.

use thiserror::Error;

/// Error returned by a single client operation (transport failure, HTTP
/// error, bad response shape, or local storage failure).
#[derive(Debug, Error)]
pub enum ClientError {
    /// Curl reported an error (timeout, connection, etc.).
    #[error(transparent)]
    Curl(#[from] curl::Error),

    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),

    /// Response body was not the JSON the operation expects.
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// A required response header was missing or unusable.
    #[error("missing or malformed {0} header")]
    MissingHeader(&'static str),

    /// Writing the downloaded attachment to disk failed.
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),

    /// The `image_id_val` form field was absent or had no leading digits.
    #[error("image_id_val field missing or not numeric")]
    ImageId,

    /// The action exists but is not bound in the dispatcher.
    #[error("action {0} is not bound")]
    Unbound(&'static str),
}
