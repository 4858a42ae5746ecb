use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Answer of the upload endpoint to a completed request.
#[derive(Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The endpoint answered `200 OK`, `body` is the full response text.
    Accepted { body: String },
    /// Any other status. Not an error: the caller decides how severe it is.
    Rejected { status: StatusCode },
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Failed to open coverage report at path: {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to reach the upload endpoint")]
    Transport(#[source] reqwest::Error),
}
