use std::path::Path;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use tokio::fs::File;
use tokio_util::io::ReaderStream;
use url::Url;

use crate::ci_provider::UploadEnvironment;
use crate::prelude::*;
use crate::request_client::STREAMING_CLIENT;

use super::interfaces::{UploadError, UploadOutcome};

pub const DEFAULT_UPLOAD_URL: &str = "https://codecov.io/upload/v2";

/// Uploader identifier expected by the v2 endpoint
const PACKAGE: &str = "bash-tbd";
const SERVICE: &str = "appveyor";

/// Size of the chunks read from the report file while streaming the body
const UPLOAD_CHUNK_SIZE: usize = 8 * 1024;

/// Build the upload URL from `upload_url`, replacing any query it already has.
///
/// Parameters are appended in a fixed order and form-urlencoded, so the `/`
/// separators of the `job` parameter end up as `%2F`.
pub fn build_upload_url(upload_url: &Url, environment: &UploadEnvironment) -> Url {
    let mut url = upload_url.clone();
    url.set_query(None);
    url.query_pairs_mut()
        .append_pair("package", PACKAGE)
        .append_pair("service", SERVICE)
        .append_pair("branch", &environment.branch)
        .append_pair("commit", &environment.commit)
        .append_pair("build", &environment.job_id)
        .append_pair("pr", &environment.pull_request_number)
        .append_pair("job", &environment.job())
        .append_pair("token", &environment.token);
    url
}

fn file_access_error(path: &Path) -> impl FnOnce(std::io::Error) -> UploadError + '_ {
    move |source| UploadError::FileAccess {
        path: path.to_path_buf(),
        source,
    }
}

// The request URL carries the upload token, keep it out of error messages
fn transport_error(error: reqwest::Error) -> UploadError {
    UploadError::Transport(error.without_url())
}

/// Stream the report at `report_path` to the upload endpoint.
///
/// The report is opened before any request is made. A non-200 answer is
/// returned as [`UploadOutcome::Rejected`], never retried.
pub async fn upload(
    upload_url: &Url,
    report_path: &Path,
    environment: &UploadEnvironment,
) -> Result<UploadOutcome, UploadError> {
    let url = build_upload_url(upload_url, environment);

    let file = File::open(report_path)
        .await
        .map_err(file_access_error(report_path))?;
    let metadata = file
        .metadata()
        .await
        .map_err(file_access_error(report_path))?;
    if !metadata.is_file() {
        return Err(file_access_error(report_path)(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    let report_size = metadata.len();

    debug!(
        "Uploading {} bytes from {} to {}",
        report_size,
        report_path.display(),
        upload_url
    );
    let body = reqwest::Body::wrap_stream(ReaderStream::with_capacity(file, UPLOAD_CHUNK_SIZE));

    let response = STREAMING_CLIENT
        .post(url)
        .header(CONTENT_TYPE, "")
        .header(ACCEPT, "application/json")
        .header(CONTENT_LENGTH, report_size)
        .body(body)
        .send()
        .await
        .map_err(transport_error)?;

    let status = response.status();
    if status != StatusCode::OK {
        debug!("Upload endpoint answered {status}");
        return Ok(UploadOutcome::Rejected { status });
    }

    let body = response.text().await.map_err(transport_error)?;
    Ok(UploadOutcome::Accepted { body })
}
