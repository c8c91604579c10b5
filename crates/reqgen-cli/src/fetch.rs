use log::debug;
use thiserror::Error;

/// Retrieving the API document failed. Fatal: nothing is generated.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// GET the document at `url` and return its body as text. No retries.
pub fn fetch_document(url: &str) -> Result<String, FetchError> {
    debug!("fetching API document from {url}");
    let transport = |source| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    let response = reqwest::blocking::get(url).map_err(transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().map_err(transport)?;
    debug!("fetched {} bytes", body.len());
    Ok(body)
}
