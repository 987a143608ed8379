use thiserror::Error;

use crate::types::Browser;

/// Raised when yt-dlp cannot return the playlist listing. Wraps the
/// underlying detail so the binary can print categorized remediation.
#[derive(Debug, Error)]
#[error("could not fetch the YouTube playlist using {browser} cookies: {detail}")]
pub struct ExtractionError {
    pub browser: Browser,
    pub detail: String,
}

impl ExtractionError {
    pub fn new(browser: Browser, detail: impl Into<String>) -> Self {
        ExtractionError {
            browser,
            detail: detail.into(),
        }
    }
}
