use std::process::Command;

use anyhow::Result;

use crate::error::ExtractionError;
use crate::logging::YtDlpLog;
use crate::types::{Browser, FlatPlaylist};

use super::PlaylistSource;

/// The implicit Watch Later playlist of the logged-in account.
pub const WATCH_LATER_URL: &str = "https://www.youtube.com/playlist?list=WL";

/// Runs the yt-dlp binary in flat-playlist mode with cookies taken from
/// a local browser profile. One attempt per run, no retries.
pub struct YtDlpSource {
    browser: Browser,
    profile_path: Option<String>,
    log: YtDlpLog,
}

impl YtDlpSource {
    /// The log decides where yt-dlp's own messages end up; hand in one
    /// backed by a progress bar to keep a live bar intact.
    pub fn new(browser: Browser, profile_path: Option<String>, log: YtDlpLog) -> Self {
        YtDlpSource {
            browser,
            profile_path,
            log,
        }
    }

    /// BROWSER or BROWSER:PROFILE, the format --cookies-from-browser
    /// takes. Without a profile yt-dlp locates the default one itself.
    fn cookies_arg(&self) -> String {
        match &self.profile_path {
            Some(profile) => format!("{}:{}", self.browser.id(), profile),
            None => self.browser.id().to_string(),
        }
    }

    fn build_args(&self) -> Vec<String> {
        vec![
            "-J".to_string(),
            "--flat-playlist".to_string(),
            "--no-progress".to_string(),
            "--cookies-from-browser".to_string(),
            self.cookies_arg(),
            "--".to_string(),
            WATCH_LATER_URL.to_string(),
        ]
    }
}

impl PlaylistSource for YtDlpSource {
    fn fetch_watch_later(&mut self) -> Result<FlatPlaylist> {
        let output = Command::new("yt-dlp")
            .args(self.build_args())
            .output()
            .map_err(|e| {
                ExtractionError::new(self.browser, format!("could not run yt-dlp: {}", e))
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines() {
            self.log.consume_stderr_line(line);
        }

        if !output.status.success() {
            let detail = stderr
                .lines()
                .rev()
                .find(|line| !line.trim().is_empty())
                .unwrap_or("yt-dlp exited with an error")
                .to_string();

            return Err(ExtractionError::new(self.browser, detail).into());
        }

        let playlist = parse_flat_playlist(&output.stdout)
            .map_err(|e| ExtractionError::new(self.browser, e.to_string()))?;

        Ok(playlist)
    }
}

fn parse_flat_playlist(raw: &[u8]) -> Result<FlatPlaylist> {
    let playlist: FlatPlaylist = serde_json::from_slice(raw)?;

    Ok(playlist)
}
