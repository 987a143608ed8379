use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Title yt-dlp reports for playlist entries the account cannot view.
pub const PRIVATE_VIDEO_TITLE: &str = "[Private video]";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Firefox,
    Chrome,
}

impl Browser {
    /// Name in the form yt-dlp expects for --cookies-from-browser.
    pub fn id(&self) -> &'static str {
        match self {
            Browser::Firefox => "firefox",
            Browser::Chrome => "chrome",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Browser::Firefox => "Firefox",
            Browser::Chrome => "Chrome",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One playlist item as returned by a flat extraction. Fields can be
/// missing in what yt-dlp emits, so everything is optional.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FlatVideoEntry {
    pub id: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
}

impl FlatVideoEntry {
    pub fn is_private(&self) -> bool {
        self.title.as_deref() == Some(PRIVATE_VIDEO_TITLE)
    }
}

/// Flat listing of a playlist. Deleted or otherwise inaccessible slots
/// come through as null entries.
#[derive(Debug, Deserialize)]
pub struct FlatPlaylist {
    #[serde(default)]
    pub entries: Vec<Option<FlatVideoEntry>>,
}
