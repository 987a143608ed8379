use anyhow::Result;

use crate::types::FlatPlaylist;

pub mod ytdlp;

/// A provider able to list the Watch Later playlist for the configured
/// account. The pipeline only depends on this seam, so tests can run it
/// against fixture playlists.
pub trait PlaylistSource {
    fn fetch_watch_later(&mut self) -> Result<FlatPlaylist>;
}
