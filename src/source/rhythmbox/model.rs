//! Internal Rhythmbox data structures for XML parsing

use crate::model::RawTrack;

/// Rhythmbox song entry (as stored in rhythmdb.xml)
#[derive(Debug, Clone, Default)]
pub struct RhythmboxEntry {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub location: Option<String>, // file:// URI
    pub play_count: Option<u64>,
}

impl RhythmboxEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stable track ID derived from the location URI
    pub fn track_id(&self) -> Option<String> {
        self.location
            .as_ref()
            .map(|loc| format!("{:x}", md5::compute(loc.as_bytes())))
    }

    /// Convert to a raw library record, if the entry has a location
    pub fn into_raw_track(self) -> Option<RawTrack> {
        let id = self.track_id()?;
        Some(RawTrack {
            id,
            title: self.title,
            artist: self.artist,
            album: self.album,
            play_count: self.play_count,
        })
    }
}
