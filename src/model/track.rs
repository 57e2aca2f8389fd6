use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Title used when the source has no title for a track
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Artist used when the source has no artist for a track
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Album used when the source has no album for a track
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// One library entry as exported
///
/// Two tracks are the same track when their ids match, whatever
/// the other fields say.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Stable identifier, unique within a snapshot
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Number of times the track was played
    pub play_count: u64,
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Track {
    /// Whether the track was played at least once
    pub fn is_played(&self) -> bool {
        self.play_count > 0
    }

    /// Field-by-field comparison, unlike `==` which only looks at the id
    pub fn same_fields(&self, other: &Track) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.artist == other.artist
            && self.album == other.album
            && self.play_count == other.play_count
    }
}

/// A track as reported by a library source, before tag fallbacks apply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTrack {
    pub id: String,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub play_count: Option<u64>,
}

impl RawTrack {
    /// Create a raw track with only an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    pub fn with_play_count(mut self, play_count: u64) -> Self {
        self.play_count = Some(play_count);
        self
    }

    /// Resolve absent or empty fields into the unified Track model
    ///
    /// This is the only place where the "Unknown ..." fallbacks are applied.
    pub fn resolve(self) -> Track {
        Track {
            id: self.id,
            title: or_sentinel(self.title, UNKNOWN_TITLE),
            artist: or_sentinel(self.artist, UNKNOWN_ARTIST),
            album: or_sentinel(self.album, UNKNOWN_ALBUM),
            play_count: self.play_count.unwrap_or(0),
        }
    }
}

fn or_sentinel(value: Option<String>, sentinel: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => sentinel.to_string(),
    }
}
