use super::{RawTrack, Track};
use crate::error::EmptyLibraryError;
use std::collections::HashMap;

/// How many tracks the "top played" summary shows
pub const TOP_TRACKS_LIMIT: usize = 10;

/// Point-in-time view of a music library
///
/// Tracks keep the order the source reported them in. A snapshot is never
/// modified after construction; fetching again produces a new one.
#[derive(Debug, Clone)]
pub struct LibrarySnapshot {
    /// Tracks in source order
    tracks: Vec<Track>,

    /// Position of the first track with each ID
    index: HashMap<String, usize>,
}

/// Build a snapshot from the records a library source returned
///
/// Every record is kept, in input order. IDs are expected to be unique; if a
/// source breaks that, lookups by ID return the first match.
pub fn build_snapshot<I>(raw: I) -> Result<LibrarySnapshot, EmptyLibraryError>
where
    I: IntoIterator<Item = RawTrack>,
{
    let mut tracks = Vec::new();
    let mut index = HashMap::new();

    for record in raw {
        if index.contains_key(&record.id) {
            log::debug!("Track ID reported more than once: {}", record.id);
        } else {
            index.insert(record.id.clone(), tracks.len());
        }
        tracks.push(record.resolve());
    }

    if tracks.is_empty() {
        return Err(EmptyLibraryError);
    }

    log::debug!("Built library snapshot with {} tracks", tracks.len());
    Ok(LibrarySnapshot { tracks, index })
}

impl LibrarySnapshot {
    /// All tracks, in source order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Get a track by ID
    pub fn get(&self, id: &str) -> Option<&Track> {
        self.index.get(id).map(|&i| &self.tracks[i])
    }

    /// Total number of tracks
    pub fn total_count(&self) -> usize {
        self.tracks.len()
    }

    /// Number of tracks played at least once
    pub fn played_count(&self) -> usize {
        self.tracks.iter().filter(|t| t.is_played()).count()
    }

    /// Sum of all play counts
    pub fn total_plays(&self) -> u64 {
        self.tracks
            .iter()
            .fold(0u64, |acc, t| acc.saturating_add(t.play_count))
    }

    /// The most played tracks, at most [`TOP_TRACKS_LIMIT`] of them
    pub fn top_tracks(&self) -> Vec<&Track> {
        self.top_tracks_n(TOP_TRACKS_LIMIT)
    }

    /// The `limit` most played tracks
    ///
    /// Unplayed tracks never appear. Equal play counts keep source order.
    pub fn top_tracks_n(&self, limit: usize) -> Vec<&Track> {
        let mut played: Vec<&Track> = self.tracks.iter().filter(|t| t.is_played()).collect();
        // sort_by is stable
        played.sort_by(|a, b| b.play_count.cmp(&a.play_count));
        played.truncate(limit);
        played
    }
}
