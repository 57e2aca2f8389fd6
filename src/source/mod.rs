//! Library sources
//!
//! A library source is the one place raw track data comes from. The rest of
//! the crate only sees the records it returns.

mod rhythmbox;

pub use rhythmbox::{parse_database, parse_reader, RhythmboxSource};

use crate::error::QueryError;
use crate::model::RawTrack;

/// Supplies raw track records - allows swapping the backing media library
pub trait LibrarySource: Send + Sync {
    /// Read every track the library knows about
    fn query_library(&self) -> Result<Vec<RawTrack>, QueryError>;
}

/// Library source over a fixed list of records
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tracks: Vec<RawTrack>,
}

impl MemorySource {
    pub fn new(tracks: Vec<RawTrack>) -> Self {
        Self { tracks }
    }
}

impl LibrarySource for MemorySource {
    fn query_library(&self) -> Result<Vec<RawTrack>, QueryError> {
        Ok(self.tracks.clone())
    }
}
