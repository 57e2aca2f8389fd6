//! Unified data model for music library representation
//!
//! This module defines data structures that are independent of
//! both the input (library source) and output (export format).

mod snapshot;
mod track;

pub use snapshot::{build_snapshot, LibrarySnapshot, TOP_TRACKS_LIMIT};
pub use track::{RawTrack, Track, UNKNOWN_ALBUM, UNKNOWN_ARTIST, UNKNOWN_TITLE};
