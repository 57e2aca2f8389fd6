//! Rhythmbox library source
//!
//! Reads Rhythmbox's XML database, which records a play count for every
//! song in the local collection.

mod database;
mod model;

pub use database::{parse_database, parse_reader};

use super::LibrarySource;
use crate::error::QueryError;
use crate::model::RawTrack;
use std::path::PathBuf;

/// Library source backed by a rhythmdb.xml file
#[derive(Debug, Clone)]
pub struct RhythmboxSource {
    /// Path to rhythmdb.xml (typically ~/.local/share/rhythmbox/rhythmdb.xml)
    db_path: PathBuf,
}

impl RhythmboxSource {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

impl LibrarySource for RhythmboxSource {
    fn query_library(&self) -> Result<Vec<RawTrack>, QueryError> {
        log::info!("Parsing Rhythmbox database from {:?}", self.db_path);
        parse_database(&self.db_path)
    }
}
