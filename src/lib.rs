//! Music Play Counts - library statistics and play count exporter
//!
//! This library reads a music library through a pluggable source, summarizes
//! it and exports the tracks with their play counts as JSON or CSV.

pub mod error;
pub mod export;
pub mod model;
pub mod source;

pub use error::{EmptyLibraryError, PipelineError, QueryError, SerializationError, SinkError};
pub use export::{ExportConfig, ExportFormat, ExportPipeline, FileSink};
pub use model::{build_snapshot, LibrarySnapshot, RawTrack, Track};
