//! Export serialization and orchestration

pub mod config;
pub mod csv;
pub mod format;
pub mod json;
pub mod pipeline;
pub mod sink;

pub use config::ExportConfig;
pub use csv::to_csv;
pub use format::ExportFormat;
pub use json::{from_json, to_json};
pub use pipeline::{ExportPipeline, ExportReport};
pub use sink::{ExportSink, FileSink};
