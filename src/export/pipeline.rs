//! Main export pipeline orchestration

use super::config::ExportConfig;
use super::format::ExportFormat;
use super::sink::ExportSink;
use crate::error::PipelineError;
use crate::model::{build_snapshot, LibrarySnapshot};
use crate::source::LibrarySource;
use std::path::PathBuf;

/// Outcome of one export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Where the sink put the document
    pub path: PathBuf,

    /// Format the document was written in
    pub format: ExportFormat,

    /// MIME type of the document, for whatever the export is shared with
    pub content_type: &'static str,

    /// Number of tracks in the document
    pub track_count: usize,
}

/// Main export pipeline
///
/// One run is: query the source, build a snapshot, serialize it, hand the
/// text to the sink. Every step's failure is returned to the caller as is.
pub struct ExportPipeline<S: LibrarySource, K: ExportSink> {
    config: ExportConfig,
    source: S,
    sink: K,
}

impl<S: LibrarySource, K: ExportSink> ExportPipeline<S, K> {
    /// Create a new export pipeline
    pub fn new(config: ExportConfig, source: S, sink: K) -> Self {
        Self {
            config,
            source,
            sink,
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Query the library source and build a fresh snapshot
    pub fn load(&self) -> Result<LibrarySnapshot, PipelineError> {
        log::info!("Querying music library...");
        let raw = self.source.query_library()?;
        log::debug!("Library source returned {} records", raw.len());

        let snapshot = build_snapshot(raw)?;

        log::info!(
            "Library loaded: {} tracks, {} played",
            snapshot.total_count(),
            snapshot.played_count()
        );
        Ok(snapshot)
    }

    /// Serialize a snapshot and hand it to the sink
    pub fn export(
        &self,
        snapshot: &LibrarySnapshot,
        timestamp: i64,
    ) -> Result<ExportReport, PipelineError> {
        let format = self.config.format;
        log::info!("Exporting {} tracks as {}", snapshot.total_count(), format);

        let text = format.serialize(snapshot)?;
        let name = self.config.suggested_name(timestamp);
        let path = self
            .sink
            .persist_and_offer(&text, &name, format.extension())?;

        log::debug!("Offered {:?} as {}", path, format.content_type());

        Ok(ExportReport {
            path,
            format,
            content_type: format.content_type(),
            track_count: snapshot.total_count(),
        })
    }

    /// Run the complete query and export process
    pub fn run(&self, timestamp: i64) -> Result<ExportReport, PipelineError> {
        let snapshot = self.load()?;
        self.export(&snapshot, timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{QueryError, SinkError};
    use crate::model::RawTrack;
    use crate::source::MemorySource;
    use std::sync::Mutex;

    /// Sink that keeps everything in memory
    #[derive(Default)]
    struct RecordingSink {
        offered: Mutex<Vec<(String, String, String)>>,
        fail: bool,
    }

    impl ExportSink for RecordingSink {
        fn persist_and_offer(
            &self,
            text: &str,
            suggested_name: &str,
            file_extension: &str,
        ) -> Result<PathBuf, SinkError> {
            if self.fail {
                return Err(SinkError::WriteFailed("disk full".to_string()));
            }
            self.offered.lock().unwrap().push((
                text.to_string(),
                suggested_name.to_string(),
                file_extension.to_string(),
            ));
            Ok(PathBuf::from(format!("{}.{}", suggested_name, file_extension)))
        }
    }

    struct FailingSource(QueryError);

    impl LibrarySource for FailingSource {
        fn query_library(&self) -> Result<Vec<RawTrack>, QueryError> {
            Err(self.0.clone())
        }
    }

    fn source() -> MemorySource {
        MemorySource::new(vec![
            RawTrack::new("1")
                .with_title("A")
                .with_artist("X")
                .with_album("Y")
                .with_play_count(5),
            RawTrack::new("2")
                .with_title("B")
                .with_artist("X")
                .with_album("Y")
                .with_play_count(0),
        ])
    }

    #[test]
    fn test_run_csv() {
        let pipeline = ExportPipeline::new(
            ExportConfig::new(ExportFormat::Csv),
            source(),
            RecordingSink::default(),
        );

        let report = pipeline.run(1700000000).unwrap();

        assert_eq!(report.path, PathBuf::from("music_play_counts_1700000000.csv"));
        assert_eq!(report.format, ExportFormat::Csv);
        assert_eq!(report.content_type, "text/csv");
        assert_eq!(report.track_count, 2);

        let offered = pipeline.sink.offered.lock().unwrap();
        assert_eq!(offered.len(), 1);
        assert_eq!(
            offered[0].0,
            "id,title,artist,album,play_count\n1,A,X,Y,5\n2,B,X,Y,0\n"
        );
        assert_eq!(offered[0].1, "music_play_counts_1700000000");
        assert_eq!(offered[0].2, "csv");
    }

    #[test]
    fn test_load_stats() {
        let pipeline =
            ExportPipeline::new(ExportConfig::default(), source(), RecordingSink::default());

        let snapshot = pipeline.load().unwrap();
        assert_eq!(snapshot.total_count(), 2);
        assert_eq!(snapshot.played_count(), 1);

        let top: Vec<&str> = snapshot.top_tracks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(top, vec!["1"]);
    }

    #[test]
    fn test_empty_library() {
        let pipeline = ExportPipeline::new(
            ExportConfig::default(),
            MemorySource::new(Vec::new()),
            RecordingSink::default(),
        );

        assert!(matches!(pipeline.run(0), Err(PipelineError::EmptyLibrary(_))));
        assert!(pipeline.sink.offered.lock().unwrap().is_empty());
    }

    #[test]
    fn test_query_errors_propagate_unchanged() {
        let pipeline = ExportPipeline::new(
            ExportConfig::default(),
            FailingSource(QueryError::Unauthorized),
            RecordingSink::default(),
        );

        match pipeline.run(0) {
            Err(PipelineError::Query(e)) => assert_eq!(e, QueryError::Unauthorized),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_sink_errors_propagate() {
        let sink = RecordingSink {
            fail: true,
            ..RecordingSink::default()
        };
        let pipeline = ExportPipeline::new(ExportConfig::default(), source(), sink);

        assert!(matches!(
            pipeline.run(0),
            Err(PipelineError::Sink(SinkError::WriteFailed(_)))
        ));
    }
}
