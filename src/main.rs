use anyhow::{Context, Result};
use clap::Parser;
use music_play_counts::source::RhythmboxSource;
use music_play_counts::{ExportConfig, ExportFormat, ExportPipeline, FileSink, LibrarySnapshot};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "music-play-counts")]
#[command(about = "Summarize a music library and export its play counts", long_about = None)]
struct Args {
    /// Path to Rhythmbox database (rhythmdb.xml)
    #[arg(
        short = 'd',
        long,
        default_value = "~/.local/share/rhythmbox/rhythmdb.xml"
    )]
    database: String,

    /// Directory the export file is written to
    #[arg(short = 'o', long, default_value = ".")]
    output: PathBuf,

    /// Export format: json or csv
    #[arg(short = 'f', long, default_value = "json")]
    format: ExportFormat,

    /// Only print library statistics (no export)
    #[arg(long)]
    stats: bool,

    /// Delete previous exports older than this many days (0 keeps everything)
    #[arg(long, default_value = "3")]
    keep_days: u32,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn print_summary(snapshot: &LibrarySnapshot) {
    println!("Total songs:      {}", snapshot.total_count());
    println!("Songs with plays: {}", snapshot.played_count());
    println!("Total plays:      {}", snapshot.total_plays());

    let top = snapshot.top_tracks();
    if top.is_empty() {
        println!("No played songs yet.");
        return;
    }

    println!();
    println!("Top played songs:");
    for (i, track) in top.iter().enumerate() {
        println!(
            "{:>2}. {} - {} ({} plays)",
            i + 1,
            track.artist,
            track.title,
            track.play_count
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let db_path = shellexpand::tilde(&args.database);
    let source = RhythmboxSource::new(PathBuf::from(db_path.as_ref()));

    let sink = FileSink::new(args.output);
    let config = ExportConfig::new(args.format);
    let pipeline = ExportPipeline::new(config, source, sink);

    let snapshot = pipeline
        .load()
        .with_context(|| format!("Failed to load music library from {}", db_path))?;

    print_summary(&snapshot);

    if args.stats {
        return Ok(());
    }

    if args.keep_days > 0 {
        let removed = pipeline.sink().cleanup_old_exports(args.keep_days);
        if removed > 0 {
            log::info!("Removed {} export(s) older than {} days", removed, args.keep_days);
        }
    }

    let timestamp = chrono::Utc::now().timestamp();
    let report = pipeline
        .export(&snapshot, timestamp)
        .context("Failed to export play counts")?;

    log::info!(
        "Exported {} tracks as {} ({}) to {:?}",
        report.track_count,
        report.format,
        report.content_type,
        report.path
    );
    Ok(())
}
