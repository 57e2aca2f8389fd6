//! Rhythmbox database (rhythmdb.xml) parser

use super::model::RhythmboxEntry;
use crate::error::QueryError;
use crate::model::RawTrack;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Parse rhythmdb.xml and extract all song entries
pub fn parse_database(path: &Path) -> Result<Vec<RawTrack>, QueryError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            log::warn!("Rhythmbox database not found: {:?}", path);
            QueryError::NoData
        }
        ErrorKind::PermissionDenied => QueryError::Unauthorized,
        _ => QueryError::Unknown(format!("Failed to open {:?}: {}", path, e)),
    })?;

    let tracks = parse_reader(BufReader::new(file))?;
    log::info!("Parsed {} tracks from Rhythmbox database", tracks.len());
    Ok(tracks)
}

/// Parse rhythmdb.xml content from any buffered reader
pub fn parse_reader<R: BufRead>(source: R) -> Result<Vec<RawTrack>, QueryError> {
    let mut reader = Reader::from_reader(source);
    reader.config_mut().trim_text(true);

    let mut tracks = Vec::new();
    let mut current_entry: Option<RhythmboxEntry> = None;
    let mut current_element = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.name();
                match name.as_ref() {
                    b"entry" => {
                        // Only type="song" entries are library tracks
                        let is_song = e.attributes().flatten().any(|attr| {
                            attr.key.as_ref() == b"type" && attr.value.as_ref() == b"song"
                        });
                        if is_song {
                            current_entry = Some(RhythmboxEntry::new());
                        }
                    }
                    _ => {
                        if current_entry.is_some() {
                            current_element = String::from_utf8_lossy(name.as_ref()).to_string();
                        }
                    }
                }
            }

            Ok(Event::Text(e)) => {
                if let Some(ref mut entry) = current_entry {
                    let text = e.unescape().unwrap_or_default().to_string();

                    match current_element.as_str() {
                        "title" => entry.title = Some(text),
                        "artist" => entry.artist = Some(text),
                        "album" => entry.album = Some(text),
                        "location" => entry.location = Some(text),
                        "play-count" => match text.parse::<u64>() {
                            Ok(count) => entry.play_count = Some(count),
                            Err(_) => log::debug!("Ignoring invalid play-count: {:?}", text),
                        },
                        _ => {}
                    }
                }
            }

            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"entry" {
                    if let Some(entry) = current_entry.take() {
                        match entry.into_raw_track() {
                            Some(track) => tracks.push(track),
                            None => log::debug!("Skipping song entry without location"),
                        }
                    }
                }
                current_element.clear();
            }

            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(QueryError::Unknown(format!(
                    "XML parsing error at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }

        buf.clear();
    }

    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DB: &str = r#"<?xml version="1.0" standalone="yes"?>
<rhythmdb version="2.0">
  <entry type="song">
    <title>Hello, "World"</title>
    <artist>Tom &amp; Jerry</artist>
    <album>Cartoons</album>
    <location>file:///music/hello.mp3</location>
    <play-count>12</play-count>
  </entry>
  <entry type="iradio">
    <title>Some Radio</title>
    <location>http://radio.example/stream</location>
  </entry>
  <entry type="song">
    <title>Untagged</title>
    <location>file:///music/untagged.ogg</location>
  </entry>
  <entry type="song">
    <title>No Location</title>
  </entry>
</rhythmdb>
"#;

    #[test]
    fn test_parse_songs_only() {
        let tracks = parse_reader(DB.as_bytes()).unwrap();
        assert_eq!(tracks.len(), 2);

        let first = &tracks[0];
        assert_eq!(first.title.as_deref(), Some("Hello, \"World\""));
        assert_eq!(first.artist.as_deref(), Some("Tom & Jerry"));
        assert_eq!(first.album.as_deref(), Some("Cartoons"));
        assert_eq!(first.play_count, Some(12));

        let second = &tracks[1];
        assert_eq!(second.title.as_deref(), Some("Untagged"));
        assert!(second.artist.is_none());
        assert!(second.play_count.is_none());
    }

    #[test]
    fn test_empty_database() {
        let tracks = parse_reader(r#"<rhythmdb version="2.0"></rhythmdb>"#.as_bytes()).unwrap();
        assert!(tracks.is_empty());
    }

    #[test]
    fn test_malformed_xml() {
        let result = parse_reader("<rhythmdb><entry type=\"song\"></rhythmdb>".as_bytes());
        assert!(matches!(result, Err(QueryError::Unknown(_))));
    }

    #[test]
    fn test_missing_file_is_no_data() {
        let result = parse_database(Path::new("/nonexistent/rhythmdb.xml"));
        assert_eq!(result.unwrap_err(), QueryError::NoData);
    }
}
