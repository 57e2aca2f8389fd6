//! JSON export

use crate::error::SerializationError;
use crate::model::{LibrarySnapshot, Track};
use serde::Serialize;

/// Serialized shape of a track
///
/// Fields are declared in alphabetical order so every export lists its keys
/// the same way.
#[derive(Serialize)]
struct JsonRecord<'a> {
    album: &'a str,
    artist: &'a str,
    id: &'a str,
    play_count: u64,
    title: &'a str,
}

impl<'a> From<&'a Track> for JsonRecord<'a> {
    fn from(track: &'a Track) -> Self {
        Self {
            album: &track.album,
            artist: &track.artist,
            id: &track.id,
            play_count: track.play_count,
            title: &track.title,
        }
    }
}

/// Encode every track of the snapshot as a pretty-printed JSON array
pub fn to_json(snapshot: &LibrarySnapshot) -> Result<String, SerializationError> {
    tracks_to_json(snapshot.tracks())
}

pub(crate) fn tracks_to_json(tracks: &[Track]) -> Result<String, SerializationError> {
    let records: Vec<JsonRecord<'_>> = tracks.iter().map(JsonRecord::from).collect();
    let json = serde_json::to_string_pretty(&records)?;
    log::debug!("Encoded {} tracks as JSON ({} bytes)", records.len(), json.len());
    Ok(json)
}

/// Decode a JSON export back into tracks
pub fn from_json(json: &str) -> Result<Vec<Track>, SerializationError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{build_snapshot, RawTrack};

    fn sample() -> LibrarySnapshot {
        build_snapshot(vec![
            RawTrack::new("1")
                .with_title("A")
                .with_artist("X")
                .with_album("Y")
                .with_play_count(5),
            RawTrack::new("2")
                .with_title("Hello, \"World\"\nagain")
                .with_artist("Ünïcødé ✓")
                .with_play_count(0),
        ])
        .unwrap()
    }

    #[test]
    fn test_keys_are_sorted() {
        let json = to_json(&sample()).unwrap();

        let album = json.find("\"album\"").unwrap();
        let artist = json.find("\"artist\"").unwrap();
        let id = json.find("\"id\"").unwrap();
        let play_count = json.find("\"play_count\"").unwrap();
        let title = json.find("\"title\"").unwrap();

        assert!(album < artist && artist < id && id < play_count && play_count < title);
    }

    #[test]
    fn test_is_pretty_printed_array() {
        let json = to_json(&sample()).unwrap();

        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));
        assert!(json.contains("\n  {"));
        assert!(json.contains("\"play_count\": 5"));
    }

    #[test]
    fn test_round_trip() {
        let snapshot = sample();
        let decoded = from_json(&to_json(&snapshot).unwrap()).unwrap();

        assert_eq!(decoded.len(), snapshot.total_count());
        for (original, back) in snapshot.tracks().iter().zip(&decoded) {
            assert!(original.same_fields(back), "{:?} != {:?}", original, back);
        }
    }

    #[test]
    fn test_empty_track_list() {
        assert_eq!(tracks_to_json(&[]).unwrap(), "[]");
        assert!(from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        assert!(from_json("{not json").is_err());
    }
}
