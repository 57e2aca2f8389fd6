//! CSV export

use crate::error::SerializationError;
use crate::model::{LibrarySnapshot, Track};
use std::borrow::Cow;
use std::fmt::Write;

/// First line of every CSV export
pub const CSV_HEADER: &str = "id,title,artist,album,play_count";

/// Encode the snapshot as CSV, one `\n`-terminated line per track
pub fn to_csv(snapshot: &LibrarySnapshot) -> Result<String, SerializationError> {
    tracks_to_csv(snapshot.tracks())
}

pub(crate) fn tracks_to_csv(tracks: &[Track]) -> Result<String, SerializationError> {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + tracks.len() * 48);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for track in tracks {
        writeln!(
            out,
            "{},{},{},{},{}",
            escape_field(&track.id),
            escape_field(&track.title),
            escape_field(&track.artist),
            escape_field(&track.album),
            track.play_count
        )?;
    }

    log::debug!("Encoded {} tracks as CSV ({} bytes)", tracks.len(), out.len());
    Ok(out)
}

/// Quote a field if it contains a comma, a quote or a newline
///
/// Quotes inside a quoted field are doubled. Anything else is emitted as is.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
