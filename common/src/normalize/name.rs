use entity::{LocalizedName, Track};

use super::title::split_title;

static TRACK_SEPARATOR: &str = " - ";

/// `"Name [Localized]"` as plain text. Only the first `[` splits, so a
/// localized part with brackets of its own comes out as-is.
pub fn split_localized_name(raw: &str) -> LocalizedName {
    if !raw.starts_with('[') && raw.ends_with(']') {
        if let Some((name, rest)) = raw.split_once('[') {
            let rest = rest.trim();
            let localized = rest.strip_suffix(']').unwrap_or(rest);
            return LocalizedName::new(name.trim(), Some(localized.to_string()));
        }
    }
    LocalizedName::new(raw, None)
}

/// A tracklist row without separate artist/title elements, e.g.
/// `"Artist - Title"` or just `"Title"`.
pub fn split_unlinked_track(track_number: usize, raw: &str) -> Track {
    let parts = raw.split(TRACK_SEPARATOR).collect::<Vec<_>>();
    if let [artist, title] = parts[..] {
        let (title, localized_title) = split_title(title);
        return Track {
            track_number,
            artist: Some(split_localized_name(artist)),
            title,
            localized_title,
        };
    }
    let (title, localized_title) = split_title(raw);
    Track {
        track_number,
        artist: None,
        title,
        localized_title,
    }
}
