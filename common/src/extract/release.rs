use entity::{LocalizedName, Release, Track};
use eyre::{eyre, Result};
use lazy_static::lazy_static;
use log::{debug, trace, warn};
use scraper::Selector;
use std::fmt::Display;

use super::{bandcamp_url, links};
use crate::dom::PageNode;
use crate::normalize::{
    normalize_date, parse_abbreviated, split_localized_name, split_title, split_unlinked_track,
    tag_set, Abbreviated,
};

lazy_static! {
    static ref INFO_SELECTOR: Selector = Selector::parse("table.album_info").unwrap();
    static ref MEDIA_SELECTOR: Selector =
        Selector::parse("#media_link_button_container_top").unwrap();
    static ref TITLE_SELECTOR: Selector = Selector::parse(".album_title").unwrap();
    static ref RATING_VALUE_SELECTOR: Selector =
        Selector::parse(r#"meta[itemprop="ratingValue"]"#).unwrap();
    static ref RATING_COUNT_SELECTOR: Selector =
        Selector::parse(r#"meta[itemprop="ratingCount"]"#).unwrap();
    static ref ARTIST_SELECTOR: Selector = Selector::parse(".artist").unwrap();
    static ref GENRE_SELECTOR: Selector = Selector::parse(".genre").unwrap();
    static ref DESCRIPTOR_SELECTOR: Selector =
        Selector::parse(".release_pri_descriptors").unwrap();
    static ref TRACK_SELECTOR: Selector =
        Selector::parse("#tracks > .track > .tracklist_line > .tracklist_title").unwrap();
    static ref SONG_SELECTOR: Selector = Selector::parse(".song").unwrap();
    static ref HEADER_SELECTOR: Selector = Selector::parse("th.info_hdr").unwrap();
}

static RELEASED_LABEL: &str = "Released";
static MOOD_SEPARATOR: &str = ", ";
static TRACK_SEPARATOR: &str = " - ";

/// Reads one release page. `Ok(None)` means the page was fine but its
/// release date could not be understood, so nothing should be sent.
pub fn extract_release<N: PageNode>(root: N, page_url: &str) -> Result<Option<Release>> {
    let info = root.require(&INFO_SELECTOR, "release info table")?;
    let links = links(root.require(&MEDIA_SELECTOR, "media links")?)?;
    let (album, localized_title) = album_title(root.require(&TITLE_SELECTOR, "album title")?)?;

    let score = meta_number::<f64, _>(root, &RATING_VALUE_SELECTOR, "ratingValue", "0.0")?;
    let voters = meta_number::<u64, _>(root, &RATING_COUNT_SELECTOR, "ratingCount", "0")?;

    let artists = info
        .select_all(&ARTIST_SELECTOR)
        .into_iter()
        .map(artist_name)
        .collect::<Vec<_>>();
    let genres = tag_set(
        info.select_all(&GENRE_SELECTOR)
            .into_iter()
            .map(|genre| genre.text_content()),
    );
    let moods = match info.select_first(&DESCRIPTOR_SELECTOR) {
        Some(descriptors) => tag_set(descriptors.text_content().split(MOOD_SEPARATOR)),
        None => Vec::new(),
    };
    let tracks = tracks(root);
    trace!(
        "Found {} artists, {} genres, {} moods, {} tracks",
        artists.len(),
        genres.len(),
        moods.len(),
        tracks.len()
    );

    let released = released(info)?;
    let date = match normalize_date(released.as_str()) {
        Some(date) => date,
        None => {
            warn!(
                "Invalid release date {:?} for {}, skipping release",
                released.trim(),
                page_url
            );
            return Ok(None);
        }
    };

    let url = bandcamp_url(&links).unwrap_or_else(|| page_url.to_string());
    debug!("Extracted {:?} ({}) from {}", album, date, page_url);
    Ok(Some(Release {
        artists,
        album,
        localized_title,
        date,
        genres,
        moods,
        score,
        voters,
        tracks,
        url,
        rym_url: page_url.to_string(),
    }))
}

fn album_title<N: PageNode>(title: N) -> Result<(String, Option<String>)> {
    let text = title
        .first_child_text()
        .ok_or_else(|| eyre!("Album title element is empty"))?;
    let (album, localized_title) = split_title(text.trim());
    // the site's own localization beats the guess made from the text
    let marked = title
        .first_element_child()
        .filter(|child| child.tag_name() == "span")
        .map(|span| span.text_content().trim().to_string());
    Ok((album, marked.or(localized_title)))
}

fn meta_number<T, N>(root: N, selector: &Selector, itemprop: &str, default: &str) -> Result<T>
where
    T: Abbreviated,
    T::Err: Display,
    N: PageNode,
{
    let raw = root
        .select_first(selector)
        .and_then(|meta| meta.attr("content"))
        .unwrap_or_else(|| default.to_string());
    parse_abbreviated::<T>(raw.as_str())
        .map_err(|e| eyre!("Could not parse {} {:?}: {}", itemprop, raw, e))
}

/// `<a class="artist">Name<span>[Localized]</span></a>`
fn artist_name<N: PageNode>(artist: N) -> LocalizedName {
    let localized_name = artist
        .first_element_child()
        .filter(|child| child.tag_name() == "span")
        .map(|span| span.text_content())
        .and_then(|text| {
            text.strip_prefix('[')
                .and_then(|t| t.strip_suffix(']'))
                .map(str::to_string)
        });
    let name = artist.first_child_text().unwrap_or_default();
    LocalizedName::new(name.trim(), localized_name)
}

/// Track artists sometimes carry the localization inline as text instead
/// of in a marker element.
fn track_artist<N: PageNode>(artist: N) -> LocalizedName {
    let name = artist_name(artist);
    if name.localized_name.is_some() {
        return name;
    }
    split_localized_name(artist.text_content().trim())
}

fn tracks<N: PageNode>(root: N) -> Vec<Track> {
    root.select_all(&TRACK_SELECTOR)
        .into_iter()
        .enumerate()
        .map(|(idx, line)| track(idx + 1, line))
        .collect()
}

fn track<N: PageNode>(track_number: usize, line: N) -> Track {
    let artist = line.select_first(&ARTIST_SELECTOR);
    let song = line.select_first(&SONG_SELECTOR);
    match (artist, song) {
        (Some(artist), Some(song)) => {
            let (title, localized_title) =
                split_title(song.text_content().replacen(TRACK_SEPARATOR, "", 1).as_str());
            Track {
                track_number,
                artist: Some(track_artist(artist)),
                title,
                localized_title,
            }
        }
        (None, Some(song)) => {
            let (title, localized_title) = split_title(song.text_content().as_str());
            Track {
                track_number,
                artist: None,
                title,
                localized_title,
            }
        }
        _ => split_unlinked_track(track_number, line.text_content().trim()),
    }
}

fn released<N: PageNode>(info: N) -> Result<String> {
    let header = info
        .select_all(&HEADER_SELECTOR)
        .into_iter()
        .find(|th| th.text_content().contains(RELEASED_LABEL))
        .ok_or_else(|| eyre!("Release info table has no {} row", RELEASED_LABEL))?;
    Ok(header
        .next_element_sibling()
        .map(|value| value.text_content())
        .unwrap_or_default())
}
