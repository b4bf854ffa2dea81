use entity::{ChartEntry, Release};
use itertools::Itertools;
use std::borrow::Cow;

fn decode(url: &str) -> Cow<'_, str> {
    urlencoding::decode(url).unwrap_or(Cow::Borrowed(url))
}

/// Human readable summary of what is about to be sent.
pub fn render_preview(release: &Release) -> String {
    let mut lines = Vec::with_capacity(release.tracks.len() + 9);
    lines.push(match &release.localized_title {
        Some(localized) => format!("Album: {} | {}", release.album, localized),
        None => format!("Album: {}", release.album),
    });
    lines.push(format!("Artists: {}", release.artists.iter().join(", ")));
    lines.push(format!("Date: {}", release.date));
    lines.push(format!("Score: {} ({} voters)", release.score, release.voters));
    lines.push(format!("Genres: {}", release.genres.join(", ")));
    lines.push(format!("Moods: {}", release.moods.join(", ")));
    lines.push(format!("Tracks: {}", release.tracks.len()));
    lines.extend(release.tracks.iter().map(|track| format!("  {}", track)));
    lines.push(format!("URL: {}", decode(release.url.as_str())));
    lines.push(format!("RYM URL: {}", decode(release.rym_url.as_str())));
    lines.join("\n")
}

pub fn render_chart_preview(entries: &[ChartEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{}  {} - {}",
                entry.date,
                entry.artists.join(", "),
                entry.album
            )
        })
        .join("\n")
}
