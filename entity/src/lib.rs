use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FormatResult};

/// A name as printed on the page, together with the alternate-script
/// rendering the site shows in brackets next to it.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    pub localized_name: Option<String>,
}

impl LocalizedName {
    pub fn new(name: impl Into<String>, localized_name: Option<String>) -> Self {
        Self {
            name: name.into(),
            localized_name,
        }
    }
}

impl Display for LocalizedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match &self.localized_name {
            Some(localized) => write!(f, "{} | {}", self.name, localized),
            None => write!(f, "{}", self.name),
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub track_number: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<LocalizedName>,
    pub title: String,
    pub localized_title: Option<String>,
}

impl Display for Track {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(f, "{}. ", self.track_number)?;
        if let Some(artist) = &self.artist {
            write!(f, "{} - ", artist)?;
        }
        write!(f, "{}", self.title)?;
        if let Some(localized) = &self.localized_title {
            write!(f, " | {}", localized)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub artists: Vec<LocalizedName>,
    pub album: String,
    pub localized_title: Option<String>,
    pub date: NaiveDate,
    pub genres: Vec<String>,
    pub moods: Vec<String>,
    pub score: f64,
    pub voters: u64,
    pub tracks: Vec<Track>,
    pub url: String,
    pub rym_url: String,
}

/// The lighter record scraped from chart listings, only emitted for
/// releases that can be bought on Bandcamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub artists: Vec<String>,
    pub album: String,
    pub date: NaiveDate,
    pub genres: Vec<String>,
    pub url: String,
}
