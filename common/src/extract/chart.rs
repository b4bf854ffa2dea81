use entity::ChartEntry;
use eyre::{eyre, Result, WrapErr};
use lazy_static::lazy_static;
use log::{debug, trace};
use scraper::Selector;

use super::{bandcamp_url, links};
use crate::dom::PageNode;
use crate::normalize::{parse_date, tag_set};

lazy_static! {
    static ref ITEM_SELECTOR: Selector =
        Selector::parse(".page_charts_section_charts_item.object_release").unwrap();
    static ref MEDIA_SELECTOR: Selector = Selector::parse(".media_link_container").unwrap();
    static ref RELEASE_SELECTOR: Selector = Selector::parse(".release").unwrap();
    static ref ARTIST_SELECTOR: Selector = Selector::parse(".artist").unwrap();
    static ref GENRE_SELECTOR: Selector = Selector::parse(".genre").unwrap();
    static ref DATE_SELECTOR: Selector =
        Selector::parse(".page_charts_section_charts_item_date").unwrap();
    static ref ORIGINAL_NAME_SELECTOR: Selector =
        Selector::parse(".ui_name_locale_original").unwrap();
    static ref LOCALE_NAME_SELECTOR: Selector = Selector::parse(".ui_name_locale").unwrap();
}

/// Every chart item that has a parseable date and a Bandcamp link, in
/// page order. Anything else is skipped without failing the batch.
pub fn extract_chart<N: PageNode>(root: N) -> Result<Vec<ChartEntry>> {
    let items = root.select_all(&ITEM_SELECTOR);
    trace!("Found {} chart items", items.len());
    let mut entries = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        if let Some(entry) =
            chart_entry(item).wrap_err_with(|| format!("Chart item {}", idx + 1))?
        {
            entries.push(entry);
        }
    }
    debug!("Kept {} chart entries", entries.len());
    Ok(entries)
}

fn chart_entry<N: PageNode>(item: N) -> Result<Option<ChartEntry>> {
    let links = links(item.require(&MEDIA_SELECTOR, "media links")?)?;
    let album = item
        .require(&RELEASE_SELECTOR, "release title")?
        .text_content()
        .trim()
        .to_string();
    let artists = item
        .select_all(&ARTIST_SELECTOR)
        .into_iter()
        .map(artist_name)
        .collect::<Result<Vec<_>>>()?;
    let genres = tag_set(
        item.select_all(&GENRE_SELECTOR)
            .into_iter()
            .map(|genre| genre.text_content()),
    );

    let raw_date = item
        .require(&DATE_SELECTOR, "release date")?
        .first_element_child()
        .ok_or_else(|| eyre!("Chart item date has no content"))?
        .text_content();
    let date = match parse_date(raw_date.trim()) {
        Some(date) => date,
        None => {
            debug!("Skipping {:?}: invalid date {:?}", album, raw_date.trim());
            return Ok(None);
        }
    };
    let url = match bandcamp_url(&links) {
        Some(url) => url,
        None => {
            trace!("Skipping {:?}: not on bandcamp", album);
            return Ok(None);
        }
    };

    Ok(Some(ChartEntry {
        artists,
        album,
        date,
        genres,
        url,
    }))
}

/// Charts show both the romanized and the original name; the original
/// one is kept when present.
fn artist_name<N: PageNode>(artist: N) -> Result<String> {
    let name = match artist.select_first(&ORIGINAL_NAME_SELECTOR) {
        Some(original) => original,
        None => artist.require(&LOCALE_NAME_SELECTOR, "artist name")?,
    };
    Ok(name.text_content().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use scraper::Html;

    fn item(artist: &str, album: &str, date: &str, links: &str) -> String {
        format!(
            r#"<div class="page_charts_section_charts_item object_release">
                <div class="media_link_container" data-links='{}'></div>
                <a class="artist">{}</a>
                <a class="release">{}</a>
                <span class="genre">Post-Rock</span><span class="genre">Ambient</span>
                <div class="page_charts_section_charts_item_date"><span>{}</span></div>
            </div>"#,
            links, artist, album, date
        )
    }

    static BANDCAMP: &str = r#"{"bandcamp":{"1":{"url":"https://x.bandcamp.com/album/y"}}}"#;
    static LOCALE: &str = r#"<span class="ui_name_locale">Someone</span>"#;

    #[test]
    fn keeps_only_dated_bandcamp_releases() {
        let html = Html::parse_document(&format!(
            "<html><body>{}{}{}</body></html>",
            item(LOCALE, "Kept", "30 March 2014", BANDCAMP),
            item(LOCALE, "No Bandcamp", "30 March 2014", r#"{"spotify":{}}"#),
            item(LOCALE, "Bad Date", "sometime", BANDCAMP),
        ));
        let entries = extract_chart(html.root_element()).unwrap();
        assert_eq!(
            entries,
            vec![ChartEntry {
                artists: vec!["Someone".to_string()],
                album: "Kept".to_string(),
                date: NaiveDate::from_ymd_opt(2014, 3, 30).unwrap(),
                genres: vec!["post-rock".to_string(), "ambient".to_string()],
                url: "https://x.bandcamp.com/album/y".to_string(),
            }]
        );
    }

    #[test]
    fn null_links_are_skipped() {
        let html = Html::parse_document(&item(LOCALE, "Null", "30 March 2014", "null"));
        assert!(extract_chart(html.root_element()).unwrap().is_empty());
    }

    #[test]
    fn bad_date_does_not_stop_later_entries() {
        let html = Html::parse_document(&format!(
            "{}{}",
            item(LOCALE, "Bad Date", "soon", BANDCAMP),
            item(LOCALE, "Later", "1 January 2015", BANDCAMP),
        ));
        let entries = extract_chart(html.root_element()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].album, "Later");
    }

    // chart dates are taken as printed, a year or month alone is not
    // padded the way release pages are
    #[test]
    fn partial_dates_are_skipped() {
        let html = Html::parse_document(&format!(
            "{}{}{}",
            item(LOCALE, "Year Only", "2014", BANDCAMP),
            item(LOCALE, "Month Only", "March 2014", BANDCAMP),
            item(LOCALE, "Numeric", "07 01 2024", BANDCAMP),
        ));
        let entries = extract_chart(html.root_element()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].album, "Numeric");
        assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
    }

    #[test]
    fn original_name_is_preferred() {
        let artist = r#"<span class="ui_name_locale">Utada Hikaru</span><span class="ui_name_locale_original">宇多田ヒカル</span>"#;
        let html = Html::parse_document(&item(artist, "Fantôme", "28 September 2016", BANDCAMP));
        let entries = extract_chart(html.root_element()).unwrap();
        assert_eq!(entries[0].artists, vec!["宇多田ヒカル".to_string()]);
    }

    #[test]
    fn missing_media_container_is_a_layout_error() {
        let html = Html::parse_document(
            r#"<div class="page_charts_section_charts_item object_release"><a class="release">X</a></div>"#,
        );
        assert!(extract_chart(html.root_element()).is_err());
    }

    #[test]
    fn empty_chart() {
        let html = Html::parse_document("<html><body></body></html>");
        assert!(extract_chart(html.root_element()).unwrap().is_empty());
    }
}
