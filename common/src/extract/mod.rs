mod chart;
mod release;

pub use chart::extract_chart;
pub use release::extract_release;

use eyre::{eyre, Result, WrapErr};
use lazy_static::lazy_static;
use scraper::Selector;
use serde_json::Value;

use crate::dom::PageNode;

lazy_static! {
    static ref CANONICAL_SELECTOR: Selector = Selector::parse(r#"link[rel="canonical"]"#).unwrap();
    static ref OG_URL_SELECTOR: Selector = Selector::parse(r#"meta[property="og:url"]"#).unwrap();
}

static LINKS_ATTRIBUTE: &str = "data-links";
static BANDCAMP: &str = "bandcamp";

/// The purchase links the site embeds as JSON in a `data-links`
/// attribute, keyed by platform and then by an opaque id.
pub fn links<N: PageNode>(container: N) -> Result<Value> {
    let raw = container
        .attr(LINKS_ATTRIBUTE)
        .ok_or_else(|| eyre!("Links container has no {} attribute", LINKS_ATTRIBUTE))?;
    serde_json::from_str(raw.as_str()).wrap_err("Could not parse the embedded links")
}

/// URL of the first Bandcamp entry, in document order.
pub fn bandcamp_url(links: &Value) -> Option<String> {
    links
        .get(BANDCAMP)?
        .as_object()?
        .values()
        .next()?
        .get("url")?
        .as_str()
        .map(str::to_string)
}

/// Where a saved page originally lived, for pages read from disk.
pub fn page_url<N: PageNode>(root: N) -> Option<String> {
    root.select_first(&CANONICAL_SELECTOR)
        .and_then(|link| link.attr("href"))
        .or_else(|| {
            root.select_first(&OG_URL_SELECTOR)
                .and_then(|meta| meta.attr("content"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;
    use serde_json::json;

    fn sel(css: &str) -> Selector {
        Selector::parse(css).unwrap()
    }

    #[test]
    fn first_bandcamp_entry_wins() {
        let links = json!({
            "spotify": {"abc": {"url": "https://open.spotify.com/album/abc"}},
            "bandcamp": {
                "zzz": {"url": "https://first.bandcamp.com/album/x"},
                "aaa": {"url": "https://second.bandcamp.com/album/x"}
            }
        });
        assert_eq!(
            bandcamp_url(&links).as_deref(),
            Some("https://first.bandcamp.com/album/x")
        );
    }

    #[test]
    fn no_bandcamp_entry() {
        assert_eq!(bandcamp_url(&json!({"spotify": {}})), None);
        assert_eq!(bandcamp_url(&json!({"bandcamp": {}})), None);
        assert_eq!(bandcamp_url(&Value::Null), None);
    }

    #[test]
    fn links_are_read_from_the_attribute() {
        let html = Html::parse_fragment(
            r#"<div id="media" data-links='{"bandcamp":{"1":{"url":"https://a.bandcamp.com/album/b"}}}'></div>"#,
        );
        let container = html.root_element().require(&sel("#media"), "links").unwrap();
        let links = links(container).unwrap();
        assert_eq!(
            bandcamp_url(&links).as_deref(),
            Some("https://a.bandcamp.com/album/b")
        );
    }

    #[test]
    fn missing_or_broken_links_are_errors() {
        let html = Html::parse_fragment(r#"<div id="a"></div><div id="b" data-links="{"></div>"#);
        let root = html.root_element();
        assert!(links(root.require(&sel("#a"), "links").unwrap()).is_err());
        assert!(links(root.require(&sel("#b"), "links").unwrap()).is_err());
    }

    #[test]
    fn page_url_prefers_canonical_link() {
        let html = Html::parse_document(
            r#"<html><head>
                <meta property="og:url" content="https://rateyourmusic.com/og">
                <link rel="canonical" href="https://rateyourmusic.com/canonical">
            </head><body></body></html>"#,
        );
        assert_eq!(
            page_url(html.root_element()).as_deref(),
            Some("https://rateyourmusic.com/canonical")
        );
        let og = Html::parse_document(
            r#"<html><head><meta property="og:url" content="https://rateyourmusic.com/og"></head></html>"#,
        );
        assert_eq!(
            page_url(og.root_element()).as_deref(),
            Some("https://rateyourmusic.com/og")
        );
        let bare = Html::parse_document("<html><body></body></html>");
        assert_eq!(page_url(bare.root_element()), None);
    }
}
