use entity::{ChartEntry, Release};
use eyre::{eyre, Result};
use scraper::Html;

use crate::extract::{extract_chart, extract_release, page_url};
use crate::fetch::Source;

/// A parsed page and the catalog URL it is filed under.
pub struct Page {
    document: Html,
    url: String,
}

impl Page {
    /// `url` wins over whatever the page says about itself.
    pub fn parse(html: &str, url: Option<String>) -> Result<Self> {
        let document = Html::parse_document(html);
        let url = match url {
            Some(url) => url,
            None => page_url(document.root_element())
                .ok_or_else(|| eyre!("Could not tell the page URL, pass it with --url"))?,
        };
        Ok(Self { document, url })
    }

    pub fn from_source(source: Source, url: Option<String>) -> Result<Self> {
        Self::parse(source.html.as_str(), url.or(source.url))
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn release(&self) -> Result<Option<Release>> {
        extract_release(self.document.root_element(), self.url.as_str())
    }

    pub fn chart(&self) -> Result<Vec<ChartEntry>> {
        extract_chart(self.document.root_element())
    }
}
