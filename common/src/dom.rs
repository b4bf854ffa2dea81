use eyre::{eyre, Result};
use scraper::{ElementRef, Node, Selector};

/// The handful of queries the extractors run against a page. Everything
/// above this trait only sees elements through it, so fixtures and live
/// pages go through the same code.
pub trait PageNode: Sized + Copy {
    fn select_all(&self, selector: &Selector) -> Vec<Self>;
    fn select_first(&self, selector: &Selector) -> Option<Self>;

    /// `textContent`: every descendant text node, concatenated.
    fn text_content(&self) -> String;
    fn attr(&self, name: &str) -> Option<String>;
    fn tag_name(&self) -> String;

    /// `textContent` of the first child node, be it text or an element.
    fn first_child_text(&self) -> Option<String>;
    fn first_element_child(&self) -> Option<Self>;
    fn next_element_sibling(&self) -> Option<Self>;

    /// Like [`PageNode::select_first`] but a missing element means the page
    /// does not have the layout we expect. `what` names the element in the
    /// error.
    fn require(&self, selector: &Selector, what: &str) -> Result<Self> {
        self.select_first(selector)
            .ok_or_else(|| eyre!("Unexpected page layout: no {} found", what))
    }
}

impl<'a> PageNode for ElementRef<'a> {
    fn select_all(&self, selector: &Selector) -> Vec<Self> {
        self.select(selector).collect()
    }

    fn select_first(&self, selector: &Selector) -> Option<Self> {
        self.select(selector).next()
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }

    fn tag_name(&self) -> String {
        self.value().name().to_ascii_lowercase()
    }

    fn first_child_text(&self) -> Option<String> {
        let child = self.first_child()?;
        match child.value() {
            Node::Text(text) => {
                let text: &str = text;
                Some(text.to_string())
            }
            Node::Element(_) => ElementRef::wrap(child).map(|e| e.text().collect()),
            _ => Some(String::new()),
        }
    }

    fn first_element_child(&self) -> Option<Self> {
        self.children().find_map(ElementRef::wrap)
    }

    fn next_element_sibling(&self) -> Option<Self> {
        self.next_siblings().find_map(ElementRef::wrap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn sel(css: &str) -> Selector {
        Selector::parse(css).unwrap()
    }

    #[test]
    fn child_and_sibling_queries() {
        let html = Html::parse_fragment(
            r#"<table><tr><th class="info_hdr">Released</th> <td>2014</td></tr></table>
               <a class="artist">Name <span>[Loc]</span></a>"#,
        );
        let root = html.root_element();
        let th = root.require(&sel("th.info_hdr"), "header").unwrap();
        assert_eq!(th.next_element_sibling().unwrap().text_content(), "2014");
        assert_eq!(th.next_element_sibling().unwrap().tag_name(), "td");

        let artist = root.require(&sel(".artist"), "artist").unwrap();
        assert_eq!(artist.first_child_text().unwrap(), "Name ");
        let span = artist.first_element_child().unwrap();
        assert_eq!(span.tag_name(), "span");
        assert_eq!(span.text_content(), "[Loc]");
        assert_eq!(artist.text_content(), "Name [Loc]");
    }

    #[test]
    fn select_keeps_document_order() {
        let html = Html::parse_fragment(r#"<p class="x">1</p><div><p class="x">2</p></div><p>3</p>"#);
        let root = html.root_element();
        let found = root
            .select_all(&sel(".x"))
            .into_iter()
            .map(|p| p.text_content())
            .collect::<Vec<_>>();
        assert_eq!(found, vec!["1", "2"]);
        assert_eq!(root.select_first(&sel(".x")).unwrap().text_content(), "1");
        assert!(root.select_first(&sel(".missing")).is_none());
    }

    #[test]
    fn require_reports_missing_elements() {
        let html = Html::parse_fragment("<div></div>");
        let err = html
            .root_element()
            .require(&sel(".album_title"), "album title")
            .unwrap_err();
        assert_eq!(err.to_string(), "Unexpected page layout: no album title found");
    }
}
