//! Read-only DOM layer over `scraper`.
//!
//! Pages are parsed once and queried with CSS selectors. Query results are
//! returned as owned `ElementSnapshot`s (tag, id, attributes, text, next
//! element sibling) so callers hold no borrows into the parsed document.

use crate::{Error, Result};
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use std::path::Path;

/// Owned snapshot of a single element in a parsed page
#[derive(Debug, Clone)]
pub struct ElementSnapshot {
    /// Tag name, lowercased by the parser
    pub tag: String,
    /// Value of the `id` attribute if present
    pub id: Option<String>,
    /// All attributes as a name → value map
    pub attrs: HashMap<String, String>,
    /// Concatenated text content of the element's subtree
    pub text: String,
    /// The next element sibling (text and comment nodes are skipped)
    pub next_sibling: Option<SiblingRef>,
}

impl ElementSnapshot {
    /// Attribute value by name, if present
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

/// Tag/id reference to a sibling element, used for container resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiblingRef {
    pub tag: String,
    pub id: Option<String>,
}

/// A parsed HTML page
pub struct Page {
    doc: Html,
}

impl Page {
    /// Parse a full HTML document from a string
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    /// Read and parse an HTML document from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let html = std::fs::read_to_string(path.as_ref())
            .map_err(|e| Error::LoadError(format!("{}: {}", path.as_ref().display(), e)))?;
        Ok(Self::parse(&html))
    }

    /// First element matching the selector, if any
    pub fn select_first(&self, selector: &str) -> Result<Option<ElementSnapshot>> {
        let sel = parse_selector(selector)?;
        Ok(self.doc.select(&sel).next().map(snapshot))
    }

    /// All elements matching the selector, in document order
    pub fn select_all(&self, selector: &str) -> Result<Vec<ElementSnapshot>> {
        let sel = parse_selector(selector)?;
        Ok(self.doc.select(&sel).map(snapshot).collect())
    }

    /// The page `<title>` text, empty when absent
    pub fn title(&self) -> String {
        let sel = Selector::parse("title").unwrap();
        self.doc
            .select(&sel)
            .next()
            .map(|n| n.text().collect::<String>())
            .unwrap_or_default()
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| Error::SelectorError(selector.to_string(), format!("{:?}", e)))
}

fn snapshot(el: ElementRef) -> ElementSnapshot {
    let tag = el.value().name().to_string();
    let id = el.value().attr("id").map(|s| s.to_string());
    let attrs = el
        .value()
        .attrs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<HashMap<_, _>>();
    let text = el.text().collect::<String>();
    let next_sibling = next_element_sibling(el).map(|sib| SiblingRef {
        tag: sib.value().name().to_string(),
        id: sib.value().attr("id").map(|s| s.to_string()),
    });

    ElementSnapshot {
        tag,
        id,
        attrs,
        text,
        next_sibling,
    }
}

// Skip over intervening text/comment nodes to the next element node.
fn next_element_sibling<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    let mut node = el.next_sibling();
    while let Some(n) = node {
        if let Some(sib) = ElementRef::wrap(n) {
            return Some(sib);
        }
        node = n.next_sibling();
    }
    None
}
