//! Listless Headless Widget Engine
//!
//! A headless autosuggest (typeahead) widget engine for Rust that binds to an
//! input element in a parsed HTML page, matches keystrokes against a candidate
//! list, and renders the highlighted suggestion list into a results container.
//!
//! # Features
//!
//! - **Headless DOM**: pages are parsed with `scraper`; the widget works on
//!   owned element snapshots, no live browser required
//! - **Pure evaluation**: every keystroke re-evaluates the full candidate list
//!   and produces a fresh annotated hit list
//! - **Platform surface**: color-scheme preference, selection source, and
//!   user-agent queries behind swappable providers
//!
//! # Example
//!
//! ```
//! use listless::{CandidateSource, Page, SuggestWidget, WidgetConfig};
//!
//! # fn main() -> listless::Result<()> {
//! let page = Page::parse(
//!     r#"<html><body>
//!     <input id="search" data-list="Red Shoes|Comfortable red shoes|1###Blue Hat|Stylish item|2">
//!     <div id="myList"></div>
//!     </body></html>"#,
//! );
//!
//! let mut widget = SuggestWidget::attach(
//!     &page,
//!     "#search",
//!     CandidateSource::ElementData,
//!     WidgetConfig::default(),
//! )?;
//!
//! let hits = widget.keystroke("red");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].title, "Red Shoes");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod candidate;
pub mod dom;
pub mod matcher;
pub mod render;
pub mod widget;

// Platform API surface (color scheme, selection, navigator)
pub mod platform;

// URL query-string helpers
pub mod urlparams;

pub mod util;

pub use candidate::{parse_candidate_source, Candidate};
pub use dom::{ElementSnapshot, Page, SiblingRef};
pub use matcher::{evaluate, Hit};
pub use render::{render_digest, RenderedWord, WordMark};
pub use widget::{CandidateSource, HitRecord, RenderTarget, SuggestWidget};

/// Configuration for attaching a suggestion widget
///
/// This struct contains the attach-time configuration used when binding a
/// `SuggestWidget` to an input element. The defaults match the conventional
/// server-rendered markup: candidates arrive as a `###`/`|` delimited string
/// in the element's `data-list` attribute, and results fall back to the
/// `#myList` container when the input has no following sibling.
///
/// # Examples
///
/// ```
/// let cfg = listless::WidgetConfig::default();
/// assert_eq!(cfg.object_separator, "###");
/// assert_eq!(cfg.param_separator, "|");
/// ```
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Separator between candidate records in a delimited source string
    pub object_separator: String,
    /// Separator between the title/content/id fields of one record
    pub param_separator: String,
    /// Selector for the results container when the input has no next sibling
    pub target_selector: String,
    /// Data attribute on the bound element that carries the candidate source
    pub list_attribute: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            object_separator: "###".to_string(),
            param_separator: "|".to_string(),
            target_selector: "#myList".to_string(),
            list_attribute: "data-list".to_string(),
        }
    }
}
