//! The suggestion widget: attach contract, keystroke handling, rendering.
//!
//! A widget binds to one input-like element of a parsed page. The host calls
//! [`SuggestWidget::keystroke`] with the input's current value on every change
//! notification; the widget re-evaluates the candidate list, replaces its
//! container contents, and hands the rendered words to a registered callback.

use crate::candidate::{parse_candidate_source, Candidate};
use crate::dom::{ElementSnapshot, Page};
use crate::matcher::{self, MIN_QUERY_CHARS};
use crate::render::{self, RenderedWord};
use crate::{Error, Result, WidgetConfig};
use serde::Serialize;
use std::sync::Arc;

type OnRenderHandler = Arc<dyn Fn(&[RenderedWord]) + Send + Sync>;

/// Selector used by [`SuggestWidget::attach_all`] to find widget mount points
pub const MODULE_SELECTOR: &str = "[data-module=\"autocomplete\"]";

/// Where the candidate records come from at attach time
#[derive(Debug, Clone, Default)]
pub enum CandidateSource {
    /// A pre-built ordered candidate list
    List(Vec<Candidate>),
    /// A delimited source string (see [`parse_candidate_source`])
    Delimited(String),
    /// Read the delimited string from the bound element's data attribute
    #[default]
    ElementData,
}

/// Resolved render target of an attached widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderTarget {
    /// The element immediately following the bound input
    Sibling { tag: String, id: Option<String> },
    /// The configured fallback selector
    Selector(String),
}

/// Owned summary of one hit, as returned from [`SuggestWidget::keystroke`]
/// and emitted in the diagnostic dump
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HitRecord {
    pub title: String,
    pub content: String,
    pub id: String,
    pub matched_terms: Vec<String>,
}

/// An autosuggest widget bound to one input element
pub struct SuggestWidget {
    candidates: Vec<Candidate>,
    target: RenderTarget,
    container_html: String,
    rendered: Vec<RenderedWord>,
    on_render: Option<OnRenderHandler>,
}

impl std::fmt::Debug for SuggestWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestWidget")
            .field("candidates", &self.candidates)
            .field("target", &self.target)
            .field("container_html", &self.container_html)
            .field("rendered", &self.rendered)
            .field("on_render", &self.on_render.as_ref().map(|_| "<handler>"))
            .finish()
    }
}

impl SuggestWidget {
    /// Bind a widget to the first element matching `selector`.
    ///
    /// The candidate source is parsed once here. With
    /// [`CandidateSource::ElementData`], a missing data attribute yields an
    /// empty candidate list rather than an error. The render target is the
    /// element immediately following the input when one exists, else the
    /// configured fallback selector; attach fails when neither is present.
    pub fn attach(
        page: &Page,
        selector: &str,
        source: CandidateSource,
        config: WidgetConfig,
    ) -> Result<Self> {
        let element = page
            .select_first(selector)?
            .ok_or_else(|| Error::ElementNotFound(selector.to_string()))?;
        Self::attach_element(page, element, selector, source, config)
    }

    /// Attach a widget to every element tagged `data-module="autocomplete"`,
    /// reading each one's candidate source from its data attribute.
    pub fn attach_all(page: &Page, config: WidgetConfig) -> Result<Vec<Self>> {
        let mut widgets = Vec::new();
        for element in page.select_all(MODULE_SELECTOR)? {
            let label = element
                .id
                .as_ref()
                .map(|id| format!("#{}", id))
                .unwrap_or_else(|| MODULE_SELECTOR.to_string());
            widgets.push(Self::attach_element(
                page,
                element,
                &label,
                CandidateSource::ElementData,
                config.clone(),
            )?);
        }
        Ok(widgets)
    }

    fn attach_element(
        page: &Page,
        element: ElementSnapshot,
        label: &str,
        source: CandidateSource,
        config: WidgetConfig,
    ) -> Result<Self> {
        if config.object_separator.is_empty() || config.param_separator.is_empty() {
            return Err(Error::ConfigError(
                "candidate separators must be non-empty".to_string(),
            ));
        }

        let candidates = match source {
            CandidateSource::List(list) => list,
            CandidateSource::Delimited(raw) => {
                parse_candidate_source(&raw, &config.object_separator, &config.param_separator)
            }
            CandidateSource::ElementData => match element.attr(&config.list_attribute) {
                Some(raw) => {
                    parse_candidate_source(raw, &config.object_separator, &config.param_separator)
                }
                // Missing attribute is an empty source, not an error
                None => Vec::new(),
            },
        };

        let target = match element.next_sibling {
            Some(sib) => RenderTarget::Sibling {
                tag: sib.tag,
                id: sib.id,
            },
            None => {
                if page.select_first(&config.target_selector)?.is_none() {
                    return Err(Error::ContainerNotFound(label.to_string()));
                }
                RenderTarget::Selector(config.target_selector.clone())
            }
        };

        log::debug!(
            "attached suggest widget to '{}' with {} candidates, target {:?}",
            label,
            candidates.len(),
            target
        );

        Ok(Self {
            candidates,
            target,
            container_html: String::new(),
            rendered: Vec::new(),
            on_render: None,
        })
    }

    /// Handle one keystroke notification from the host.
    ///
    /// Values shorter than two characters produce no hits and leave the
    /// container untouched. Any longer value re-evaluates the full candidate
    /// list synchronously and replaces the container contents, even when
    /// nothing matched.
    pub fn keystroke(&mut self, value: &str) -> Vec<HitRecord> {
        if value.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let hits = matcher::evaluate(&self.candidates, value);
        let records: Vec<HitRecord> = hits
            .iter()
            .map(|h| HitRecord {
                title: h.candidate.title.clone(),
                content: h.candidate.content.clone(),
                id: h.candidate.id.clone(),
                matched_terms: h.matched_terms.clone(),
            })
            .collect();
        let words = render::highlight_words(&hits);

        self.container_html = render::to_html(&words);
        self.rendered = words;

        // Diagnostic dump of the hit list, alongside every render
        match serde_json::to_string(&records) {
            Ok(json) => log::debug!("hits for '{}': {}", value, json),
            Err(e) => log::debug!("hits for '{}': <unserializable: {}>", value, e),
        }

        if let Some(cb) = &self.on_render {
            cb(&self.rendered);
        }

        records
    }

    /// Register a callback invoked with the rendered words after each render
    pub fn on_render<F>(&mut self, cb: F)
    where
        F: Fn(&[RenderedWord]) + Send + Sync + 'static,
    {
        self.on_render = Some(Arc::new(cb));
    }

    /// Remove a previously registered render callback if any
    pub fn clear_on_render(&mut self) {
        self.on_render = None;
    }

    /// The candidate list parsed at attach time
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// The resolved render target
    pub fn target(&self) -> &RenderTarget {
        &self.target
    }

    /// Current contents of the results container (empty before the first
    /// qualifying keystroke)
    pub fn container_html(&self) -> &str {
        &self.container_html
    }

    /// Words produced by the most recent render
    pub fn rendered_words(&self) -> &[RenderedWord] {
        &self.rendered
    }
}
