//! Platform API surface: color-scheme preference, selection source, navigator
//!
//! This module contains the traits a host embedding the widget can implement
//! to expose platform primitives, plus deterministic in-memory providers used
//! in unit tests and headless runs.

pub mod browser;
pub mod color_scheme;
pub mod selection;

pub use browser::{
    browser_matches, detect_browser, Browser, BrowserMatches, Navigator, StaticNavigator,
};
pub use color_scheme::{ColorScheme, ColorSchemeHooks, StaticColorScheme};
pub use selection::{BufferSelection, SelectionSource};

/// A small composite trait that hosts can offer to allow consumers to access
/// platform primitives in a typed way.
///
/// Hosts that don't track certain surfaces may implement a noop provider that
/// returns reasonable defaults for tests.
pub trait PlatformApi: Send + Sync {
    fn color_scheme(&self) -> Box<dyn ColorSchemeHooks>;
    fn selection(&self) -> Box<dyn SelectionSource>;
    fn navigator(&self) -> Box<dyn Navigator>;
}

/// A noop Platform implementation used in unit tests and as a safe default
/// for hosts that haven't wired the full surface yet.
pub struct NoopPlatform;

impl NoopPlatform {
    pub fn new() -> Self {
        NoopPlatform
    }
}

impl Default for NoopPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformApi for NoopPlatform {
    fn color_scheme(&self) -> Box<dyn ColorSchemeHooks> {
        Box::new(StaticColorScheme::new())
    }

    fn selection(&self) -> Box<dyn SelectionSource> {
        Box::new(BufferSelection::new())
    }

    fn navigator(&self) -> Box<dyn Navigator> {
        Box::new(StaticNavigator::default())
    }
}
