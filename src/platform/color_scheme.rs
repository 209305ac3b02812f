/// Color-scheme preference hooks for deterministic dark-mode checks

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
    NoPreference,
}

pub trait ColorSchemeHooks: Send + Sync {
    fn preferred(&self) -> ColorScheme;
    fn set_preferred(&self, scheme: ColorScheme);

    /// Whether the host prefers a dark color scheme
    fn prefers_dark(&self) -> bool {
        self.preferred() == ColorScheme::Dark
    }
}

/// In-memory implementation that keeps the preference in a Mutex
pub struct StaticColorScheme {
    state: std::sync::Mutex<ColorScheme>,
}

impl StaticColorScheme {
    pub fn new() -> Self {
        StaticColorScheme {
            state: std::sync::Mutex::new(ColorScheme::NoPreference),
        }
    }

    pub fn with_preference(scheme: ColorScheme) -> Self {
        StaticColorScheme {
            state: std::sync::Mutex::new(scheme),
        }
    }
}

impl Default for StaticColorScheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSchemeHooks for StaticColorScheme {
    fn preferred(&self) -> ColorScheme {
        *self.state.lock().unwrap()
    }

    fn set_preferred(&self, scheme: ColorScheme) {
        let mut s = self.state.lock().unwrap();
        *s = scheme;
    }
}
