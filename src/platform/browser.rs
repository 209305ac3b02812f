//! Best-guess browser identification from user-agent strings.

/// A recognized browser family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Firefox,
    Safari,
    Chrome,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Firefox => "firefox",
            Browser::Safari => "safari",
            Browser::Chrome => "chrome",
        }
    }
}

/// Per-family match flags for a user-agent string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserMatches {
    pub firefox: bool,
    pub safari: bool,
    pub chrome: bool,
}

/// Evaluate all family heuristics against a user-agent string.
///
/// Chrome user agents also carry "Safari", so the Safari check requires the
/// absence of "Chrome".
pub fn browser_matches(user_agent: &str) -> BrowserMatches {
    BrowserMatches {
        firefox: user_agent.contains("Firefox"),
        safari: user_agent.contains("Safari") && !user_agent.contains("Chrome"),
        chrome: user_agent.contains("Chrome"),
    }
}

/// Single best guess for a user-agent string; `None` when no family matches.
pub fn detect_browser(user_agent: &str) -> Option<Browser> {
    let matches = browser_matches(user_agent);
    if matches.chrome {
        Some(Browser::Chrome)
    } else if matches.safari {
        Some(Browser::Safari)
    } else if matches.firefox {
        Some(Browser::Firefox)
    } else {
        None
    }
}

/// Navigator surface: the host's user agent and current location
pub trait Navigator: Send + Sync {
    fn user_agent(&self) -> String;

    /// Current location URL when the host tracks one
    fn location(&self) -> Option<String>;

    /// Browser family derived from the user agent
    fn browser(&self) -> Option<Browser> {
        detect_browser(&self.user_agent())
    }
}

/// Navigator with a fixed user agent and a mutable location
pub struct StaticNavigator {
    user_agent: String,
    location: std::sync::Mutex<Option<String>>,
}

impl StaticNavigator {
    pub fn new(user_agent: impl Into<String>) -> Self {
        StaticNavigator {
            user_agent: user_agent.into(),
            location: std::sync::Mutex::new(None),
        }
    }

    pub fn set_location(&self, url: impl Into<String>) {
        let mut loc = self.location.lock().unwrap();
        *loc = Some(url.into());
    }
}

impl Default for StaticNavigator {
    fn default() -> Self {
        Self::new("Mozilla/5.0 (X11; Linux x86_64; rv:115.0) Gecko/20100101 Firefox/115.0")
    }
}

impl Navigator for StaticNavigator {
    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn location(&self) -> Option<String> {
        self.location.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIREFOX_UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:98.0) Gecko/20100101 Firefox/98.0";
    const CHROME_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_5) AppleWebKit/537.36 \
                             (KHTML, like Gecko) Chrome/99.0.4844.51 Safari/537.36";
    const SAFARI_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_5) AppleWebKit/605.1.15 \
                             (KHTML, like Gecko) Version/13.1.1 Safari/605.1.15";

    #[test]
    fn detects_firefox() {
        assert_eq!(detect_browser(FIREFOX_UA), Some(Browser::Firefox));
    }

    #[test]
    fn chrome_wins_over_safari_token() {
        // Chrome UAs advertise Safari as well
        let matches = browser_matches(CHROME_UA);
        assert!(matches.chrome);
        assert!(!matches.safari);
        assert_eq!(detect_browser(CHROME_UA), Some(Browser::Chrome));
    }

    #[test]
    fn detects_safari_without_chrome_token() {
        assert_eq!(detect_browser(SAFARI_UA), Some(Browser::Safari));
    }

    #[test]
    fn unknown_agent_detects_nothing() {
        assert_eq!(detect_browser("curl/8.0.1"), None);
        let matches = browser_matches("curl/8.0.1");
        assert!(!matches.firefox && !matches.safari && !matches.chrome);
    }

    #[test]
    fn static_navigator_reports_browser_and_location() {
        let nav = StaticNavigator::new(CHROME_UA);
        assert_eq!(nav.browser(), Some(Browser::Chrome));
        assert!(nav.location().is_none());
        nav.set_location("https://example.com/?q=shoes");
        assert_eq!(
            nav.location().as_deref(),
            Some("https://example.com/?q=shoes")
        );
    }

    #[test]
    fn browser_as_str() {
        assert_eq!(Browser::Firefox.as_str(), "firefox");
        assert_eq!(Browser::Safari.as_str(), "safari");
        assert_eq!(Browser::Chrome.as_str(), "chrome");
    }
}
