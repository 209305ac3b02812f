/// Text-selection source for selection queries (e.g. on mouseup)

pub trait SelectionSource: Send + Sync {
    /// The currently selected text; empty when nothing is selected
    fn selected_text(&self) -> String;
    fn set_selection(&self, text: &str);
    fn clear(&self);
}

/// In-memory selection buffer
pub struct BufferSelection {
    text: std::sync::Mutex<String>,
}

impl BufferSelection {
    pub fn new() -> Self {
        BufferSelection {
            text: std::sync::Mutex::new(String::new()),
        }
    }
}

impl Default for BufferSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionSource for BufferSelection {
    fn selected_text(&self) -> String {
        self.text.lock().unwrap().clone()
    }

    fn set_selection(&self, text: &str) {
        let mut t = self.text.lock().unwrap();
        *t = text.to_string();
    }

    fn clear(&self) {
        let mut t = self.text.lock().unwrap();
        t.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_selection_round_trips() {
        let s = BufferSelection::new();
        assert_eq!(s.selected_text(), "");
        s.set_selection("picked text");
        assert_eq!(s.selected_text(), "picked text");
        s.clear();
        assert_eq!(s.selected_text(), "");
    }
}
