use crate::core::DisplaySink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayUpdate {
    Buffer(String),
    Expression(String),
}

/// Keeps every write in order; used for transcripts and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    history: Vec<DisplayUpdate>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[DisplayUpdate] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn last_buffer(&self) -> Option<&str> {
        self.history.iter().rev().find_map(|update| match update {
            DisplayUpdate::Buffer(text) => Some(text.as_str()),
            DisplayUpdate::Expression(_) => None,
        })
    }

    pub fn last_expression(&self) -> Option<&str> {
        self.history.iter().rev().find_map(|update| match update {
            DisplayUpdate::Expression(text) => Some(text.as_str()),
            DisplayUpdate::Buffer(_) => None,
        })
    }
}

impl DisplaySink for RecordingDisplay {
    fn show_buffer(&mut self, text: &str) {
        self.history.push(DisplayUpdate::Buffer(text.to_string()));
    }

    fn show_expression(&mut self, text: &str) {
        self.history.push(DisplayUpdate::Expression(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_writes() {
        let mut display = RecordingDisplay::new();
        assert_eq!(display.last_buffer(), None);
        display.show_buffer("1");
        display.show_expression("1 +  ");
        display.show_buffer("12");
        assert_eq!(display.last_buffer(), Some("12"));
        assert_eq!(display.last_expression(), Some("1 +  "));
        assert_eq!(display.history().len(), 3);
    }
}
