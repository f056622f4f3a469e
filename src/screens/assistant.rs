// Assistant Screen
// Seeded conversation plus the voice-listening flag

use crate::accessibility::Announcer;
use crate::data::mock;
use crate::data::model::AssistantMessage;

/// State for the AI-assistant screen
#[derive(Debug)]
pub struct AssistantState {
    pub messages: Vec<AssistantMessage>,
    pub suggestions: Vec<&'static str>,
    pub cursor: usize,
    pub is_listening: bool,
}

impl AssistantState {
    pub fn new() -> Self {
        Self {
            messages: mock::CONVERSATION.to_vec(),
            suggestions: mock::SUGGESTIONS.to_vec(),
            cursor: 0,
            is_listening: false,
        }
    }

    /// Flip the listening flag, narrating the new state
    pub fn toggle_listening(&mut self, announcer: &mut Announcer) {
        self.is_listening = !self.is_listening;
        if self.is_listening {
            announcer.announce("Listening...");
        } else {
            announcer.announce("Stopped listening");
        }
    }

    /// Read the quick command under the cursor aloud
    pub fn speak_suggestion(&mut self, announcer: &mut Announcer) {
        if let Some(text) = self.suggestions.get(self.cursor) {
            announcer.announce(*text);
        }
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let max = self.suggestions.len().saturating_sub(1);
        if self.cursor < max {
            self.cursor += 1;
        }
    }
}

impl Default for AssistantState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listening_toggle_announces_each_transition() {
        let mut assistant = AssistantState::new();
        let mut announcer = Announcer::new(8);

        assistant.toggle_listening(&mut announcer);
        assert!(assistant.is_listening);
        assert_eq!(announcer.latest(), Some("Listening..."));

        assistant.toggle_listening(&mut announcer);
        assert!(!assistant.is_listening);
        assert_eq!(announcer.latest(), Some("Stopped listening"));
        assert_eq!(announcer.queued(), 2);
    }

    #[test]
    fn test_suggestion_is_read_aloud() {
        let mut assistant = AssistantState::new();
        let mut announcer = Announcer::new(8);

        assistant.cursor = 1;
        assistant.speak_suggestion(&mut announcer);

        assert_eq!(announcer.latest(), Some("Call emergency contact"));
    }

    #[test]
    fn test_conversation_is_seeded() {
        let assistant = AssistantState::new();
        assert_eq!(assistant.messages.len(), 3);
        assert_eq!(assistant.suggestions.len(), 4);
    }
}
