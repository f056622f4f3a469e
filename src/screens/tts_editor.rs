// Speech Editor Screen
// Free-text buffer narrated on demand

use crate::accessibility::Announcer;
use crate::data::mock;

/// State for the text-to-speech editor. Opens in insert mode; leaving insert
/// mode exposes the speak/copy/append commands.
#[derive(Debug)]
pub struct TtsEditorState {
    pub text: String,
    pub insert_mode: bool,
}

impl TtsEditorState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            insert_mode: true,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Narrate the buffer; an empty buffer narrates a prompt instead
    pub fn speak(&mut self, announcer: &mut Announcer) {
        if self.text.trim().is_empty() {
            announcer.announce("Please enter text to speak");
        } else {
            announcer.announce(format!("Speaking: {}", self.text));
        }
    }

    /// Narrate the copy confirmation; copying nothing stays silent
    pub fn copy(&mut self, announcer: &mut Announcer) {
        if !self.text.trim().is_empty() {
            announcer.announce("Text copied to clipboard");
        }
    }

    /// Append the n-th common phrase (zero-based), space-joined onto the
    /// buffer. Out-of-range indexes are a no-op.
    pub fn append_phrase(&mut self, index: usize) {
        let Some(phrase) = mock::EDITOR_PHRASES.get(index) else {
            return;
        };
        if self.text.is_empty() {
            self.text.push_str(phrase);
        } else {
            self.text.push(' ');
            self.text.push_str(phrase);
        }
    }

    /// Unmount teardown: the buffer is screen-local and does not survive
    pub fn reset(&mut self) {
        self.text.clear();
        self.insert_mode = true;
    }
}

impl Default for TtsEditorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speak_empty_buffer_prompts_for_text() {
        let mut editor = TtsEditorState::new();
        let mut announcer = Announcer::new(8);

        editor.speak(&mut announcer);
        assert_eq!(announcer.latest(), Some("Please enter text to speak"));

        editor.text = "   ".to_string();
        editor.speak(&mut announcer);
        assert_eq!(announcer.latest(), Some("Please enter text to speak"));
    }

    #[test]
    fn test_speak_narrates_the_buffer() {
        let mut editor = TtsEditorState::new();
        let mut announcer = Announcer::new(8);

        for c in "Good morning".chars() {
            editor.insert_char(c);
        }
        editor.speak(&mut announcer);

        assert_eq!(announcer.latest(), Some("Speaking: Good morning"));
        assert_eq!(editor.char_count(), 12);
    }

    #[test]
    fn test_copy_is_silent_on_empty_buffer() {
        let mut editor = TtsEditorState::new();
        let mut announcer = Announcer::new(8);

        editor.copy(&mut announcer);
        assert_eq!(announcer.queued(), 0);

        editor.insert_char('a');
        editor.copy(&mut announcer);
        assert_eq!(announcer.latest(), Some("Text copied to clipboard"));
    }

    #[test]
    fn test_append_phrase_space_joins() {
        let mut editor = TtsEditorState::new();

        editor.append_phrase(0);
        assert_eq!(editor.text, "Hello");

        editor.append_phrase(1);
        assert_eq!(editor.text, "Hello Thank you");

        // Out of range leaves the buffer alone
        editor.append_phrase(42);
        assert_eq!(editor.text, "Hello Thank you");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut editor = TtsEditorState::new();
        editor.backspace();
        assert!(editor.text.is_empty());
    }
}
