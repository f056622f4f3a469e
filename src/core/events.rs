// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

/// Application events that can be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Switch to the next tab
    NextTab,

    /// Switch to the previous tab
    PrevTab,

    /// Move selection up
    SelectPrevious,

    /// Move selection down
    SelectNext,

    /// Activate the selected item
    Activate,

    /// Go back / leave the current mode
    Back,

    /// Start or stop the screen's active operation (detection, listening)
    ToggleActive,

    /// Toggle microphone mute during a call
    ToggleMute,

    /// Toggle camera during a call
    ToggleCamera,

    /// Clear the screen's result list
    Clear,

    /// Play a sound inside a running game
    Play,

    /// Copy the editor text
    Copy,

    /// Enter text-insert mode
    Insert,

    /// Direct selection by number key
    Digit(u8),

    /// A character typed while a text field captures input
    InputChar(char),

    /// Backspace while a text field captures input
    InputBackspace,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event. `text_entry` is
    /// true while a text field captures keystrokes.
    pub fn handle(event: Event, text_entry: bool) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key, text_entry),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent, text_entry: bool) -> AppEvent {
        // Only handle key press events
        if key.kind != crossterm::event::KeyEventKind::Press {
            return AppEvent::None;
        }

        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppEvent::Quit;
        }

        if text_entry {
            return match key.code {
                KeyCode::Esc => AppEvent::Back,
                KeyCode::Enter => AppEvent::Activate,
                KeyCode::Backspace => AppEvent::InputBackspace,
                KeyCode::Char(c) => AppEvent::InputChar(c),
                _ => AppEvent::None,
            };
        }

        match key.code {
            // Quit
            KeyCode::Char('q') => AppEvent::Quit,

            // Tabs
            KeyCode::Tab => AppEvent::NextTab,
            KeyCode::BackTab => AppEvent::PrevTab,

            // Navigation
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Left => AppEvent::SelectPrevious,
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Right => AppEvent::SelectNext,

            // Actions
            KeyCode::Enter | KeyCode::Char(' ') => AppEvent::Activate,
            KeyCode::Esc => AppEvent::Back,
            KeyCode::Char('s') => AppEvent::ToggleActive,
            KeyCode::Char('m') => AppEvent::ToggleMute,
            KeyCode::Char('v') => AppEvent::ToggleCamera,
            KeyCode::Char('x') => AppEvent::Clear,
            KeyCode::Char('p') => AppEvent::Play,
            KeyCode::Char('c') => AppEvent::Copy,
            KeyCode::Char('i') => AppEvent::Insert,

            // Direct selection
            KeyCode::Char(c @ '1'..='9') => AppEvent::Digit(c as u8 - b'0'),

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::ScrollUp => AppEvent::SelectPrevious,
            MouseEventKind::ScrollDown => AppEvent::SelectNext,
            _ => AppEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(EventHandler::handle(release, false), AppEvent::None);
    }

    #[test]
    fn test_text_entry_captures_characters() {
        assert_eq!(
            EventHandler::handle(press(KeyCode::Char('s')), true),
            AppEvent::InputChar('s')
        );
        assert_eq!(
            EventHandler::handle(press(KeyCode::Char('s')), false),
            AppEvent::ToggleActive
        );
        assert_eq!(
            EventHandler::handle(press(KeyCode::Backspace), true),
            AppEvent::InputBackspace
        );
    }

    #[test]
    fn test_digit_keys_map_to_direct_selection() {
        assert_eq!(EventHandler::handle(press(KeyCode::Char('2')), false), AppEvent::Digit(2));
    }

    #[test]
    fn test_ctrl_c_quits_even_in_text_entry() {
        let ctrl_c = Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        assert_eq!(EventHandler::handle(ctrl_c, true), AppEvent::Quit);
    }
}
