// Home Screen
// SOS entry, quick-action grid and accessibility-tool shortcuts

use crate::accessibility::Announcer;
use crate::data::mock;
use crate::data::model::QuickAction;

/// What the home cursor currently points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeSelection {
    Sos,
    Action(QuickAction),
}

/// State for the home dashboard
#[derive(Debug)]
pub struct HomeState {
    pub actions: Vec<QuickAction>,
    pub tools: Vec<QuickAction>,
    pub cursor: usize,
}

impl HomeState {
    pub fn new() -> Self {
        Self {
            actions: mock::quick_actions(),
            tools: mock::tool_shortcuts(),
            cursor: 0,
        }
    }

    /// Selectable rows: SOS first, then actions, then tool shortcuts
    pub fn entry_count(&self) -> usize {
        1 + self.actions.len() + self.tools.len()
    }

    pub fn selection(&self) -> HomeSelection {
        if self.cursor == 0 {
            return HomeSelection::Sos;
        }
        let idx = self.cursor - 1;
        if idx < self.actions.len() {
            HomeSelection::Action(self.actions[idx])
        } else {
            // Cursor is clamped to entry_count, so this index is in range
            HomeSelection::Action(self.tools[idx - self.actions.len()])
        }
    }

    /// Narrate the SOS trigger; the real dialer is out of scope
    pub fn trigger_sos(&mut self, announcer: &mut Announcer) {
        announcer.announce("Emergency SOS activated. Calling for help.");
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let max = self.entry_count().saturating_sub(1);
        if self.cursor < max {
            self.cursor += 1;
        }
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::router::{Route, TabRoute};

    #[test]
    fn test_sos_sits_first_and_announces() {
        let mut home = HomeState::new();
        let mut announcer = Announcer::new(8);

        assert_eq!(home.selection(), HomeSelection::Sos);
        home.trigger_sos(&mut announcer);
        assert_eq!(announcer.queued(), 1);
        assert!(announcer.latest().unwrap().contains("Emergency SOS"));
    }

    #[test]
    fn test_actions_resolve_to_routes() {
        let mut home = HomeState::new();
        home.cursor = 1;

        match home.selection() {
            HomeSelection::Action(action) => {
                assert_eq!(action.route, Route::Tabs(TabRoute::VideoCall));
            }
            HomeSelection::Sos => panic!("cursor 1 must be a quick action"),
        }
    }

    #[test]
    fn test_tools_follow_the_actions() {
        let mut home = HomeState::new();
        home.cursor = 1 + home.actions.len();

        match home.selection() {
            HomeSelection::Action(action) => assert_eq!(action.route, Route::CameraMode),
            HomeSelection::Sos => panic!("cursor past the actions must be a tool"),
        }
    }

    #[test]
    fn test_cursor_clamps_at_the_last_entry() {
        let mut home = HomeState::new();
        for _ in 0..100 {
            home.select_next();
        }
        assert_eq!(home.cursor, home.entry_count() - 1);
    }
}
