// Audio Games Screen
// Game catalog and the running-game score state

use crate::accessibility::Announcer;
use crate::data::mock;
use crate::data::model::{GameEntry, GameKind};

/// State for the audio-games screen. Quitting a running game resets the
/// active flag, the selection, and the score together.
#[derive(Debug)]
pub struct GamesState {
    pub games: Vec<GameEntry>,
    pub cursor: usize,
    pub selected: Option<GameKind>,
    pub score: u32,
    pub game_active: bool,
}

impl GamesState {
    pub fn new() -> Self {
        Self {
            games: mock::GAMES.to_vec(),
            cursor: 0,
            selected: None,
            score: 0,
            game_active: false,
        }
    }

    /// Start the game under the cursor
    pub fn start_selected(&mut self, announcer: &mut Announcer) {
        if self.game_active {
            return;
        }
        let Some(entry) = self.games.get(self.cursor) else {
            return;
        };
        self.selected = Some(entry.kind);
        self.game_active = true;
        announcer.announce(format!("Starting {}. Get ready!", entry.name));
    }

    /// Play a sound inside the running game; scores one point
    pub fn play_sound(&mut self, announcer: &mut Announcer) {
        if !self.game_active {
            return;
        }
        self.score += 1;
        announcer.announce(format!("Score: {}", self.score));
    }

    /// Submit an answer inside the running game; scores ten points
    pub fn submit_answer(&mut self, announcer: &mut Announcer) {
        if !self.game_active {
            return;
        }
        self.score += 10;
        announcer.announce("Correct! Score increased");
    }

    /// Quit the running game: flag, selection and score reset together
    pub fn quit_game(&mut self, announcer: &mut Announcer) {
        if !self.game_active {
            return;
        }
        self.reset();
        announcer.announce("Game ended");
    }

    /// The catalog entry for the running game
    pub fn current_game(&self) -> Option<&GameEntry> {
        let kind = self.selected?;
        self.games.iter().find(|g| g.kind == kind)
    }

    /// Unmount teardown: silent joint reset
    pub fn reset(&mut self) {
        self.game_active = false;
        self.selected = None;
        self.score = 0;
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let max = self.games.len().saturating_sub(1);
        if self.cursor < max {
            self.cursor += 1;
        }
    }
}

impl Default for GamesState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_sets_active_and_announces_once() {
        let mut games = GamesState::new();
        let mut announcer = Announcer::new(16);

        games.start_selected(&mut announcer);

        assert!(games.game_active);
        assert_eq!(games.selected, Some(GameKind::Memory));
        assert_eq!(announcer.queued(), 1);
        assert_eq!(announcer.latest(), Some("Starting Audio Memory. Get ready!"));
    }

    #[test]
    fn test_scoring() {
        let mut games = GamesState::new();
        let mut announcer = Announcer::new(16);

        games.start_selected(&mut announcer);
        games.play_sound(&mut announcer);
        assert_eq!(games.score, 1);
        assert_eq!(announcer.latest(), Some("Score: 1"));

        games.submit_answer(&mut announcer);
        assert_eq!(games.score, 11);
        assert_eq!(announcer.latest(), Some("Correct! Score increased"));
    }

    #[test]
    fn test_quit_resets_everything_together() {
        let mut games = GamesState::new();
        let mut announcer = Announcer::new(16);

        games.start_selected(&mut announcer);
        games.play_sound(&mut announcer);
        games.quit_game(&mut announcer);

        assert!(!games.game_active);
        assert_eq!(games.selected, None);
        assert_eq!(games.score, 0);
        assert_eq!(announcer.latest(), Some("Game ended"));
    }

    #[test]
    fn test_scoring_outside_a_game_is_inert() {
        let mut games = GamesState::new();
        let mut announcer = Announcer::new(16);

        games.play_sound(&mut announcer);
        games.submit_answer(&mut announcer);
        games.quit_game(&mut announcer);

        assert_eq!(games.score, 0);
        assert_eq!(announcer.queued(), 0);
    }
}
