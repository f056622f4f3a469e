// Activities Screen
// Daily task tracker with completion toggles

use crate::data::mock;
use crate::data::model::ActivityItem;

/// State for the daily activity tracker
#[derive(Debug)]
pub struct ActivitiesState {
    pub items: Vec<ActivityItem>,
    pub cursor: usize,
}

impl ActivitiesState {
    /// Mount the screen with today's seeded schedule
    pub fn new() -> Self {
        Self {
            items: mock::seeded_activities(),
            cursor: 0,
        }
    }

    /// Flip the completion flag on the activity matching `id`. An unknown id
    /// leaves the list untouched; it must never error.
    pub fn toggle(&mut self, id: u32) {
        if let Some(item) = self.items.iter_mut().find(|a| a.id == id) {
            item.completed = !item.completed;
        }
    }

    /// Toggle the activity under the cursor
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.items.get(self.cursor).map(|a| a.id) {
            self.toggle(id);
        }
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|a| a.completed).count()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Activities not yet completed, for the home-screen preview
    pub fn upcoming(&self) -> impl Iterator<Item = &ActivityItem> {
        self.items.iter().filter(|a| !a.completed)
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let max = self.items.len().saturating_sub(1);
        if self.cursor < max {
            self.cursor += 1;
        }
    }
}

impl Default for ActivitiesState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_item_state() -> ActivitiesState {
        let mut state = ActivitiesState::new();
        state.items = vec![
            ActivityItem { id: 1, time: "9:00 AM", title: "a", description: "", completed: true },
            ActivityItem { id: 2, time: "1:00 PM", title: "b", description: "", completed: false },
        ];
        state
    }

    #[test]
    fn test_toggle_flips_exactly_one_item() {
        let mut state = two_item_state();
        state.toggle(2);

        assert!(state.items[0].completed, "other items must remain unchanged");
        assert!(state.items[1].completed);
    }

    #[test]
    fn test_toggle_unknown_id_leaves_list_unchanged() {
        let mut state = two_item_state();
        let before = state.items.clone();
        state.toggle(99);

        assert_eq!(state.items, before);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut state = two_item_state();
        let before = state.items.clone();
        state.toggle(1);
        state.toggle(1);

        assert_eq!(state.items, before);
    }

    #[test]
    fn test_completion_stats() {
        let mut state = two_item_state();
        assert_eq!(state.completed_count(), 1);
        assert_eq!(state.total(), 2);

        state.toggle(2);
        assert_eq!(state.completed_count(), 2);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut state = two_item_state();
        state.select_previous();
        assert_eq!(state.cursor, 0);

        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.cursor, 1);
    }
}
