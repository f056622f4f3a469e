// Quick Phrases Screen
// Phrase grid that narrates on selection, with a short selection flash

use std::time::Duration;

use crate::accessibility::Announcer;
use crate::core::tasks::{Scheduler, TaskHandle, TaskKind};
use crate::data::mock;
use crate::data::model::{PhraseButton, PhraseCategory};

/// State for the quick-phrase grid. Phrases are held grouped by category in
/// display order; the selection highlight clears itself through a scheduled
/// flash task.
#[derive(Debug)]
pub struct TtsGridState {
    pub phrases: Vec<PhraseButton>,
    pub cursor: usize,
    pub selected: Option<&'static str>,
    flash: Option<TaskHandle>,
}

impl TtsGridState {
    pub fn new() -> Self {
        // Group the catalog by category, keeping catalog order inside each
        let mut phrases = Vec::with_capacity(mock::PHRASES.len());
        for category in PhraseCategory::ALL {
            phrases.extend(mock::PHRASES.iter().copied().filter(|p| p.category == category));
        }
        Self {
            phrases,
            cursor: 0,
            selected: None,
            flash: None,
        }
    }

    /// Speak the phrase matching `id`: select it, narrate it, and schedule
    /// the selection flash to clear after `flash_delay`. Unknown ids are a
    /// silent no-op.
    pub fn speak(
        &mut self,
        id: &str,
        scheduler: &mut Scheduler,
        flash_delay: Duration,
        announcer: &mut Announcer,
    ) {
        let Some(phrase) = self.phrases.iter().find(|p| p.id == id) else {
            return;
        };
        self.selected = Some(phrase.id);
        announcer.announce(format!("Speaking: {}", phrase.text));

        if let Some(handle) = self.flash.take() {
            scheduler.cancel(handle);
        }
        self.flash = Some(scheduler.schedule(flash_delay, TaskKind::ClearPhraseSelection));
    }

    /// Speak the phrase under the cursor
    pub fn speak_selected(
        &mut self,
        scheduler: &mut Scheduler,
        flash_delay: Duration,
        announcer: &mut Announcer,
    ) {
        if let Some(id) = self.phrases.get(self.cursor).map(|p| p.id) {
            self.speak(id, scheduler, flash_delay, announcer);
        }
    }

    /// The flash task fired: drop the selection highlight
    pub fn clear_flash(&mut self) {
        self.selected = None;
        self.flash = None;
    }

    /// Unmount teardown: cancel the flash and drop the selection, silently
    pub fn reset(&mut self, scheduler: &mut Scheduler) {
        if let Some(handle) = self.flash.take() {
            scheduler.cancel(handle);
        }
        self.selected = None;
        self.cursor = 0;
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let max = self.phrases.len().saturating_sub(1);
        if self.cursor < max {
            self.cursor += 1;
        }
    }
}

impl Default for TtsGridState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLASH: Duration = Duration::from_millis(500);

    fn fixtures() -> (TtsGridState, Scheduler, Announcer) {
        (TtsGridState::new(), Scheduler::new(), Announcer::new(16))
    }

    #[test]
    fn test_speaking_help_me_announces_and_then_clears() {
        let (mut grid, mut scheduler, mut announcer) = fixtures();

        grid.speak("2", &mut scheduler, FLASH, &mut announcer);

        assert_eq!(grid.selected, Some("2"));
        assert_eq!(announcer.queued(), 1);
        assert!(announcer.latest().unwrap().contains("Help me"));

        // The scheduled flash clears the selection back to none
        grid.clear_flash();
        assert_eq!(grid.selected, None);
    }

    #[test]
    fn test_unknown_phrase_id_is_a_noop() {
        let (mut grid, mut scheduler, mut announcer) = fixtures();

        grid.speak("99", &mut scheduler, FLASH, &mut announcer);

        assert_eq!(grid.selected, None);
        assert_eq!(announcer.queued(), 0);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_respeaking_replaces_the_flash_task() {
        let (mut grid, mut scheduler, mut announcer) = fixtures();

        grid.speak("1", &mut scheduler, FLASH, &mut announcer);
        grid.speak("3", &mut scheduler, FLASH, &mut announcer);

        // Only one flash may be pending, for the latest selection
        assert_eq!(scheduler.pending_count(), 1);
        assert_eq!(grid.selected, Some("3"));
    }

    #[test]
    fn test_grid_is_grouped_by_category() {
        let grid = TtsGridState::new();
        let categories: Vec<PhraseCategory> = grid.phrases.iter().map(|p| p.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted, "phrases must be contiguous per category");
        assert_eq!(grid.phrases.len(), mock::PHRASES.len());
    }

    #[test]
    fn test_teardown_cancels_the_flash() {
        let (mut grid, mut scheduler, mut announcer) = fixtures();

        grid.speak("1", &mut scheduler, FLASH, &mut announcer);
        grid.reset(&mut scheduler);

        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(grid.selected, None);
    }
}
