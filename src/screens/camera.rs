// Camera Detection Screen
// Mocked object detection with a cancellable result delay

use std::time::Duration;

use crate::accessibility::Announcer;
use crate::core::tasks::{Scheduler, TaskHandle, TaskKind};
use crate::data::model::DetectionResult;

/// State for the camera-detection screen. Results arrive through a scheduled
/// task; stopping, clearing, or leaving the screen cancels the pending task
/// so a late result can never land on abandoned state.
#[derive(Debug)]
pub struct CameraState {
    pub detection_active: bool,
    pub detections: Vec<DetectionResult>,
    pub cursor: usize,
    pending: Option<TaskHandle>,
}

impl CameraState {
    pub fn new() -> Self {
        Self {
            detection_active: false,
            detections: Vec::new(),
            cursor: 0,
            pending: None,
        }
    }

    /// Start or stop detection. Each transition narrates the new state;
    /// starting schedules the mock results after `delay`.
    pub fn toggle_detection(
        &mut self,
        scheduler: &mut Scheduler,
        delay: Duration,
        announcer: &mut Announcer,
    ) {
        self.detection_active = !self.detection_active;

        if self.detection_active {
            announcer.announce(
                "Object detection started. Point camera at objects to identify them.",
            );
            self.pending = Some(scheduler.schedule(delay, TaskKind::DeliverDetections));
        } else {
            announcer.announce("Object detection stopped");
            self.cancel_pending(scheduler);
        }
    }

    /// The scheduled results arrived
    pub fn deliver(&mut self, labels: &[&str], announcer: &mut Announcer) {
        self.pending = None;
        self.detections = labels.iter().copied().map(DetectionResult::new).collect();
        announcer.announce(labels.join(". "));
    }

    /// Read the detection under the cursor aloud
    pub fn read_selected(&mut self, announcer: &mut Announcer) {
        if let Some(detection) = self.detections.get(self.cursor) {
            announcer.announce(detection.label.clone());
        }
    }

    /// Explicit clear: the list and the active flag reset together, never
    /// partially, and any pending result is cancelled.
    pub fn clear(&mut self, scheduler: &mut Scheduler, announcer: &mut Announcer) {
        self.detections.clear();
        self.detection_active = false;
        self.cursor = 0;
        self.cancel_pending(scheduler);
        announcer.announce("Detection cleared");
    }

    /// Unmount teardown: silent full reset, cancelling the pending task
    pub fn reset(&mut self, scheduler: &mut Scheduler) {
        self.detections.clear();
        self.detection_active = false;
        self.cursor = 0;
        self.cancel_pending(scheduler);
    }

    pub fn has_pending_task(&self) -> bool {
        self.pending.is_some()
    }

    fn cancel_pending(&mut self, scheduler: &mut Scheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let max = self.detections.len().saturating_sub(1);
        if self.cursor < max {
            self.cursor += 1;
        }
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock;

    const DELAY: Duration = Duration::from_millis(2000);

    fn fixtures() -> (CameraState, Scheduler, Announcer) {
        (CameraState::new(), Scheduler::new(), Announcer::new(16))
    }

    #[test]
    fn test_start_sets_active_and_announces_once() {
        let (mut camera, mut scheduler, mut announcer) = fixtures();

        camera.toggle_detection(&mut scheduler, DELAY, &mut announcer);

        assert!(camera.detection_active);
        assert_eq!(announcer.queued(), 1);
        assert!(announcer.latest().unwrap().contains("Object detection started"));
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_stop_cancels_the_pending_result() {
        let (mut camera, mut scheduler, mut announcer) = fixtures();

        camera.toggle_detection(&mut scheduler, DELAY, &mut announcer);
        camera.toggle_detection(&mut scheduler, DELAY, &mut announcer);

        assert!(!camera.detection_active);
        assert_eq!(announcer.latest(), Some("Object detection stopped"));
        assert_eq!(scheduler.pending_count(), 0);
        assert!(!camera.has_pending_task());
    }

    #[test]
    fn test_deliver_fills_list_and_announces_joined_labels() {
        let (mut camera, mut scheduler, mut announcer) = fixtures();

        camera.toggle_detection(&mut scheduler, DELAY, &mut announcer);
        camera.deliver(&mock::DETECTIONS, &mut announcer);

        assert_eq!(camera.detections.len(), 3);
        assert_eq!(camera.detections[0].label, "Person at 2 meters distance");
        assert!(announcer.latest().unwrap().contains("Dog on the left side"));
    }

    #[test]
    fn test_clear_resets_list_and_flag_jointly() {
        let (mut camera, mut scheduler, mut announcer) = fixtures();

        camera.toggle_detection(&mut scheduler, DELAY, &mut announcer);
        camera.deliver(&mock::DETECTIONS, &mut announcer);
        camera.clear(&mut scheduler, &mut announcer);

        assert!(camera.detections.is_empty());
        assert!(!camera.detection_active, "clear must also drop the active flag");
        assert_eq!(announcer.latest(), Some("Detection cleared"));
    }

    #[test]
    fn test_teardown_cancels_pending_silently() {
        let (mut camera, mut scheduler, mut announcer) = fixtures();

        camera.toggle_detection(&mut scheduler, DELAY, &mut announcer);
        let announced_before = announcer.queued();
        camera.reset(&mut scheduler);

        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(announcer.queued(), announced_before);
    }

    #[test]
    fn test_read_selected_reannounces_the_label() {
        let (mut camera, mut scheduler, mut announcer) = fixtures();

        camera.toggle_detection(&mut scheduler, DELAY, &mut announcer);
        camera.deliver(&mock::DETECTIONS, &mut announcer);
        camera.cursor = 1;
        camera.read_selected(&mut announcer);

        assert_eq!(announcer.latest(), Some("Dog on the left side"));
    }
}
