// Scheduled Tasks
// Cancellable one-shot timers behind the app's mocked latencies

use std::time::{Duration, Instant};
use tracing::debug;

/// What a scheduled task does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Mock camera detections become available
    DeliverDetections,
    /// The phrase-grid selection flash ends
    ClearPhraseSelection,
    /// The mock auth provider resolves sign-in
    ResolveSignIn,
}

/// Handle for cancelling a pending task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Scheduled {
    id: u64,
    due: Instant,
    kind: TaskKind,
}

/// One-shot task scheduler polled from the main loop.
///
/// A task fires at most once; cancelling through its handle before the due
/// time guarantees it never fires. Screens cancel their pending handles on
/// teardown so a late result cannot mutate state the user has left behind.
#[derive(Debug)]
pub struct Scheduler {
    next_id: u64,
    pending: Vec<Scheduled>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Schedule `kind` to fire after `delay`
    pub fn schedule(&mut self, delay: Duration, kind: TaskKind) -> TaskHandle {
        self.schedule_at(Instant::now() + delay, kind)
    }

    /// Schedule `kind` to fire once the clock reaches `due`
    pub fn schedule_at(&mut self, due: Instant, kind: TaskKind) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(Scheduled { id, due, kind });
        debug!(?kind, id, "task scheduled");
        TaskHandle(id)
    }

    /// Cancel a pending task; returns false if it already fired or was cancelled
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != handle.0);
        let cancelled = self.pending.len() < before;
        if cancelled {
            debug!(id = handle.0, "task cancelled");
        }
        cancelled
    }

    /// Whether the handle still refers to a pending task
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|t| t.id == handle.0)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Remove and return every task due at `now`, ordered by due time then
    /// by creation order
    pub fn fire_due(&mut self, now: Instant) -> Vec<TaskKind> {
        let mut due: Vec<Scheduled> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due <= now {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by(|a, b| a.due.cmp(&b.due).then(a.id.cmp(&b.id)));
        due.iter().for_each(|t| debug!(kind = ?t.kind, id = t.id, "task fired"));
        due.into_iter().map(|t| t.kind).collect()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_due() {
        let mut scheduler = Scheduler::new();
        let start = Instant::now();
        scheduler.schedule_at(start + Duration::from_millis(100), TaskKind::DeliverDetections);

        assert!(scheduler.fire_due(start).is_empty());
        let fired = scheduler.fire_due(start + Duration::from_millis(100));
        assert_eq!(fired, vec![TaskKind::DeliverDetections]);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let mut scheduler = Scheduler::new();
        let start = Instant::now();
        let handle = scheduler.schedule_at(start, TaskKind::ClearPhraseSelection);

        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));
        assert!(scheduler.fire_due(start + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_fire_order_is_due_then_creation() {
        let mut scheduler = Scheduler::new();
        let start = Instant::now();
        scheduler.schedule_at(start + Duration::from_millis(50), TaskKind::ClearPhraseSelection);
        scheduler.schedule_at(start + Duration::from_millis(10), TaskKind::ResolveSignIn);
        scheduler.schedule_at(start + Duration::from_millis(50), TaskKind::DeliverDetections);

        let fired = scheduler.fire_due(start + Duration::from_millis(60));
        assert_eq!(
            fired,
            vec![
                TaskKind::ResolveSignIn,
                TaskKind::ClearPhraseSelection,
                TaskKind::DeliverDetections,
            ]
        );
    }

    #[test]
    fn test_handle_survives_other_cancellations() {
        let mut scheduler = Scheduler::new();
        let start = Instant::now();
        let first = scheduler.schedule_at(start + Duration::from_secs(1), TaskKind::DeliverDetections);
        let second = scheduler.schedule_at(start + Duration::from_secs(1), TaskKind::ResolveSignIn);

        scheduler.cancel(first);
        assert!(scheduler.is_pending(second));
    }
}
