// Accessibility Announcer
// Fire-and-forget narration of state transitions

use std::collections::VecDeque;

/// Output boundary toward the assistive-technology layer.
///
/// Implementations must not block the caller; the announcer only guarantees
/// that narrations reach the backend in the order the triggering actions
/// occurred.
pub trait SpeechBackend {
    fn emit(&mut self, text: &str);
}

/// Backend that discards narrations. Used headless and in tests; the real
/// speech engine lives outside this program.
#[derive(Debug, Default)]
pub struct NullBackend;

impl SpeechBackend for NullBackend {
    fn emit(&mut self, _text: &str) {}
}

/// Queues announcements in action order and keeps a bounded history for the
/// on-screen banner. `announce` is fire-and-forget: callers get nothing back
/// beyond "the announcement was queued".
#[derive(Debug)]
pub struct Announcer {
    queue: VecDeque<String>,
    history: VecDeque<String>,
    history_limit: usize,
}

impl Announcer {
    pub fn new(history_limit: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            history: VecDeque::new(),
            history_limit: history_limit.max(1),
        }
    }

    /// Queue a narration for the assistive-technology layer
    pub fn announce(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.queue.push_back(text.clone());
        self.history.push_back(text);
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }
    }

    /// Drain queued narrations into the backend, oldest first
    pub fn flush(&mut self, backend: &mut dyn SpeechBackend) {
        while let Some(text) = self.queue.pop_front() {
            backend.emit(&text);
        }
    }

    /// Announcements queued since the last flush
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Most recent announcement, for the banner
    pub fn latest(&self) -> Option<&str> {
        self.history.back().map(String::as_str)
    }

    /// Retained history, oldest first
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder(Vec<String>);

    impl SpeechBackend for Recorder {
        fn emit(&mut self, text: &str) {
            self.0.push(text.to_string());
        }
    }

    #[test]
    fn test_flush_preserves_action_order() {
        let mut announcer = Announcer::new(10);
        announcer.announce("first");
        announcer.announce("second");
        announcer.announce("third");

        let mut recorder = Recorder(Vec::new());
        announcer.flush(&mut recorder);
        assert_eq!(recorder.0, vec!["first", "second", "third"]);
        assert_eq!(announcer.queued(), 0);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut announcer = Announcer::new(2);
        announcer.announce("a");
        announcer.announce("b");
        announcer.announce("c");

        let history: Vec<&str> = announcer.history().collect();
        assert_eq!(history, vec!["b", "c"]);
        assert_eq!(announcer.latest(), Some("c"));
    }

    #[test]
    fn test_flush_on_empty_queue_is_noop() {
        let mut announcer = Announcer::new(4);
        let mut recorder = Recorder(Vec::new());
        announcer.flush(&mut recorder);
        assert!(recorder.0.is_empty());
    }
}
