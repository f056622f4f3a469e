// Accessibility module
// Narration side-channel for assistive technology

pub mod announcer;

pub use announcer::{Announcer, NullBackend, SpeechBackend};
