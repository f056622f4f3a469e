// AccessCare Library
// A modular TUI application providing accessibility assistance: calls,
// daily tasks, speech tools and audio games

// Core infrastructure - app state, events, routing, session, scheduling
pub mod core;

// Accessibility - the narration side-channel
pub mod accessibility;

// Data - entity types and mock catalogs
pub mod data;

// Screens - per-screen state holders
pub mod screens;

// UI - styles and reusable widgets
pub mod ui;

// Render - per-route rendering
pub mod render;

// Configuration loading and validation
pub mod config;
pub mod config_validation;

// Re-export commonly used items for convenience
pub use accessibility::{Announcer, SpeechBackend};
pub use config::AppConfig;
pub use core::{App, AppEvent, EventHandler, Route, Router, Session, TabRoute};
