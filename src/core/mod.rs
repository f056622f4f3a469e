// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod app;
pub mod events;
pub mod router;
pub mod session;
pub mod tasks;

pub use app::App;
pub use events::{AppEvent, EventHandler};
pub use router::{Route, Router, TabRoute};
pub use session::{Session, SessionState};
pub use tasks::{Scheduler, TaskHandle, TaskKind};
