// Screens module
// One state holder per screen: flags and small lists, discarded or reset
// according to each screen's lifecycle

pub mod activities;
pub mod assistant;
pub mod camera;
pub mod games;
pub mod home;
pub mod profile;
pub mod tts_editor;
pub mod tts_grid;
pub mod video_call;

pub use activities::ActivitiesState;
pub use assistant::AssistantState;
pub use camera::CameraState;
pub use games::GamesState;
pub use home::{HomeSelection, HomeState};
pub use profile::{ProfileEntry, ProfileState};
pub use tts_editor::TtsEditorState;
pub use tts_grid::TtsGridState;
pub use video_call::VideoCallState;
