// Data module
// Entity types and the static catalogs standing in for a real backend

pub mod mock;
pub mod model;

pub use model::{
    ActivityCategory, ActivityItem, AssistantMessage, Availability, ContactKind, DetectionResult,
    DisplayDescriptor, Doctor, EmergencyContact, GameEntry, GameKind, MessageAuthor, PhraseButton,
    PhraseCategory, QuickAction, UserProfile,
};
