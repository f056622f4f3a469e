// Data Model
// Entity types shared by the screens

use crate::core::router::Route;

/// Visual tag for a category or kind: a one-cell glyph plus an RGB accent.
/// The UI layer turns the RGB triple into a terminal style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayDescriptor {
    pub glyph: &'static str,
    pub rgb: (u8, u8, u8),
}

/// A scheduled activity on the daily tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    pub id: u32,
    pub time: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub completed: bool,
}

/// Activity category shown on the tracker's category cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityCategory {
    Medication,
    Exercise,
    Therapy,
    Appointment,
}

impl ActivityCategory {
    pub fn label(self) -> &'static str {
        match self {
            ActivityCategory::Medication => "Medications",
            ActivityCategory::Exercise => "Exercise",
            ActivityCategory::Therapy => "Therapy",
            ActivityCategory::Appointment => "Appointments",
        }
    }

    pub fn descriptor(self) -> DisplayDescriptor {
        match self {
            ActivityCategory::Medication => DisplayDescriptor { glyph: "+", rgb: (37, 99, 235) },
            ActivityCategory::Exercise => DisplayDescriptor { glyph: ">", rgb: (245, 158, 11) },
            ActivityCategory::Therapy => DisplayDescriptor { glyph: "~", rgb: (16, 185, 129) },
            ActivityCategory::Appointment => DisplayDescriptor { glyph: "@", rgb: (236, 72, 153) },
        }
    }
}

/// Whether a provider can take a call right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Busy,
}

impl Availability {
    pub fn label(self) -> &'static str {
        match self {
            Availability::Available => "Available Now",
            Availability::Busy => "Busy",
        }
    }
}

/// A healthcare provider in the call directory; never mutated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Doctor {
    pub id: u32,
    pub name: &'static str,
    pub specialty: &'static str,
    pub initials: &'static str,
    pub availability: Availability,
}

/// One narrated label produced by the mocked detection pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionResult {
    pub label: String,
}

impl DetectionResult {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

/// Phrase category on the quick-phrase grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PhraseCategory {
    Needs,
    Emergency,
    Status,
    Navigation,
    Polite,
    Answers,
}

impl PhraseCategory {
    /// Grid display order
    pub const ALL: [PhraseCategory; 6] = [
        PhraseCategory::Needs,
        PhraseCategory::Emergency,
        PhraseCategory::Status,
        PhraseCategory::Navigation,
        PhraseCategory::Polite,
        PhraseCategory::Answers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PhraseCategory::Needs => "Needs",
            PhraseCategory::Emergency => "Emergency",
            PhraseCategory::Status => "Status",
            PhraseCategory::Navigation => "Navigation",
            PhraseCategory::Polite => "Polite",
            PhraseCategory::Answers => "Answers",
        }
    }

    pub fn descriptor(self) -> DisplayDescriptor {
        match self {
            PhraseCategory::Needs => DisplayDescriptor { glyph: "*", rgb: (249, 115, 22) },
            PhraseCategory::Emergency => DisplayDescriptor { glyph: "!", rgb: (220, 38, 38) },
            PhraseCategory::Status => DisplayDescriptor { glyph: "=", rgb: (16, 185, 129) },
            PhraseCategory::Navigation => DisplayDescriptor { glyph: ">", rgb: (139, 92, 246) },
            PhraseCategory::Polite => DisplayDescriptor { glyph: "~", rgb: (6, 182, 212) },
            PhraseCategory::Answers => DisplayDescriptor { glyph: "?", rgb: (20, 184, 166) },
        }
    }
}

/// A speakable phrase on the quick-phrase grid; static catalog, immutable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseButton {
    pub id: &'static str,
    pub text: &'static str,
    pub category: PhraseCategory,
}

/// Audio game identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Memory,
    Reaction,
    SoundQuiz,
}

impl GameKind {
    /// In-game instruction line
    pub fn instructions(self) -> &'static str {
        match self {
            GameKind::Memory => "Listen to the sounds in order, then repeat them",
            GameKind::Reaction => "Tap when you hear the sound",
            GameKind::SoundQuiz => "Guess what makes this sound",
        }
    }

    pub fn descriptor(self) -> DisplayDescriptor {
        match self {
            GameKind::Memory => DisplayDescriptor { glyph: "#", rgb: (139, 92, 246) },
            GameKind::Reaction => DisplayDescriptor { glyph: "!", rgb: (249, 115, 22) },
            GameKind::SoundQuiz => DisplayDescriptor { glyph: "?", rgb: (6, 182, 212) },
        }
    }
}

/// Catalog entry for one audio game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameEntry {
    pub kind: GameKind,
    pub name: &'static str,
    pub description: &'static str,
}

/// Kind of emergency contact, for the profile list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    EmergencyServices,
    Caregiver,
    Doctor,
}

impl ContactKind {
    pub fn descriptor(self) -> DisplayDescriptor {
        match self {
            ContactKind::EmergencyServices => DisplayDescriptor { glyph: "!", rgb: (220, 38, 38) },
            ContactKind::Caregiver => DisplayDescriptor { glyph: "*", rgb: (37, 99, 235) },
            ContactKind::Doctor => DisplayDescriptor { glyph: "+", rgb: (16, 185, 129) },
        }
    }
}

/// An emergency contact on the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub number: &'static str,
    pub kind: ContactKind,
}

/// The signed-in user, resolved by the mock auth provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

/// Who wrote an assistant-conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageAuthor {
    Assistant,
    User,
}

/// One bubble in the seeded assistant conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssistantMessage {
    pub author: MessageAuthor,
    pub text: &'static str,
}

/// A home-screen shortcut mapping straight to a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub route: Route,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_phrase_category_has_a_descriptor() {
        for category in PhraseCategory::ALL {
            let d = category.descriptor();
            assert!(!d.glyph.is_empty());
            assert!(!category.label().is_empty());
        }
    }

    #[test]
    fn test_game_instructions_are_distinct() {
        assert_ne!(GameKind::Memory.instructions(), GameKind::Reaction.instructions());
        assert_ne!(GameKind::Reaction.instructions(), GameKind::SoundQuiz.instructions());
    }
}
