// Mock Data Provider
// Fixed collections standing in for the future real backend: no variation,
// no failure mode, no freshness contract

use super::model::{
    ActivityCategory, ActivityItem, AssistantMessage, Availability, ContactKind, Doctor,
    EmergencyContact, GameEntry, GameKind, MessageAuthor, PhraseButton, PhraseCategory,
    QuickAction, UserProfile,
};
use crate::core::router::{Route, TabRoute};

/// Today's seeded schedule; cloned into screen state at mount
pub fn seeded_activities() -> Vec<ActivityItem> {
    vec![
        ActivityItem {
            id: 1,
            time: "10:00 AM",
            title: "Physical Therapy",
            description: "Stretching exercises",
            completed: true,
        },
        ActivityItem {
            id: 2,
            time: "2:00 PM",
            title: "Medication Reminder",
            description: "Take afternoon meds",
            completed: false,
        },
        ActivityItem {
            id: 3,
            time: "4:00 PM",
            title: "Video Call",
            description: "Dr. Johnson checkup",
            completed: false,
        },
        ActivityItem {
            id: 4,
            time: "6:00 PM",
            title: "Evening Walk",
            description: "15 minutes around the block",
            completed: false,
        },
    ]
}

/// The call directory
pub const DOCTORS: [Doctor; 3] = [
    Doctor {
        id: 1,
        name: "Dr. Sarah Johnson",
        specialty: "General Physician",
        initials: "DS",
        availability: Availability::Available,
    },
    Doctor {
        id: 2,
        name: "Dr. Michael Chen",
        specialty: "Physical Therapist",
        initials: "MC",
        availability: Availability::Available,
    },
    Doctor {
        id: 3,
        name: "Dr. Emily Parker",
        specialty: "Mental Health Specialist",
        initials: "EP",
        availability: Availability::Busy,
    },
];

/// Labels the mocked detection pipeline reports after its fixed delay
pub const DETECTIONS: [&str; 3] = [
    "Person at 2 meters distance",
    "Dog on the left side",
    "Chair detected in front",
];

/// The quick-phrase catalog
pub const PHRASES: [PhraseButton; 8] = [
    PhraseButton { id: "1", text: "I need food", category: PhraseCategory::Needs },
    PhraseButton { id: "2", text: "Help me", category: PhraseCategory::Emergency },
    PhraseButton { id: "3", text: "I am okay", category: PhraseCategory::Status },
    PhraseButton { id: "4", text: "I need water", category: PhraseCategory::Needs },
    PhraseButton { id: "5", text: "Take me home", category: PhraseCategory::Navigation },
    PhraseButton { id: "6", text: "Where am I", category: PhraseCategory::Navigation },
    PhraseButton { id: "7", text: "Thank you", category: PhraseCategory::Polite },
    PhraseButton { id: "8", text: "Yes", category: PhraseCategory::Answers },
];

/// Words offered by the speech editor for one-key appending
pub const EDITOR_PHRASES: [&str; 6] = ["Hello", "Thank you", "Yes", "No", "Help", "Water"];

/// Audio game catalog
pub const GAMES: [GameEntry; 3] = [
    GameEntry {
        kind: GameKind::Memory,
        name: "Audio Memory",
        description: "Remember and repeat sound sequences",
    },
    GameEntry {
        kind: GameKind::Reaction,
        name: "Reaction Game",
        description: "Tap as fast as you can when you hear the sound",
    },
    GameEntry {
        kind: GameKind::SoundQuiz,
        name: "Sound Quiz",
        description: "Guess what makes each sound",
    },
];

/// Emergency contacts on the profile screen
pub const CONTACTS: [EmergencyContact; 3] = [
    EmergencyContact {
        name: "Emergency Services",
        number: "911",
        kind: ContactKind::EmergencyServices,
    },
    EmergencyContact {
        name: "Primary Caregiver",
        number: "Jane Smith - (555) 123-4567",
        kind: ContactKind::Caregiver,
    },
    EmergencyContact {
        name: "Doctor",
        number: "Dr. Sarah Johnson - (555) 987-6543",
        kind: ContactKind::Doctor,
    },
];

/// Health information fields shown read-only on the profile
pub const HEALTH_INFO: [(&str, &str); 3] = [
    ("Blood Type", "O+"),
    ("Allergies", "Penicillin, Peanuts"),
    ("Medical Conditions", "Type 2 Diabetes"),
];

/// Seeded assistant conversation
pub const CONVERSATION: [AssistantMessage; 3] = [
    AssistantMessage {
        author: MessageAuthor::Assistant,
        text: "Hello! I'm your AI assistant. How can I help you today? You can ask me about \
               your schedule, medications, or use voice commands.",
    },
    AssistantMessage {
        author: MessageAuthor::User,
        text: "What's on my schedule today?",
    },
    AssistantMessage {
        author: MessageAuthor::Assistant,
        text: "You have 3 activities scheduled today:\n\n1. Physical Therapy at 10:00 AM\n\
               2. Medication reminder at 2:00 PM\n3. Video call with Dr. Johnson at 4:00 PM",
    },
];

/// Quick commands offered under the assistant conversation
pub const SUGGESTIONS: [&str; 4] = [
    "What's my medication schedule?",
    "Call emergency contact",
    "Read today's reminders",
    "Schedule doctor appointment",
];

/// Category summary cards on the activities screen
pub const CATEGORY_CARDS: [(ActivityCategory, &str); 4] = [
    (ActivityCategory::Medication, "3 daily"),
    (ActivityCategory::Exercise, "2 today"),
    (ActivityCategory::Therapy, "1 today"),
    (ActivityCategory::Appointment, "1 today"),
];

/// Week strip on the activities screen; Wednesday is "today"
pub const WEEK_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
pub const WEEK_ACTIVE_INDEX: usize = 2;
pub const WEEK_COMPLETED_THROUGH: usize = 3;

/// Home-screen shortcut grid
pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction {
            title: "Call Doctor",
            subtitle: "Video consultation",
            route: Route::Tabs(TabRoute::VideoCall),
        },
        QuickAction {
            title: "AI Assistant",
            subtitle: "Voice help",
            route: Route::Tabs(TabRoute::Assistant),
        },
        QuickAction {
            title: "Today's Tasks",
            subtitle: "5 activities",
            route: Route::Tabs(TabRoute::Activities),
        },
        QuickAction {
            title: "Health Log",
            subtitle: "Track vitals",
            route: Route::Tabs(TabRoute::Profile),
        },
    ]
}

/// Accessibility tool shortcuts on the home screen
pub fn tool_shortcuts() -> Vec<QuickAction> {
    vec![
        QuickAction {
            title: "Camera Detection",
            subtitle: "Identify objects and people",
            route: Route::CameraMode,
        },
        QuickAction {
            title: "Quick Phrases",
            subtitle: "Select to speak",
            route: Route::TtsGrid,
        },
        QuickAction {
            title: "Speech Editor",
            subtitle: "Type and hear your words",
            route: Route::TtsEditor,
        },
        QuickAction {
            title: "Audio Games",
            subtitle: "Sound-based play",
            route: Route::Games,
        },
    ]
}

/// The user the mock auth provider resolves to
pub fn signed_in_user() -> UserProfile {
    UserProfile {
        name: "alex".to_string(),
        email: "alex@accesscare.app".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_activities_match_schedule() {
        let activities = seeded_activities();
        assert_eq!(activities.len(), 4);
        assert!(activities[0].completed);
        assert!(activities[1..].iter().all(|a| !a.completed));
    }

    #[test]
    fn test_phrase_ids_are_unique() {
        for (i, a) in PHRASES.iter().enumerate() {
            for b in &PHRASES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_exactly_one_doctor_is_busy() {
        let busy = DOCTORS.iter().filter(|d| d.availability == Availability::Busy).count();
        assert_eq!(busy, 1);
    }
}
