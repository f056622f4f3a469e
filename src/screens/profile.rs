// Profile Screen
// Contacts, health information, settings and sign-out

use crate::accessibility::Announcer;
use crate::data::mock;
use crate::data::model::EmergencyContact;

/// What a profile row activates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileEntry {
    Contact(usize),
    ToggleNotifications,
    SignOut,
}

/// State for the profile screen. Health info is read-only mock data; the
/// notifications setting is the one mutable toggle.
#[derive(Debug)]
pub struct ProfileState {
    pub contacts: Vec<EmergencyContact>,
    pub notifications_enabled: bool,
    pub cursor: usize,
}

impl ProfileState {
    pub fn new() -> Self {
        Self {
            contacts: mock::CONTACTS.to_vec(),
            notifications_enabled: true,
            cursor: 0,
        }
    }

    /// Selectable rows: each contact, the notifications toggle, sign-out
    pub fn entry_count(&self) -> usize {
        self.contacts.len() + 2
    }

    pub fn entry_at_cursor(&self) -> ProfileEntry {
        if self.cursor < self.contacts.len() {
            ProfileEntry::Contact(self.cursor)
        } else if self.cursor == self.contacts.len() {
            ProfileEntry::ToggleNotifications
        } else {
            ProfileEntry::SignOut
        }
    }

    /// Narrate a mock dial of the given contact
    pub fn call_contact(&mut self, index: usize, announcer: &mut Announcer) {
        if let Some(contact) = self.contacts.get(index) {
            announcer.announce(format!("Calling {}", contact.name));
        }
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications_enabled = !self.notifications_enabled;
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let max = self.entry_count().saturating_sub(1);
        if self.cursor < max {
            self.cursor += 1;
        }
    }
}

impl Default for ProfileState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_end_with_settings_and_signout() {
        let mut profile = ProfileState::new();

        profile.cursor = profile.contacts.len();
        assert_eq!(profile.entry_at_cursor(), ProfileEntry::ToggleNotifications);

        profile.cursor = profile.contacts.len() + 1;
        assert_eq!(profile.entry_at_cursor(), ProfileEntry::SignOut);
    }

    #[test]
    fn test_calling_a_contact_announces_the_name() {
        let mut profile = ProfileState::new();
        let mut announcer = Announcer::new(8);

        profile.call_contact(0, &mut announcer);
        assert_eq!(announcer.latest(), Some("Calling Emergency Services"));

        // Out-of-range contact indexes stay silent
        profile.call_contact(7, &mut announcer);
        assert_eq!(announcer.queued(), 1);
    }

    #[test]
    fn test_notifications_toggle() {
        let mut profile = ProfileState::new();
        assert!(profile.notifications_enabled);

        profile.toggle_notifications();
        assert!(!profile.notifications_enabled);
    }
}
