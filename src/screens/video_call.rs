// Video Call Screen
// Provider directory and the in-call flag set

use crate::accessibility::Announcer;
use crate::data::mock;
use crate::data::model::{Availability, Doctor};

/// State for the video-call screen. The three call flags live and die
/// together: ending the call or leaving the screen resets all of them.
#[derive(Debug)]
pub struct VideoCallState {
    pub doctors: Vec<Doctor>,
    pub cursor: usize,
    pub is_active: bool,
    pub is_muted: bool,
    pub is_camera_off: bool,
    pub active_doctor: Option<u32>,
}

impl VideoCallState {
    pub fn new() -> Self {
        Self {
            doctors: mock::DOCTORS.to_vec(),
            cursor: 0,
            is_active: false,
            is_muted: false,
            is_camera_off: false,
            active_doctor: None,
        }
    }

    /// Number of selectable rows: the doctors plus the emergency entry
    pub fn entry_count(&self) -> usize {
        self.doctors.len() + 1
    }

    /// Whether the cursor sits on the emergency entry
    pub fn emergency_selected(&self) -> bool {
        self.cursor == self.doctors.len()
    }

    /// Start a call with the doctor under the cursor. Busy doctors cannot be
    /// called; activating one is a no-op.
    pub fn start_call(&mut self, announcer: &mut Announcer) {
        if self.is_active {
            return;
        }
        let Some(doctor) = self.doctors.get(self.cursor) else {
            return;
        };
        if doctor.availability == Availability::Busy {
            return;
        }
        self.is_active = true;
        self.active_doctor = Some(doctor.id);
        announcer.announce(format!("Calling {}", doctor.name));
    }

    /// End the call, resetting every call flag together
    pub fn end_call(&mut self, announcer: &mut Announcer) {
        if !self.is_active {
            return;
        }
        self.reset();
        announcer.announce("Call ended");
    }

    /// Mute toggle; meaningful only during a call
    pub fn toggle_mute(&mut self) {
        if self.is_active {
            self.is_muted = !self.is_muted;
        }
    }

    /// Camera toggle; meaningful only during a call
    pub fn toggle_camera(&mut self) {
        if self.is_active {
            self.is_camera_off = !self.is_camera_off;
        }
    }

    /// The doctor on the current call
    pub fn active_doctor(&self) -> Option<&Doctor> {
        let id = self.active_doctor?;
        self.doctors.iter().find(|d| d.id == id)
    }

    /// Narrate the emergency entry; the real dialer is out of scope
    pub fn call_emergency(&mut self, announcer: &mut Announcer) {
        announcer.announce("Calling emergency services");
    }

    /// Implicit unmount reset: all call flags drop together, silently
    pub fn reset(&mut self) {
        self.is_active = false;
        self.is_muted = false;
        self.is_camera_off = false;
        self.active_doctor = None;
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

impl Default for VideoCallState {
    fn default() -> Self {
        Self::new()
    }
}
