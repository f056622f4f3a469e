// Session Lifecycle
// Explicit sign-in state machine, injected into the app instead of living
// in an ambient context

use crate::data::model::UserProfile;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticating,
    Authenticated,
    SignedOut,
}

/// Auth session handed to the app at startup.
///
/// Transitions outside `Unauthenticated/SignedOut -> Authenticating ->
/// Authenticated -> SignedOut` are no-ops; each mutator reports whether it
/// took effect.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    user: Option<UserProfile>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Unauthenticated,
            user: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    /// Start signing in; effective only from Unauthenticated or SignedOut
    pub fn begin_sign_in(&mut self) -> bool {
        match self.state {
            SessionState::Unauthenticated | SessionState::SignedOut => {
                self.state = SessionState::Authenticating;
                true
            }
            _ => false,
        }
    }

    /// Finish signing in with the resolved user; effective only while
    /// Authenticating
    pub fn complete_sign_in(&mut self, user: UserProfile) -> bool {
        if self.state != SessionState::Authenticating {
            return false;
        }
        self.state = SessionState::Authenticated;
        self.user = Some(user);
        true
    }

    /// Sign out and drop the user; effective only while Authenticated
    pub fn sign_out(&mut self) -> bool {
        if self.state != SessionState::Authenticated {
            return false;
        }
        self.state = SessionState::SignedOut;
        self.user = None;
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock;

    #[test]
    fn test_full_lifecycle() {
        let mut session = Session::new();
        assert_eq!(session.state(), SessionState::Unauthenticated);

        assert!(session.begin_sign_in());
        assert_eq!(session.state(), SessionState::Authenticating);

        assert!(session.complete_sign_in(mock::signed_in_user()));
        assert!(session.is_authenticated());
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("alex"));

        assert!(session.sign_out());
        assert_eq!(session.state(), SessionState::SignedOut);
        assert!(session.user().is_none());

        // A signed-out session can start over
        assert!(session.begin_sign_in());
    }

    #[test]
    fn test_invalid_transitions_are_noops() {
        let mut session = Session::new();

        // Cannot complete or sign out before authenticating
        assert!(!session.complete_sign_in(mock::signed_in_user()));
        assert!(!session.sign_out());
        assert_eq!(session.state(), SessionState::Unauthenticated);

        session.begin_sign_in();
        // Cannot re-enter authenticating from authenticating
        assert!(!session.begin_sign_in());

        session.complete_sign_in(mock::signed_in_user());
        // Completing twice does not take effect
        assert!(!session.complete_sign_in(mock::signed_in_user()));
        assert!(session.is_authenticated());
    }
}
