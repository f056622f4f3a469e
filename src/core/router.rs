// Navigation
// Route identifiers and the screen stack

/// Bottom tab destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabRoute {
    Home,
    VideoCall,
    Assistant,
    Activities,
    Profile,
}

impl TabRoute {
    /// Tab-bar display order
    pub const ALL: [TabRoute; 5] = [
        TabRoute::Home,
        TabRoute::VideoCall,
        TabRoute::Assistant,
        TabRoute::Activities,
        TabRoute::Profile,
    ];

    pub fn title(self) -> &'static str {
        match self {
            TabRoute::Home => "Home",
            TabRoute::VideoCall => "Video Call",
            TabRoute::Assistant => "AI Assistant",
            TabRoute::Activities => "Activities",
            TabRoute::Profile => "Profile",
        }
    }

    pub fn next(self) -> TabRoute {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> TabRoute {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Every screen reachable in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Startup splash while the session resolves
    Splash,
    /// Sign-in screen after sign-out
    Login,
    /// The tabbed main surface
    Tabs(TabRoute),
    /// Camera-based object detection
    CameraMode,
    /// Quick-phrase grid
    TtsGrid,
    /// Free-text speech editor
    TtsEditor,
    /// Audio games
    Games,
}

impl Route {
    pub fn title(self) -> &'static str {
        match self {
            Route::Splash => "AccessCare",
            Route::Login => "Sign In",
            Route::Tabs(TabRoute::Home) => "AccessCare",
            Route::Tabs(TabRoute::VideoCall) => "Video Call",
            Route::Tabs(TabRoute::Assistant) => "AI Assistant",
            Route::Tabs(TabRoute::Activities) => "Daily Activities",
            Route::Tabs(TabRoute::Profile) => "Profile",
            Route::CameraMode => "Camera Detection",
            Route::TtsGrid => "Quick Phrases",
            Route::TtsEditor => "Text to Speech",
            Route::Games => "Audio Games",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Route::Splash => "Loading your session",
            Route::Login => "Welcome back",
            Route::Tabs(TabRoute::Home) => "Your Daily Support Hub",
            Route::Tabs(TabRoute::VideoCall) => "Connect with healthcare providers",
            Route::Tabs(TabRoute::Assistant) => "Voice-activated help",
            Route::Tabs(TabRoute::Activities) => "Track your schedule and tasks",
            Route::Tabs(TabRoute::Profile) => "Your care details",
            Route::CameraMode => "Identify objects and people",
            Route::TtsGrid => "Select to speak",
            Route::TtsEditor => "Type and hear your words",
            Route::Games => "Sound-based play",
        }
    }
}

/// Screen stack. The bottom entry is the resident surface; `back` never
/// pops the last entry.
#[derive(Debug)]
pub struct Router {
    stack: Vec<Route>,
}

impl Router {
    pub fn new(initial: Route) -> Self {
        Self { stack: vec![initial] }
    }

    pub fn current(&self) -> Route {
        *self.stack.last().unwrap_or(&Route::Splash)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push a screen on top of the current one
    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Replace the top screen in place
    pub fn replace(&mut self, route: Route) {
        self.stack.pop();
        self.stack.push(route);
    }

    /// Return to the prior screen; no-op when the stack is already at its
    /// resident surface
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Switch tabs; effective only while a tabbed surface is on top
    pub fn set_tab(&mut self, tab: TabRoute) -> bool {
        match self.current() {
            Route::Tabs(current) if current != tab => {
                self.replace(Route::Tabs(tab));
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_on_bare_stack_is_noop() {
        let mut router = Router::new(Route::Tabs(TabRoute::Home));
        assert!(!router.back());
        assert_eq!(router.current(), Route::Tabs(TabRoute::Home));
    }

    #[test]
    fn test_push_then_back_returns_to_prior_screen() {
        let mut router = Router::new(Route::Tabs(TabRoute::Home));
        router.push(Route::CameraMode);
        assert_eq!(router.current(), Route::CameraMode);

        assert!(router.back());
        assert_eq!(router.current(), Route::Tabs(TabRoute::Home));
    }

    #[test]
    fn test_set_tab_only_applies_on_tab_surface() {
        let mut router = Router::new(Route::Tabs(TabRoute::Home));
        assert!(router.set_tab(TabRoute::Profile));
        assert_eq!(router.current(), Route::Tabs(TabRoute::Profile));

        router.push(Route::Games);
        assert!(!router.set_tab(TabRoute::Home));
        assert_eq!(router.current(), Route::Games);
    }

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(TabRoute::Profile.next(), TabRoute::Home);
        assert_eq!(TabRoute::Home.previous(), TabRoute::Profile);
    }
}
