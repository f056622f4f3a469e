// Application State
// Main application state management and lifecycle

use std::time::Instant;

use tracing::{debug, info};

use super::events::AppEvent;
use super::router::{Route, Router, TabRoute};
use super::session::Session;
use super::tasks::{Scheduler, TaskKind};
use crate::accessibility::Announcer;
use crate::config::AppConfig;
use crate::data::mock;
use crate::screens::{
    ActivitiesState, AssistantState, CameraState, GamesState, HomeSelection, HomeState,
    ProfileEntry, ProfileState, TtsEditorState, TtsGridState, VideoCallState,
};

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration (loaded from config.yaml)
    pub config: AppConfig,

    /// Auth session, injected rather than ambient
    pub session: Session,

    /// Screen stack
    pub router: Router,

    /// Narration side-channel for assistive technology
    pub announcer: Announcer,

    /// Cancellable one-shot timers
    pub scheduler: Scheduler,

    // Per-screen state holders
    pub home: HomeState,
    pub activities: ActivitiesState,
    pub video_call: VideoCallState,
    pub assistant: AssistantState,
    pub profile: ProfileState,
    pub camera: CameraState,
    pub tts_grid: TtsGridState,
    pub tts_editor: TtsEditorState,
    pub games: GamesState,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance and kick off sign-in
    pub fn new(config: AppConfig) -> Self {
        let mut session = Session::new();
        let mut scheduler = Scheduler::new();

        session.begin_sign_in();
        scheduler.schedule(config.timings.sign_in_delay(), TaskKind::ResolveSignIn);

        let announcer = Announcer::new(config.announcer.history_limit);

        Self {
            config,
            session,
            router: Router::new(Route::Splash),
            announcer,
            scheduler,
            home: HomeState::new(),
            activities: ActivitiesState::new(),
            video_call: VideoCallState::new(),
            assistant: AssistantState::new(),
            profile: ProfileState::new(),
            camera: CameraState::new(),
            tts_grid: TtsGridState::new(),
            tts_editor: TtsEditorState::new(),
            games: GamesState::new(),
            should_quit: false,
        }
    }

    /// Whether a text field currently captures keystrokes
    pub fn text_entry_active(&self) -> bool {
        self.router.current() == Route::TtsEditor && self.tts_editor.insert_mode
    }

    /// Fire due scheduled tasks and apply their effects
    pub fn tick(&mut self, now: Instant) {
        for kind in self.scheduler.fire_due(now) {
            match kind {
                TaskKind::DeliverDetections => {
                    self.camera.deliver(&mock::DETECTIONS, &mut self.announcer);
                }
                TaskKind::ClearPhraseSelection => {
                    self.tts_grid.clear_flash();
                }
                TaskKind::ResolveSignIn => {
                    if self.session.complete_sign_in(mock::signed_in_user()) {
                        info!("session authenticated");
                        self.router = Router::new(Route::Tabs(TabRoute::Home));
                    }
                }
            }
        }
    }

    /// Apply one application event against the current route. Events that do
    /// not apply to the current screen are ignored.
    pub fn apply(&mut self, event: AppEvent) {
        if event == AppEvent::Quit {
            self.quit();
            return;
        }
        if event == AppEvent::None {
            return;
        }

        match self.router.current() {
            Route::Splash => {} // waiting on the sign-in task
            Route::Login => self.apply_login(event),
            Route::Tabs(tab) => self.apply_tabs(tab, event),
            Route::CameraMode => self.apply_camera(event),
            Route::TtsGrid => self.apply_tts_grid(event),
            Route::TtsEditor => self.apply_tts_editor(event),
            Route::Games => self.apply_games(event),
        }
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // === Per-route dispatch ===

    fn apply_login(&mut self, event: AppEvent) {
        if event == AppEvent::Activate && self.session.begin_sign_in() {
            info!("sign-in restarted");
            self.router = Router::new(Route::Splash);
            self.scheduler
                .schedule(self.config.timings.sign_in_delay(), TaskKind::ResolveSignIn);
        }
    }

    fn apply_tabs(&mut self, tab: TabRoute, event: AppEvent) {
        match event {
            AppEvent::NextTab => self.switch_tab(tab, tab.next()),
            AppEvent::PrevTab => self.switch_tab(tab, tab.previous()),
            _ => match tab {
                TabRoute::Home => self.apply_home(event),
                TabRoute::VideoCall => self.apply_video_call(event),
                TabRoute::Assistant => self.apply_assistant(event),
                TabRoute::Activities => self.apply_activities(event),
                TabRoute::Profile => self.apply_profile(event),
            },
        }
    }

    fn switch_tab(&mut self, from: TabRoute, to: TabRoute) {
        self.leave_tab(from);
        if self.router.set_tab(to) {
            debug!(?from, ?to, "tab switched");
        }
    }

    /// Implicit unmount behavior when a tab loses the screen
    fn leave_tab(&mut self, tab: TabRoute) {
        if tab == TabRoute::VideoCall {
            self.video_call.reset();
        }
    }

    fn apply_home(&mut self, event: AppEvent) {
        match event {
            AppEvent::SelectPrevious => self.home.select_previous(),
            AppEvent::SelectNext => self.home.select_next(),
            AppEvent::Activate => match self.home.selection() {
                HomeSelection::Sos => self.home.trigger_sos(&mut self.announcer),
                HomeSelection::Action(action) => self.navigate(action.route),
            },
            _ => {}
        }
    }

    fn apply_video_call(&mut self, event: AppEvent) {
        if self.video_call.is_active {
            match event {
                AppEvent::ToggleMute => self.video_call.toggle_mute(),
                AppEvent::ToggleCamera => self.video_call.toggle_camera(),
                AppEvent::Back => self.video_call.end_call(&mut self.announcer),
                _ => {}
            }
            return;
        }
        match event {
            AppEvent::SelectPrevious => self.video_call.select_previous(),
            AppEvent::SelectNext => self.video_call.select_next(),
            AppEvent::Activate => {
                if self.video_call.emergency_selected() {
                    self.video_call.call_emergency(&mut self.announcer);
                } else {
                    self.video_call.start_call(&mut self.announcer);
                }
            }
            _ => {}
        }
    }

    fn apply_assistant(&mut self, event: AppEvent) {
        match event {
            AppEvent::SelectPrevious => self.assistant.select_previous(),
            AppEvent::SelectNext => self.assistant.select_next(),
            AppEvent::ToggleActive => self.assistant.toggle_listening(&mut self.announcer),
            AppEvent::Activate => self.assistant.speak_suggestion(&mut self.announcer),
            _ => {}
        }
    }

    fn apply_activities(&mut self, event: AppEvent) {
        match event {
            AppEvent::SelectPrevious => self.activities.select_previous(),
            AppEvent::SelectNext => self.activities.select_next(),
            AppEvent::Activate => self.activities.toggle_selected(),
            // Number keys address activities by id; unknown ids no-op
            AppEvent::Digit(n) => self.activities.toggle(u32::from(n)),
            _ => {}
        }
    }

    fn apply_profile(&mut self, event: AppEvent) {
        match event {
            AppEvent::SelectPrevious => self.profile.select_previous(),
            AppEvent::SelectNext => self.profile.select_next(),
            AppEvent::Activate => match self.profile.entry_at_cursor() {
                ProfileEntry::Contact(index) => {
                    self.profile.call_contact(index, &mut self.announcer);
                }
                ProfileEntry::ToggleNotifications => self.profile.toggle_notifications(),
                ProfileEntry::SignOut => self.sign_out(),
            },
            _ => {}
        }
    }

    fn apply_camera(&mut self, event: AppEvent) {
        match event {
            AppEvent::ToggleActive => self.camera.toggle_detection(
                &mut self.scheduler,
                self.config.timings.detection_delay(),
                &mut self.announcer,
            ),
            AppEvent::SelectPrevious => self.camera.select_previous(),
            AppEvent::SelectNext => self.camera.select_next(),
            AppEvent::Activate => self.camera.read_selected(&mut self.announcer),
            AppEvent::Clear => self.camera.clear(&mut self.scheduler, &mut self.announcer),
            AppEvent::Back => {
                self.camera.reset(&mut self.scheduler);
                self.router.back();
            }
            _ => {}
        }
    }

    fn apply_tts_grid(&mut self, event: AppEvent) {
        let flash = self.config.timings.phrase_flash();
        match event {
            AppEvent::SelectPrevious => self.tts_grid.select_previous(),
            AppEvent::SelectNext => self.tts_grid.select_next(),
            AppEvent::Activate => {
                self.tts_grid
                    .speak_selected(&mut self.scheduler, flash, &mut self.announcer);
            }
            AppEvent::Digit(n) => {
                let id = n.to_string();
                self.tts_grid
                    .speak(&id, &mut self.scheduler, flash, &mut self.announcer);
            }
            AppEvent::Back => {
                self.tts_grid.reset(&mut self.scheduler);
                self.router.back();
            }
            _ => {}
        }
    }

    fn apply_tts_editor(&mut self, event: AppEvent) {
        if self.tts_editor.insert_mode {
            match event {
                AppEvent::InputChar(c) => self.tts_editor.insert_char(c),
                AppEvent::InputBackspace => self.tts_editor.backspace(),
                AppEvent::Activate => self.tts_editor.speak(&mut self.announcer),
                AppEvent::Back => self.tts_editor.insert_mode = false,
                _ => {}
            }
            return;
        }
        match event {
            AppEvent::Insert => self.tts_editor.insert_mode = true,
            AppEvent::ToggleActive | AppEvent::Activate => {
                self.tts_editor.speak(&mut self.announcer);
            }
            AppEvent::Copy => self.tts_editor.copy(&mut self.announcer),
            AppEvent::Digit(n) => self.tts_editor.append_phrase(usize::from(n) - 1),
            AppEvent::Back => {
                self.tts_editor.reset();
                self.router.back();
            }
            _ => {}
        }
    }

    fn apply_games(&mut self, event: AppEvent) {
        if self.games.game_active {
            match event {
                AppEvent::Play => self.games.play_sound(&mut self.announcer),
                AppEvent::Activate => self.games.submit_answer(&mut self.announcer),
                AppEvent::Back => self.games.quit_game(&mut self.announcer),
                _ => {}
            }
            return;
        }
        match event {
            AppEvent::SelectPrevious => self.games.select_previous(),
            AppEvent::SelectNext => self.games.select_next(),
            AppEvent::Activate => self.games.start_selected(&mut self.announcer),
            AppEvent::Back => {
                self.games.reset();
                self.router.back();
            }
            _ => {}
        }
    }

    /// Pure routing: tabs switch in place, tool screens stack on top
    fn navigate(&mut self, route: Route) {
        debug!(from = ?self.router.current(), to = ?route, "navigate");
        match route {
            Route::Tabs(tab) => {
                self.router.set_tab(tab);
            }
            other => self.router.push(other),
        }
    }

    fn sign_out(&mut self) {
        if self.session.sign_out() {
            info!("session signed out");
            self.reset_screens();
            self.router = Router::new(Route::Login);
        }
    }

    /// Drop every screen back to its mount state, cancelling pending tasks
    fn reset_screens(&mut self) {
        self.camera.reset(&mut self.scheduler);
        self.tts_grid.reset(&mut self.scheduler);
        self.home = HomeState::new();
        self.activities = ActivitiesState::new();
        self.video_call = VideoCallState::new();
        self.assistant = AssistantState::new();
        self.profile = ProfileState::new();
        self.camera = CameraState::new();
        self.tts_grid = TtsGridState::new();
        self.tts_editor = TtsEditorState::new();
        self.games = GamesState::new();
    }
}
