// Content rendering
// Screen chrome and route dispatch

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::{tabs, tools};
use crate::core::app::App;
use crate::core::router::Route;
use crate::ui::{
    render_announcement_banner, render_header, render_status_bar, render_tab_bar, Styles,
};

/// Render the whole frame: header, optional tab bar, the current screen,
/// the narration banner and the key legend
pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let route = app.router.current();
    let on_tabs = matches!(route, Route::Tabs(_));
    let show_banner = app.config.announcer.show_banner;

    let mut constraints = vec![Constraint::Length(3)];
    if on_tabs {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));
    if show_banner {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut row = 0;
    render_header(f, rows[row], route.title(), route.subtitle());
    row += 1;

    if let Route::Tabs(tab) = route {
        render_tab_bar(f, rows[row], tab);
        row += 1;
    }

    let content = rows[row];
    row += 1;

    match route {
        Route::Splash => render_splash(f, app, content),
        Route::Login => render_login(f, content),
        Route::Tabs(tab) => tabs::render_tab(f, app, tab, content),
        Route::CameraMode => tools::render_camera(f, app, content),
        Route::TtsGrid => tools::render_tts_grid(f, app, content),
        Route::TtsEditor => tools::render_tts_editor(f, app, content),
        Route::Games => tools::render_games(f, app, content),
    }

    if show_banner {
        render_announcement_banner(f, rows[row], &app.announcer);
        row += 1;
    }

    render_status_bar(f, rows[row], &app.config.bindings);
}

/// Startup splash while the session resolves
fn render_splash(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::styled(app.config.application.title.clone(), Styles::header()),
        Line::styled(app.config.application.subtitle.clone(), Styles::subtitle()),
        Line::from(""),
        Line::from("Signing in..."),
    ];
    let splash = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(splash, area);
}

/// Sign-in screen after sign-out
fn render_login(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::styled("You are signed out", Styles::subtitle()),
        Line::from(""),
        Line::styled("Press Enter to sign in", Styles::footer()),
    ];
    let login = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(login, area);
}
