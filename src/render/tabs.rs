// Tab screen rendering
// The five resident surfaces behind the tab bar

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::core::app::App;
use crate::core::router::TabRoute;
use crate::data::mock;
use crate::data::model::{Availability, MessageAuthor};
use crate::ui::{render_progress, Styles};

/// Dispatch to the renderer for the active tab
pub fn render_tab(f: &mut Frame, app: &App, tab: TabRoute, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    match tab {
        TabRoute::Home => render_home(f, app, area),
        TabRoute::VideoCall => render_video_call(f, app, area),
        TabRoute::Assistant => render_assistant(f, app, area),
        TabRoute::Activities => render_activities(f, app, area),
        TabRoute::Profile => render_profile(f, app, area),
    }
}

// === Home ===

fn render_home(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let cursor = app.home.cursor;
    let mut items: Vec<ListItem> = Vec::new();

    let sos_style = if cursor == 0 {
        Styles::list_selected()
    } else {
        Styles::sos()
    };
    items.push(ListItem::new(Line::from(Span::styled(
        "!  Emergency SOS",
        sos_style,
    ))));

    for (i, action) in app.home.actions.iter().chain(app.home.tools.iter()).enumerate() {
        let style = if cursor == i + 1 {
            Styles::list_selected()
        } else {
            Styles::list_normal()
        };
        items.push(ListItem::new(Line::from(Span::styled(
            format!("{} \u{2014} {}", action.title, action.subtitle),
            style,
        ))));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_focused())
            .title(Span::styled("Quick Actions", Styles::title_focused())),
    );
    let mut state = ListState::default();
    state.select(Some(cursor));
    f.render_stateful_widget(list, chunks[0], &mut state);

    // Upcoming activities preview, fed by the activities screen state
    let mut lines: Vec<Line> = Vec::new();
    for activity in app.activities.upcoming().take(2) {
        lines.push(Line::from(vec![
            Span::styled(activity.time, Styles::footer()),
            Span::raw("  "),
            Span::styled(activity.title, Styles::list_normal().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("        {}", activity.description),
            Styles::subtitle(),
        )));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "All caught up for today",
            Styles::available(),
        )));
    }
    let upcoming = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_unfocused())
                .title("Upcoming Activities"),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(upcoming, chunks[1]);
}

// === Video Call ===

fn render_video_call(f: &mut Frame, app: &App, area: Rect) {
    if app.video_call.is_active {
        render_active_call(f, app, area);
    } else {
        render_directory(f, app, area);
    }
}

fn render_active_call(f: &mut Frame, app: &App, area: Rect) {
    let (initials, name) = app
        .video_call
        .active_doctor()
        .map(|d| (d.initials, d.name))
        .unwrap_or(("??", "Unknown"));

    let mic = if app.video_call.is_muted { "Muted" } else { "On" };
    let camera = if app.video_call.is_camera_off { "Off" } else { "On" };

    let lines = vec![
        Line::from(""),
        Line::styled(format!("( {initials} )"), Styles::header()),
        Line::styled(name, Styles::header()),
        Line::styled("Connected", Styles::available()),
        Line::from(""),
        Line::from(vec![
            Span::raw("Mic: "),
            Span::styled(mic, Styles::active_flag()),
            Span::raw("   Camera: "),
            Span::styled(camera, Styles::active_flag()),
        ]),
        Line::from(""),
        Line::styled("m Mute   v Camera   Esc End call", Styles::subtitle()),
    ];
    let call = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_focused())
                .title(Span::styled("On Call", Styles::title_focused())),
        );
    f.render_widget(call, area);
}

fn render_directory(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let cursor = app.video_call.cursor;
    let mut items: Vec<ListItem> = Vec::new();

    for (i, doctor) in app.video_call.doctors.iter().enumerate() {
        let name_style = if cursor == i {
            Styles::list_selected()
        } else {
            Styles::list_normal()
        };
        let availability_style = match doctor.availability {
            Availability::Available => Styles::available(),
            Availability::Busy => Styles::busy(),
        };
        items.push(ListItem::new(Line::from(vec![
            Span::styled(format!("{}  ", doctor.initials), Styles::subtitle()),
            Span::styled(format!("{} \u{2014} {}  ", doctor.name, doctor.specialty), name_style),
            Span::styled(doctor.availability.label(), availability_style),
        ])));
    }

    let emergency_style = if app.video_call.emergency_selected() {
        Styles::list_selected()
    } else {
        Styles::sos()
    };
    items.push(ListItem::new(Line::from(Span::styled(
        "!  Call Emergency Services",
        emergency_style,
    ))));

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_focused())
            .title(Span::styled("Available Doctors", Styles::title_focused())),
    );
    let mut state = ListState::default();
    state.select(Some(cursor));
    f.render_stateful_widget(list, chunks[0], &mut state);

    let info = if app.video_call.emergency_selected() {
        "Emergency Contact\n\nPress Enter to call\nemergency services".to_string()
    } else if let Some(doctor) = app.video_call.doctors.get(cursor) {
        format!(
            "{}\n{}\nStatus: {}\n\nEnter: Start video call\n\u{2191}/\u{2193}: Navigate",
            doctor.name,
            doctor.specialty,
            doctor.availability.label()
        )
    } else {
        String::new()
    };
    let panel = Paragraph::new(info)
        .block(Block::default().borders(Borders::ALL).title("Details"))
        .wrap(Wrap { trim: true });
    f.render_widget(panel, chunks[1]);
}

// === Assistant ===

fn render_assistant(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    for message in &app.assistant.messages {
        let (prefix, style) = match message.author {
            MessageAuthor::Assistant => ("Assistant: ", Styles::header()),
            MessageAuthor::User => ("You: ", Styles::footer()),
        };
        for (i, part) in message.text.lines().enumerate() {
            if i == 0 {
                lines.push(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::raw(part.to_string()),
                ]));
            } else {
                lines.push(Line::from(part.to_string()));
            }
        }
        lines.push(Line::from(""));
    }
    let conversation = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Conversation"))
        .wrap(Wrap { trim: true });
    f.render_widget(conversation, chunks[0]);

    let items: Vec<ListItem> = app
        .assistant
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let style = if i == app.assistant.cursor {
                Styles::list_selected()
            } else {
                Styles::list_normal()
            };
            ListItem::new(Line::from(Span::styled(*text, style)))
        })
        .collect();
    let suggestions = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Quick Commands"),
    );
    let mut state = ListState::default();
    state.select(Some(app.assistant.cursor));
    f.render_stateful_widget(suggestions, chunks[1], &mut state);

    let listening = if app.assistant.is_listening {
        Line::styled("\u{25cf} Listening...", Styles::active_flag())
    } else {
        Line::styled("s Start listening   Enter Read command aloud", Styles::subtitle())
    };
    f.render_widget(Paragraph::new(listening), chunks[2]);
}

// === Activities ===

fn render_activities(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_progress(
        f,
        chunks[0],
        app.activities.completed_count(),
        app.activities.total(),
        "Completed Today",
    );

    let items: Vec<ListItem> = app
        .activities
        .items
        .iter()
        .enumerate()
        .map(|(i, activity)| {
            let check = if activity.completed { "[x]" } else { "[ ]" };
            let text_style = if i == app.activities.cursor {
                Styles::list_selected()
            } else if activity.completed {
                Styles::completed()
            } else {
                Styles::list_normal()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{check} "), Styles::subtitle()),
                Span::styled(format!("{}  ", activity.time), Styles::footer()),
                Span::styled(
                    format!("{} \u{2014} {}", activity.title, activity.description),
                    text_style,
                ),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_focused())
            .title(Span::styled("Today's Schedule", Styles::title_focused())),
    );
    let mut state = ListState::default();
    state.select(Some(app.activities.cursor));
    f.render_stateful_widget(list, chunks[1], &mut state);

    // Weekly overview strip
    let mut week: Vec<Span> = Vec::new();
    for (i, day) in mock::WEEK_DAYS.iter().enumerate() {
        let style = if i == mock::WEEK_ACTIVE_INDEX {
            Styles::tab_active()
        } else {
            Styles::subtitle()
        };
        let dot = if i < mock::WEEK_COMPLETED_THROUGH {
            Span::styled("\u{25cf}", Styles::available())
        } else {
            Span::styled("\u{25cb}", Styles::subtitle())
        };
        week.push(Span::styled(format!(" {day} "), style));
        week.push(dot);
        week.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(week)), chunks[2]);

    // Category cards
    let mut categories: Vec<Span> = Vec::new();
    for (category, count) in mock::CATEGORY_CARDS {
        let descriptor = category.descriptor();
        categories.push(Span::styled(
            format!("{} {} ({count})  ", descriptor.glyph, category.label()),
            Styles::accent(descriptor),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(categories)), chunks[3]);
}

// === Profile ===

fn render_profile(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(5),
        ])
        .split(area);

    let (name, email) = app
        .session
        .user()
        .map(|u| (u.name.clone(), u.email.clone()))
        .unwrap_or_else(|| ("User".to_string(), "No email".to_string()));
    let identity = Paragraph::new(vec![
        Line::styled(name, Styles::header()),
        Line::styled(email, Styles::subtitle()),
    ]);
    f.render_widget(identity, chunks[0]);

    let cursor = app.profile.cursor;
    let mut items: Vec<ListItem> = Vec::new();
    for (i, contact) in app.profile.contacts.iter().enumerate() {
        let descriptor = contact.kind.descriptor();
        let style = if cursor == i {
            Styles::list_selected()
        } else {
            Styles::list_normal()
        };
        items.push(ListItem::new(Line::from(vec![
            Span::styled(format!("{} ", descriptor.glyph), Styles::accent(descriptor)),
            Span::styled(format!("{} \u{2014} {}", contact.name, contact.number), style),
        ])));
    }

    let notifications_idx = app.profile.contacts.len();
    let notifications = format!(
        "Notifications: {}",
        if app.profile.notifications_enabled { "On" } else { "Off" }
    );
    let notifications_style = if cursor == notifications_idx {
        Styles::list_selected()
    } else {
        Styles::list_normal()
    };
    items.push(ListItem::new(Line::from(Span::styled(
        notifications,
        notifications_style,
    ))));

    let sign_out_style = if cursor == notifications_idx + 1 {
        Styles::list_selected()
    } else {
        Styles::sos()
    };
    items.push(ListItem::new(Line::from(Span::styled(
        "Sign Out",
        sign_out_style,
    ))));

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_focused())
            .title(Span::styled(
                "Emergency Contacts & Settings",
                Styles::title_focused(),
            )),
    );
    let mut state = ListState::default();
    state.select(Some(cursor));
    f.render_stateful_widget(list, chunks[1], &mut state);

    let health: Vec<Line> = mock::HEALTH_INFO
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label}: "), Styles::subtitle()),
                Span::raw(*value),
            ])
        })
        .collect();
    let health_panel = Paragraph::new(health).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Health Information"),
    );
    f.render_widget(health_panel, chunks[2]);
}
