// Tool screen rendering
// The stacked accessibility tools: camera detection, speech tools, games

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::core::app::App;
use crate::data::mock;
use crate::data::model::PhraseCategory;
use crate::ui::Styles;

// === Camera Detection ===

pub fn render_camera(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let (status, style) = if app.camera.detection_active {
        ("Detection Active", Styles::active_flag())
    } else {
        ("Ready to detect", Styles::inactive_flag())
    };
    let preview = Paragraph::new(vec![
        Line::from(""),
        Line::styled(status, style),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Camera"));
    f.render_widget(preview, chunks[0]);

    if app.camera.detections.is_empty() {
        let steps = Paragraph::new(
            "1. Press s to activate the camera\n\n\
             2. Point the camera at objects, people, or animals\n\n\
             3. The app will identify and describe what it detects\n\n\
             4. Select any detection to hear it read aloud",
        )
        .block(Block::default().borders(Borders::ALL).title("How It Works"))
        .wrap(Wrap { trim: true });
        f.render_widget(steps, chunks[1]);
    } else {
        let items: Vec<ListItem> = app
            .camera
            .detections
            .iter()
            .enumerate()
            .map(|(i, detection)| {
                let style = if i == app.camera.cursor {
                    Styles::list_selected()
                } else {
                    Styles::list_normal()
                };
                ListItem::new(Line::from(vec![
                    Span::styled("\u{2022} ", Styles::subtitle()),
                    Span::styled(detection.label.clone(), style),
                ]))
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_focused())
                .title(Span::styled("Detected Objects", Styles::title_focused())),
        );
        let mut state = ListState::default();
        state.select(Some(app.camera.cursor));
        f.render_stateful_widget(list, chunks[1], &mut state);
    }

    let hints = Line::styled(
        "s Start/Stop   Enter Read aloud   x Clear   Esc Back",
        Styles::subtitle(),
    );
    f.render_widget(Paragraph::new(hints), chunks[2]);
}

// === Quick Phrases ===

pub fn render_tts_grid(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    let mut idx = 0;
    for category in PhraseCategory::ALL {
        let group: Vec<_> = app
            .tts_grid
            .phrases
            .iter()
            .filter(|p| p.category == category)
            .collect();
        if group.is_empty() {
            continue;
        }
        lines.push(Line::styled(
            category.label(),
            Styles::accent(category.descriptor()).add_modifier(Modifier::BOLD),
        ));
        for phrase in group {
            let style = if app.tts_grid.selected == Some(phrase.id) {
                Styles::accent_selected(phrase.category.descriptor())
            } else if idx == app.tts_grid.cursor {
                Styles::list_selected()
            } else {
                Styles::list_normal()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  [{}] ", phrase.id), Styles::subtitle()),
                Span::styled(phrase.text, style),
            ]));
            idx += 1;
        }
        lines.push(Line::from(""));
    }
    let grid = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_focused())
            .title(Span::styled("Phrases", Styles::title_focused())),
    );
    f.render_widget(grid, chunks[0]);

    let hints = Line::styled(
        "1-8 Speak directly   Enter Speak selected   Esc Back",
        Styles::subtitle(),
    );
    f.render_widget(Paragraph::new(hints), chunks[1]);
}

// === Speech Editor ===

pub fn render_tts_editor(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .split(area);

    let mut text = app.tts_editor.text.clone();
    if app.tts_editor.insert_mode {
        text.push('_');
    }
    let input = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if app.tts_editor.insert_mode {
                    Styles::border_focused()
                } else {
                    Styles::border_unfocused()
                })
                .title("Enter your text:"),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(input, chunks[0]);

    let count = Line::styled(
        format!("{} characters", app.tts_editor.char_count()),
        Styles::subtitle(),
    );
    f.render_widget(Paragraph::new(count), chunks[1]);

    let mut phrases: Vec<Span> = vec![Span::styled("Common Phrases:  ", Styles::subtitle())];
    for (i, phrase) in mock::EDITOR_PHRASES.iter().enumerate() {
        phrases.push(Span::styled(format!("{} ", i + 1), Styles::footer()));
        phrases.push(Span::raw(format!("{phrase}  ")));
    }
    f.render_widget(Paragraph::new(Line::from(phrases)), chunks[2]);

    let hints = if app.tts_editor.insert_mode {
        "Typing...   Enter Speak   Esc Finish typing"
    } else {
        "i Type   s/Enter Speak   c Copy   1-6 Add phrase   Esc Back"
    };
    f.render_widget(
        Paragraph::new(Line::styled(hints, Styles::subtitle())),
        chunks[3],
    );
}

// === Audio Games ===

pub fn render_games(f: &mut Frame, app: &App, area: Rect) {
    if app.games.game_active {
        render_running_game(f, app, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let items: Vec<ListItem> = app
        .games
        .games
        .iter()
        .enumerate()
        .map(|(i, game)| {
            let descriptor = game.kind.descriptor();
            let style = if i == app.games.cursor {
                Styles::list_selected()
            } else {
                Styles::list_normal()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", descriptor.glyph), Styles::accent(descriptor)),
                Span::styled(format!("{} \u{2014} {}", game.name, game.description), style),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_focused())
            .title(Span::styled("Choose a Game", Styles::title_focused())),
    );
    let mut state = ListState::default();
    state.select(Some(app.games.cursor));
    f.render_stateful_widget(list, chunks[0], &mut state);

    let hints = Line::styled("Enter Start   Esc Back", Styles::subtitle());
    f.render_widget(Paragraph::new(hints), chunks[1]);
}

fn render_running_game(f: &mut Frame, app: &App, area: Rect) {
    let Some(game) = app.games.current_game() else {
        return;
    };
    let lines = vec![
        Line::from(""),
        Line::styled(format!("Score: {}", app.games.score), Styles::footer()),
        Line::from(""),
        Line::styled("Ready?", Styles::header()),
        Line::from(game.kind.instructions()),
        Line::from(""),
        Line::styled(
            "p Play Sound   Enter Submit Answer   Esc Quit",
            Styles::subtitle(),
        ),
    ];
    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_focused())
                .title(Span::styled(game.name, Styles::title_focused())),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}
