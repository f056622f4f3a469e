// UI Widgets
// Reusable chrome: header, tab bar, banner, status bar, progress

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs},
    Frame,
};

use super::Styles;
use crate::accessibility::Announcer;
use crate::config::BindingConfig;
use crate::core::router::TabRoute;

/// Render the screen header: title line plus subtitle
pub fn render_header(f: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let lines = vec![
        Line::from(Span::styled(title.to_string(), Styles::header())),
        Line::from(Span::styled(subtitle.to_string(), Styles::subtitle())),
    ];
    let header = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

/// Render the bottom-tab equivalent as a tab bar
pub fn render_tab_bar(f: &mut Frame, area: Rect, active: TabRoute) {
    let titles: Vec<Line> = TabRoute::ALL
        .iter()
        .map(|t| Line::from(t.title()))
        .collect();
    let selected = TabRoute::ALL.iter().position(|t| *t == active).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Styles::tab_inactive())
        .highlight_style(Styles::tab_active());
    f.render_widget(tabs, area);
}

/// Render the most recent narration, the way a screen reader would surface it
pub fn render_announcement_banner(f: &mut Frame, area: Rect, announcer: &Announcer) {
    let text = match announcer.latest() {
        Some(latest) => format!("\u{1f50a} {latest}"),
        None => String::new(),
    };
    let banner = Paragraph::new(Span::styled(text, Styles::announcement()));
    f.render_widget(banner, area);
}

/// Render the key legend
pub fn render_status_bar(f: &mut Frame, area: Rect, bindings: &[BindingConfig]) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, binding) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(binding.key.clone(), Styles::footer()));
        spans.push(Span::raw(format!(" {}", binding.description)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render a completion gauge, e.g. "2/4 Completed Today"
pub fn render_progress(f: &mut Frame, area: Rect, completed: usize, total: usize, label: &str) {
    let ratio = if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(label.to_string()))
        .gauge_style(Styles::progress())
        .ratio(ratio)
        .label(format!("{completed}/{total}"));
    f.render_widget(gauge, area);
}
