// UI Styles
// Color schemes and styling for the TUI

use ratatui::style::{Color, Modifier, Style};

use crate::data::model::DisplayDescriptor;

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Header / Footer ===

    pub fn header() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn footer() -> Style {
        Style::default().fg(Color::Yellow)
    }

    // === Tab Bar ===

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    // === List Items ===

    pub fn list_selected() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn list_normal() -> Style {
        Style::default()
    }

    /// Completed activities render struck through
    pub fn completed() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    // === Status Colors ===

    pub fn available() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn busy() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn sos() -> Style {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD)
    }

    pub fn active_flag() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn inactive_flag() -> Style {
        Style::default().fg(Color::Gray)
    }

    // === Announcement Banner ===

    pub fn announcement() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::ITALIC)
    }

    // === Progress ===

    pub fn progress() -> Style {
        Style::default().fg(Color::Blue)
    }

    // === Borders ===

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_unfocused() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_focused() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    /// Accent style for a category/kind descriptor
    pub fn accent(descriptor: DisplayDescriptor) -> Style {
        let (r, g, b) = descriptor.rgb;
        Style::default().fg(Color::Rgb(r, g, b))
    }

    /// Highlight style for a flashing phrase selection
    pub fn accent_selected(descriptor: DisplayDescriptor) -> Style {
        let (r, g, b) = descriptor.rgb;
        Style::default()
            .bg(Color::Rgb(r, g, b))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }
}
