// UI module
// Styles and reusable widgets for the TUI

pub mod styles;
pub mod widgets;

pub use styles::Styles;
pub use widgets::{
    render_announcement_banner, render_header, render_progress, render_status_bar, render_tab_bar,
};
