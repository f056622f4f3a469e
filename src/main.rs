// AccessCare
// TUI application providing an accessibility assistance hub

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use accesscare::accessibility::{NullBackend, SpeechBackend};
use accesscare::config_validation::load_and_validate_config;
use accesscare::core::{App, EventHandler};
use accesscare::render;

fn main() -> Result<()> {
    init_logging()?;

    // Load and validate configuration from YAML file
    let config = load_and_validate_config(None)?;
    let mut app = App::new(config);

    // The assistive-technology engine is an external collaborator; narration
    // surfaces in the banner and is discarded here.
    let mut speech = NullBackend;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &mut speech);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Main loop: tick scheduled tasks, flush narration, draw, handle events
fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    speech: &mut dyn SpeechBackend,
) -> Result<()> {
    loop {
        app.tick(Instant::now());
        app.announcer.flush(speech);

        terminal.draw(|f| render::render(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            let app_event = EventHandler::handle(event::read()?, app.text_entry_active());
            app.apply(app_event);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

/// Write logs to the file named by ACCESSCARE_LOG; stdout belongs to the
/// alternate screen
fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var("ACCESSCARE_LOG") else {
        return Ok(());
    };
    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
