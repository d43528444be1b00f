//! Terminal UI — main entry point and event loop.

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;
pub mod widgets;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{poll as ct_poll, read as ct_read, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::{self, Config};
use crate::model::composition::Composition;
use crate::submit::{HttpTransport, SubmissionPipeline};

use self::app::App;

/// Run the TUI composer. Blocks until the user quits.
pub fn run_tui(config: &Config, endpoint: &str) -> anyhow::Result<()> {
    theme::set_theme(&config.display.theme);

    let transport = HttpTransport::new(
        endpoint,
        Duration::from_secs(config.backend.timeout_secs),
    )?;
    let pipeline = SubmissionPipeline::new(Arc::new(transport));
    let composition = Composition::new(config::preview_dir(config));
    let app = App::new(
        composition,
        pipeline,
        endpoint.to_string(),
        config.display.show_preview,
    );

    // Setup terminal (alternate screen)
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the event loop
    let result = run_event_loop(&mut terminal, app);

    // Restore terminal (always, even on error)
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main event loop: render → poll → handle → repeat.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        // Render
        terminal.draw(|frame| {
            ui::render(frame, &mut app);
        })?;

        // Poll for events
        if ct_poll(tick_rate)? {
            if let Event::Key(key) = ct_read()? {
                event::handle_key_event(&mut app, key)?;
            }
        }

        // Periodic housekeeping: drains the in-flight submission outcome
        // and expires transient notices.
        app.tick();

        if app.should_quit {
            break;
        }
    }

    // A submission still in flight keeps running on its worker thread; its
    // resolution lands in a disconnected channel, which is the safe no-op
    // the lifecycle requires.
    Ok(())
}
