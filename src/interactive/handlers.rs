use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::{App, AppServices};
use super::event::{Event, EventHandler};
use super::keys::map_key;
use crate::backend::Osc52Clipboard;
use crate::config::Config;
use crate::constants::TICK_RATE_MS;
use crate::error::{DevCircleError, DevCircleResult};
use crate::logging::{log_debug, log_error, log_info, log_panic_info};
use crate::router::Route;

type Term = Terminal<CrosstermBackend<Stdout>>;

pub async fn run_interactive_mode(config: Config, start: Route) -> DevCircleResult<()> {
    log_info(&format!("Starting interactive mode at {}", start));

    let mut terminal = setup_terminal()?;
    install_panic_hook();
    log_debug("Terminal initialized");

    let services = AppServices::mock(config, Arc::new(Osc52Clipboard));
    let (mut app, initial_task) = App::new(services, start);

    let result = event_loop(&mut terminal, &mut app, initial_task).await;

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log_error(&format!("Interactive mode failed: {}", e));
    }
    log_info("Interactive mode finished");
    result
}

async fn event_loop(
    terminal: &mut Term,
    app: &mut App,
    initial_task: Option<super::app::Task>,
) -> DevCircleResult<()> {
    let events = EventHandler::new(Duration::from_millis(TICK_RATE_MS));
    let mut pending = initial_task;

    loop {
        terminal
            .draw(|f| super::ui::draw(f, app))
            .map_err(|e| DevCircleError::TerminalError(e.to_string()))?;

        // The frame above shows the loading state; now do the work
        if let Some(task) = pending.take() {
            app.run_task(task).await;
            continue;
        }

        match events.recv() {
            Ok(Event::Key(key)) => {
                let context = app.key_context();
                let action = map_key(key, context);
                log_debug(&format!("Key {:?} in {:?} -> {:?}", key.code, context, action));
                pending = app.handle_action(action);
            }
            Ok(Event::Resize) => {}
            Ok(Event::Tick) => app.tick(Instant::now()),
            Err(e) => {
                return Err(DevCircleError::TerminalError(format!("Event channel closed: {}", e)));
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn setup_terminal() -> DevCircleResult<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal() -> DevCircleResult<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Leave the alternate screen before the default hook prints, so the panic
/// message is readable, and record it in the log file.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        log_panic_info(info);
        default_hook(info);
    }));
}
