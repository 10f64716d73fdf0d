// TUI module - Terminal User Interface
//
// Sets up the terminal, runs the event loop and restores the terminal on
// exit. The loop waits on three sources at once: keyboard/mouse input, a
// redraw tick, and finished board loads coming back from background tasks.

pub mod app;
pub mod components;
pub mod layout;
pub mod ui;

use crate::api::TriviaClient;
use crate::game::LoadPlan;
use crate::logging::LogBuffer;
use crate::theme::Theme;
use anyhow::{Context, Result};
use app::{App, Direction, LoadMsg};
use components::Toast;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const HELP_TEXT: &str = "←↑↓→/hjkl move · Enter/click reveal · r new board · L logs · q quit";

/// Everything the TUI needs from startup
pub struct TuiOptions {
    pub client: Arc<TriviaClient>,
    pub plan: LoadPlan,
    pub placeholder: String,
    pub theme: Theme,
}

/// Run the TUI until the user quits
pub async fn run_tui(options: TuiOptions, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (load_tx, mut load_rx) = mpsc::channel(4);
    let mut app = App::new(
        options.client,
        options.plan,
        &options.placeholder,
        options.theme,
        log_buffer,
        load_tx,
    );
    app.restart();

    let result = run_event_loop(&mut terminal, &mut app, &mut load_rx).await;

    // Restore the terminal even when the loop failed
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    load_rx: &mut mpsc::Receiver<LoadMsg>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(msg) = load_rx.recv() => {
                app.finish_load(msg);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate_selected();
        }
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('L') => app.toggle_logs(),
        KeyCode::Char('?') => {
            app.toast = Some(Toast::new(HELP_TEXT).lasting(Duration::from_secs(5)));
        }
        _ => {}
    }
}

/// Handle mouse input: left click activates the cell under the pointer
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
        if let Some(pos) = app.board_layout.hit_test(mouse_event.column, mouse_event.row) {
            app.activate(pos);
        }
    }
}
