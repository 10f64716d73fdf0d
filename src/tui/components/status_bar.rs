// Status bar component
//
// Game state, reveal progress, session number, uptime and key hints.

use crate::game::GameState;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build the status line for a given width
pub fn status_text(app: &App, width: u16) -> String {
    let bp = Breakpoint::from_width(width);
    let state = app.controller.state();

    let progress = match app.controller.board() {
        Some(board) => format!("{}/{}", board.revealed(), board.total_clues()),
        None => "-".to_string(),
    };

    if !bp.at_least(Breakpoint::Normal) {
        return format!(" {} │ {} │ #{}", state.label(), progress, app.sessions_started);
    }

    let state_text = match state {
        GameState::Error(msg) if bp.at_least(Breakpoint::Wide) => format!("error: {}", msg),
        other => other.label().to_string(),
    };

    format!(
        " {} │ revealed {} │ board #{} │ {} │ ←↑↓→ move  ⏎ reveal  r new  L logs  q quit",
        state_text,
        progress,
        app.sessions_started,
        app.uptime(),
    )
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let color = match app.controller.state() {
        GameState::Error(_) => app.theme.error,
        _ => app.theme.muted,
    };

    let status = Paragraph::new(status_text(app, area.width))
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(app.theme.border)),
        );

    f.render_widget(status, area);
}
