// Title bar component
//
// App name, game state (spinner while a board is loading), and the active theme.

use crate::game::GameState;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let indicator = match app.controller.state() {
        GameState::Loading => format!(" {} fetching clues", app.spinner_char()),
        GameState::Error(_) => " ✗ load failed".to_string(),
        GameState::Ready | GameState::Idle => format!(" ● {}", app.controller.state().label()),
    };

    let title_text = format!(" ❓ Clueboard{}", indicator);

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(format!(" {} │ ? ", app.theme.name)).right_aligned()),
        );

    f.render_widget(title, area);
}
