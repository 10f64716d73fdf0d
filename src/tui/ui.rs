// UI rendering logic
//
// Called on every frame. Vertical stack:
// - Title bar (3 lines)
// - Board (fills remaining space)
// - Logs strip (optional, toggled with L)
// - Status bar (2 lines)
// Toasts draw last, over everything.

use super::app::App;
use super::components::{board_panel, logs_panel, status_bar, title_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

/// Main UI render function
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );

    let logs_height = if app.show_logs {
        logs_panel::LOGS_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Title bar
            Constraint::Min(8),              // Board
            Constraint::Length(logs_height), // Logs strip
            Constraint::Length(2),           // Status bar
        ])
        .split(area);

    title_bar::render(f, chunks[0], app);
    board_panel::render(f, chunks[1], app);
    if app.show_logs {
        logs_panel::render(f, chunks[2], app);
    }
    status_bar::render(f, chunks[3], app);

    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::FakeSource;
    use crate::api::TriviaClient;
    use crate::game::LoadPlan;
    use crate::logging::LogBuffer;
    use crate::render::DEFAULT_PLACEHOLDER;
    use crate::theme::Theme;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn draws_board_and_records_cell_layout() {
        let (tx, mut rx) = mpsc::channel(1);
        let client = Arc::new(TriviaClient::new(
            Arc::new(FakeSource::with_categories(20, 5)),
            100,
            5,
            Some(9),
        ));
        let plan = LoadPlan {
            categories: 6,
            concurrent: false,
        };
        let mut app = App::new(
            client,
            plan,
            DEFAULT_PLACEHOLDER,
            Theme::mono(),
            LogBuffer::new(),
            tx,
        );
        app.restart();
        let msg = rx.recv().await.unwrap();
        app.finish_load(msg);

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Clueboard"));
        assert!(text.contains("CAT "));
        assert!(text.contains("board #1"));
        assert_eq!(app.board_layout.cells.len(), 30);
    }
}
