// Board panel component
//
// Draws the grid the game controller renders into: one header cell per
// category and one bordered cell per clue. Cell text is whatever the grid
// holds (placeholder, question or answer); styling comes from the clue's
// reveal state. While loading or after a failed load the panel shows a
// centered message instead.

use crate::board::{CellPos, Showing};
use crate::game::GameState;
use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::layout::BoardLayout;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the board and remember its cell rectangles on `app`
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let message = match app.controller.state() {
        GameState::Idle => Some(("Press r to start".to_string(), app.theme.muted)),
        GameState::Loading => Some((
            format!("{} Fetching categories…", app.spinner_char()),
            app.theme.highlight,
        )),
        GameState::Error(msg) => Some((
            format!("Could not load a board\n\n{}\n\nPress r to retry", msg),
            app.theme.error,
        )),
        GameState::Ready => None,
    };

    if let Some((text, color)) = message {
        app.board_layout = BoardLayout::default();
        render_message(f, area, &text, color, &app.theme);
        return;
    }

    let layout = BoardLayout::compute(area, app.grid.columns(), app.grid.rows().len());

    for (title, rect) in app.grid.header().iter().zip(&layout.header) {
        let header = Paragraph::new(title.to_uppercase())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(
                Style::default()
                    .fg(app.theme.header)
                    .bg(app.theme.board_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .block(cell_block(&app.theme, app.theme.border));
        f.render_widget(header, *rect);
    }

    for (pos, rect) in &layout.cells {
        let Some(text) = app.grid.cell(*pos) else {
            continue;
        };
        let selected = *pos == app.cursor;
        let style = cell_style(app, *pos);
        let border = if selected {
            app.theme.cursor
        } else {
            app.theme.border
        };

        let cell = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(style)
            .block(cell_block(&app.theme, border));
        f.render_widget(cell, *rect);
    }

    app.board_layout = layout;
}

fn cell_block(theme: &Theme, border: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border))
}

/// Style a body cell from the reveal state of the clue behind it
fn cell_style(app: &App, pos: CellPos) -> Style {
    let theme = &app.theme;
    let base = Style::default().bg(theme.board_bg);

    let showing = app
        .controller
        .board()
        .and_then(|board| board.clue(pos))
        .map(|clue| clue.showing());

    let style = match showing {
        Some(Showing::Unrevealed) => base.fg(theme.placeholder).add_modifier(Modifier::BOLD),
        Some(Showing::Question) => base.fg(theme.question),
        Some(Showing::Answer) => base.fg(theme.answer).add_modifier(Modifier::ITALIC),
        None => base.fg(theme.stale),
    };

    if pos == app.cursor {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

fn render_message(f: &mut Frame, area: Rect, text: &str, color: Color, theme: &Theme) {
    // Vertically center the message block
    let lines: Vec<Line> = text.lines().map(Line::from).collect();
    let top_pad = area.height.saturating_sub(lines.len() as u16 + 2) / 2;
    let padded: Vec<Line> = std::iter::repeat(Line::from(""))
        .take(top_pad as usize)
        .chain(lines)
        .collect();

    let paragraph = Paragraph::new(padded)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border)),
        );

    f.render_widget(paragraph, area);
}
