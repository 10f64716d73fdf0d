// Board rendering
//
// The renderer only talks to a `RenderTarget`, never to a terminal directly.
// Front ends (TUI, headless) and tests all draw into a `GridView` and present
// it however they like.

mod grid;

pub use grid::GridView;

use crate::board::{Board, CellPos};

/// Glyph shown in a cell before its clue is revealed
pub const DEFAULT_PLACEHOLDER: &str = "?";

/// Something a board can be drawn into
///
/// Body cells are keyed by their board position so later updates can patch a
/// single cell without redrawing the grid.
pub trait RenderTarget {
    fn clear_header(&mut self);
    fn append_header_cell(&mut self, title: &str);
    fn clear_body(&mut self);
    fn append_body_cell(&mut self, pos: CellPos, text: &str);

    /// Replace the text of one existing cell. Returns false if no such cell is drawn.
    fn update_cell(&mut self, pos: CellPos, text: &str) -> bool;
}

/// Rebuild the whole grid from a board snapshot
///
/// Header: one cell per category title, in board order. Body: one row per clue
/// index, one column per category, every cell masked with `placeholder`.
pub fn draw_board(board: &Board, target: &mut dyn RenderTarget, placeholder: &str) {
    target.clear_header();
    for category in board.categories() {
        target.append_header_cell(&category.title);
    }

    target.clear_body();
    for clue in 0..board.rows() {
        for (category, column) in board.categories().iter().enumerate() {
            if clue < column.clues.len() {
                target.append_body_cell(CellPos::new(category, clue), placeholder);
            }
        }
    }

    tracing::debug!(
        "Drew board: {} categories x {} rows",
        board.categories().len(),
        board.rows()
    );
}

/// Wipe both grid regions (used while a new board is loading)
pub fn clear_board(target: &mut dyn RenderTarget) {
    target.clear_header();
    target.clear_body();
}
