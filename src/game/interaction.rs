//! Cell activation: advance one clue and patch its cell

use crate::board::{Board, CellPos, Showing};
use crate::render::RenderTarget;

/// Text written into a cell whose clue cannot be found
pub const STALE_CELL_MESSAGE: &str = "Unable to retrieve clue.";

/// What an activation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The question is now showing
    Question,
    /// The answer is now showing
    Answer,
    /// The answer was already showing; nothing changed
    Ignored,
    /// No clue backs this cell (no board, or the index is out of range)
    Stale,
}

/// Advance the clue at `pos` and update exactly that cell
pub fn on_cell_activate(
    board: Option<&mut Board>,
    pos: CellPos,
    target: &mut dyn RenderTarget,
) -> Activation {
    let Some(clue) = board.and_then(|b| b.clue_mut(pos)) else {
        tracing::warn!("Activation of cell {} has no backing clue", pos);
        target.update_cell(pos, STALE_CELL_MESSAGE);
        return Activation::Stale;
    };

    let before = clue.showing();
    match clue.advance() {
        Some(text) => {
            target.update_cell(pos, text);
            tracing::debug!("Cell {}: {} -> {}", pos, before.as_str(), clue.showing().as_str());
            match before {
                Showing::Unrevealed => Activation::Question,
                _ => Activation::Answer,
            }
        }
        None => Activation::Ignored,
    }
}
