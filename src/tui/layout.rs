//! Screen geometry for the TUI.
//!
//! Width breakpoints and the board grid's cell rectangles live here so the
//! renderer and the mouse hit-test agree on where every cell is.

use crate::board::CellPos;
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: icons only in the status bar, short titles
    Compact,
    /// 60-119 cols
    Normal,
    /// 120+ cols
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=119 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }
}

/// Height of the category header row, borders included
pub const HEADER_HEIGHT: u16 = 3;

/// Cell rectangles for one frame of the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardLayout {
    pub header: Vec<Rect>,
    pub cells: Vec<(CellPos, Rect)>,
}

impl BoardLayout {
    /// Split `area` into `columns` equal columns and a header row over
    /// `rows` equal body rows. Leftover width/height goes to the last
    /// column/row so the grid always fills the panel.
    pub fn compute(area: Rect, columns: usize, rows: usize) -> Self {
        if columns == 0 || area.width == 0 || area.height <= HEADER_HEIGHT {
            return Self::default();
        }

        let xs = split(area.x, area.width, columns);
        let header = xs
            .iter()
            .map(|&(x, w)| Rect::new(x, area.y, w, HEADER_HEIGHT))
            .collect();

        let body_y = area.y + HEADER_HEIGHT;
        let body_height = area.height - HEADER_HEIGHT;
        let cells = if rows == 0 {
            Vec::new()
        } else {
            let ys = split(body_y, body_height, rows);
            ys.iter()
                .enumerate()
                .flat_map(|(clue, &(y, h))| {
                    xs.iter().enumerate().map(move |(category, &(x, w))| {
                        (CellPos::new(category, clue), Rect::new(x, y, w, h))
                    })
                })
                .filter(|(_, rect)| rect.width > 0 && rect.height > 0)
                .collect()
        };

        Self { header, cells }
    }

    /// Cell under a terminal coordinate
    pub fn hit_test(&self, column: u16, row: u16) -> Option<CellPos> {
        self.cells
            .iter()
            .find(|(_, rect)| {
                column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
            })
            .map(|(pos, _)| *pos)
    }
}

/// Split a span into `parts` (offset, length) pieces
fn split(start: u16, length: u16, parts: usize) -> Vec<(u16, u16)> {
    let parts_u16 = parts.min(u16::MAX as usize) as u16;
    let base = length / parts_u16;
    let extra = length - base * parts_u16;

    (0..parts_u16)
        .map(|i| {
            let len = if i + 1 == parts_u16 { base + extra } else { base };
            (start + i * base, len)
        })
        .collect()
}
