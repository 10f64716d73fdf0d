//! In-memory grid render target

use super::RenderTarget;
use crate::board::CellPos;
use crate::util::truncate_to_width;
use unicode_width::UnicodeWidthStr;

/// Grid of header titles and body cells
///
/// Rows are clue indices, columns are category indices. A `None` cell is a
/// hole that was never appended (only possible with ragged boards).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridView {
    header: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl GridView {
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Number of columns (the wider of the header and any body row)
    pub fn columns(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }

    pub fn cell(&self, pos: CellPos) -> Option<&str> {
        self.rows.get(pos.clue)?.get(pos.category)?.as_deref()
    }

    #[cfg(test)]
    pub fn cell_count(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Positions of all drawn body cells, row by row
    #[cfg(test)]
    pub fn positions(&self) -> Vec<CellPos> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(clue, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.is_some())
                    .map(move |(category, _)| CellPos::new(category, clue))
            })
            .collect()
    }

    /// Plain-text table with every column at most `col_width` wide
    pub fn to_text_table(&self, col_width: usize) -> String {
        let columns = self.columns();
        if columns == 0 {
            return String::from("(empty board)\n");
        }

        let pad = |text: &str| {
            let cut = truncate_to_width(text, col_width);
            let fill = col_width.saturating_sub(cut.width());
            format!(" {}{} ", cut, " ".repeat(fill))
        };
        let separator = format!(
            "+{}+\n",
            vec!["-".repeat(col_width + 2); columns].join("+")
        );

        let mut out = String::new();
        out.push_str(&separator);

        let header: Vec<String> = (0..columns)
            .map(|c| pad(self.header.get(c).map(String::as_str).unwrap_or("")))
            .collect();
        out.push_str(&format!("|{}|\n", header.join("|")));
        out.push_str(&separator);

        for row in &self.rows {
            let cells: Vec<String> = (0..columns)
                .map(|c| pad(row.get(c).and_then(|cell| cell.as_deref()).unwrap_or("")))
                .collect();
            out.push_str(&format!("|{}|\n", cells.join("|")));
        }
        out.push_str(&separator);
        out
    }
}

impl RenderTarget for GridView {
    fn clear_header(&mut self) {
        self.header.clear();
    }

    fn append_header_cell(&mut self, title: &str) {
        self.header.push(title.to_string());
    }

    fn clear_body(&mut self) {
        self.rows.clear();
    }

    fn append_body_cell(&mut self, pos: CellPos, text: &str) {
        if self.rows.len() <= pos.clue {
            self.rows.resize_with(pos.clue + 1, Vec::new);
        }
        let row = &mut self.rows[pos.clue];
        if row.len() <= pos.category {
            row.resize(pos.category + 1, None);
        }
        row[pos.category] = Some(text.to_string());
    }

    fn update_cell(&mut self, pos: CellPos, text: &str) -> bool {
        match self
            .rows
            .get_mut(pos.clue)
            .and_then(|row| row.get_mut(pos.category))
        {
            Some(Some(cell)) => {
                *cell = text.to_string();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> GridView {
        let mut grid = GridView::default();
        grid.append_header_cell("Math");
        grid.append_header_cell("Literature");
        for clue in 0..2 {
            for category in 0..2 {
                grid.append_body_cell(CellPos::new(category, clue), "?");
            }
        }
        grid
    }

    #[test]
    fn update_only_touches_one_cell() {
        let mut grid = two_by_two();
        let before = grid.clone();

        assert!(grid.update_cell(CellPos::new(1, 0), "Hamlet author"));

        for pos in grid.positions() {
            if pos == CellPos::new(1, 0) {
                assert_eq!(grid.cell(pos), Some("Hamlet author"));
            } else {
                assert_eq!(grid.cell(pos), before.cell(pos));
            }
        }
    }

    #[test]
    fn update_missing_cell_is_rejected() {
        let mut grid = two_by_two();
        let before = grid.clone();

        assert!(!grid.update_cell(CellPos::new(5, 5), "nope"));
        assert_eq!(grid, before);
    }

    #[test]
    fn out_of_order_append_leaves_holes() {
        let mut grid = GridView::default();
        grid.append_body_cell(CellPos::new(2, 1), "x");

        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.cell_count(), 1);
        assert_eq!(grid.cell(CellPos::new(0, 1)), None);
        assert_eq!(grid.positions(), vec![CellPos::new(2, 1)]);
    }

    #[test]
    fn text_table_layout() {
        let grid = two_by_two();

        let table = grid.to_text_table(6);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "+--------+--------+");
        assert_eq!(lines[1], "| Math   | Liter… |");
        assert_eq!(lines[3], "| ?      | ?      |");
    }

    #[test]
    fn empty_table() {
        assert_eq!(GridView::default().to_text_table(10), "(empty board)\n");
    }
}
