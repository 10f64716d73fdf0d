// Board model - the categories and clues of one game session
//
// The board is a plain ordered sequence of categories. Cells are addressed
// positionally by (category, clue); nothing here is a stable identifier, so a
// restart replaces the whole board instead of patching it.

use std::fmt;
use std::str::FromStr;

/// Reveal progress of a single clue
///
/// Transitions only move forward: Unrevealed → Question → Answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Showing {
    #[default]
    Unrevealed,
    Question,
    Answer,
}

impl Showing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Showing::Unrevealed => "unrevealed",
            Showing::Question => "question",
            Showing::Answer => "answer",
        }
    }
}

/// One question/answer pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    pub question: String,
    pub answer: String,
    showing: Showing,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: Showing::Unrevealed,
        }
    }

    pub fn showing(&self) -> Showing {
        self.showing
    }

    /// Move to the next reveal state and return the text the cell should now show.
    ///
    /// Returns `None` once the answer is already showing; the clue is left untouched.
    pub fn advance(&mut self) -> Option<&str> {
        match self.showing {
            Showing::Unrevealed => {
                self.showing = Showing::Question;
                Some(self.question.as_str())
            }
            Showing::Question => {
                self.showing = Showing::Answer;
                Some(self.answer.as_str())
            }
            Showing::Answer => None,
        }
    }
}

/// A named column of clues
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub title: String,
    pub clues: Vec<Clue>,
}

/// Position of a cell on the board
///
/// Formatted as `"{category}-{clue}"`, which is also what `FromStr` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CellPos {
    pub category: usize,
    pub clue: usize,
}

impl CellPos {
    pub fn new(category: usize, clue: usize) -> Self {
        Self { category, clue }
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.clue)
    }
}

impl FromStr for CellPos {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, clue) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("expected <category>-<clue>, got {:?}", s))?;

        let category = category
            .parse()
            .map_err(|_| format!("invalid category index {:?}", category))?;
        let clue = clue
            .parse()
            .map_err(|_| format!("invalid clue index {:?}", clue))?;

        Ok(Self { category, clue })
    }
}

/// The full board for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_categories(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn push(&mut self, category: Category) {
        self.categories.push(category);
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of body rows: the longest clue column
    pub fn rows(&self) -> usize {
        self.categories
            .iter()
            .map(|c| c.clues.len())
            .max()
            .unwrap_or(0)
    }

    pub fn clue(&self, pos: CellPos) -> Option<&Clue> {
        self.categories.get(pos.category)?.clues.get(pos.clue)
    }

    pub fn clue_mut(&mut self, pos: CellPos) -> Option<&mut Clue> {
        self.categories
            .get_mut(pos.category)?
            .clues
            .get_mut(pos.clue)
    }

    pub fn total_clues(&self) -> usize {
        self.categories.iter().map(|c| c.clues.len()).sum()
    }

    /// Count of clues that have shown at least their question
    pub fn revealed(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|c| &c.clues)
            .filter(|clue| clue.showing() != Showing::Unrevealed)
            .count()
    }

    /// Whether every clue has reached its answer
    pub fn is_finished(&self) -> bool {
        !self.is_empty()
            && self
                .categories
                .iter()
                .flat_map(|c| &c.clues)
                .all(|clue| clue.showing() == Showing::Answer)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a board of `categories` × `clues` with predictable text
    pub(crate) fn sample_board(categories: usize, clues: usize) -> Board {
        Board::from_categories(
            (0..categories)
                .map(|c| Category {
                    title: format!("Category {}", c),
                    clues: (0..clues)
                        .map(|q| Clue::new(format!("Q{}-{}", c, q), format!("A{}-{}", c, q)))
                        .collect(),
                })
                .collect(),
        )
    }

    #[test]
    fn advance_is_monotonic() {
        let mut clue = Clue::new("2+2", "4");
        assert_eq!(clue.showing(), Showing::Unrevealed);

        assert_eq!(clue.advance(), Some("2+2"));
        assert_eq!(clue.showing(), Showing::Question);

        assert_eq!(clue.advance(), Some("4"));
        assert_eq!(clue.showing(), Showing::Answer);

        for _ in 0..3 {
            assert_eq!(clue.advance(), None);
            assert_eq!(clue.showing(), Showing::Answer);
        }
    }

    #[test]
    fn cell_pos_parses_and_formats() {
        let pos: CellPos = "2-3".parse().unwrap();
        assert_eq!(pos, CellPos::new(2, 3));
        assert_eq!(pos.to_string(), "2-3");

        assert!("2".parse::<CellPos>().is_err());
        assert!("a-1".parse::<CellPos>().is_err());
        assert!("1-".parse::<CellPos>().is_err());
    }

    #[test]
    fn lookup_out_of_range_is_none() {
        let board = sample_board(6, 5);
        assert!(board.clue(CellPos::new(5, 4)).is_some());
        assert!(board.clue(CellPos::new(6, 0)).is_none());
        assert!(board.clue(CellPos::new(0, 5)).is_none());
    }

    #[test]
    fn progress_counters() {
        let mut board = sample_board(2, 2);
        assert_eq!(board.total_clues(), 4);
        assert_eq!(board.revealed(), 0);
        assert!(!board.is_finished());

        for c in 0..2 {
            for q in 0..2 {
                let clue = board.clue_mut(CellPos::new(c, q)).unwrap();
                clue.advance();
                clue.advance();
            }
        }

        assert_eq!(board.revealed(), 4);
        assert!(board.is_finished());
    }

    #[test]
    fn empty_board_is_not_finished() {
        assert!(!Board::new().is_finished());
        assert_eq!(Board::new().rows(), 0);
    }
}
