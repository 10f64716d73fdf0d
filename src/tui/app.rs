// TUI application state
//
// Owns the game controller and the grid it renders into, plus the UI-only
// state around it: cursor, toast, log strip toggle, animation frame. Board
// loads run on spawned tasks and report back over a channel; the event loop
// hands each result to `App::finish_load`.

use super::components::Toast;
use super::layout::BoardLayout;
use crate::api::{ApiError, TriviaClient};
use crate::board::{Board, CellPos};
use crate::game::{self, Activation, GameController, GameState, LoadCompletion, LoadPlan};
use crate::logging::LogBuffer;
use crate::render::GridView;
use crate::theme::Theme;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Result of a background board load, tagged with the load that started it
#[derive(Debug)]
pub struct LoadMsg {
    pub generation: u64,
    pub result: Result<Board, ApiError>,
}

/// Cursor movement on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Main application state for the TUI
pub struct App {
    pub controller: GameController,

    /// What the board panel draws
    pub grid: GridView,

    /// Selected cell
    pub cursor: CellPos,

    /// Cell rectangles from the last frame, for mouse hit-testing
    pub board_layout: BoardLayout,

    pub theme: Theme,
    pub log_buffer: LogBuffer,
    pub toast: Option<Toast>,
    pub show_logs: bool,
    pub should_quit: bool,

    /// Boards started this run (first board is session 1)
    pub sessions_started: u64,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    animation_frame: usize,
    client: Arc<TriviaClient>,
    plan: LoadPlan,
    load_tx: mpsc::Sender<LoadMsg>,
}

impl App {
    pub fn new(
        client: Arc<TriviaClient>,
        plan: LoadPlan,
        placeholder: &str,
        theme: Theme,
        log_buffer: LogBuffer,
        load_tx: mpsc::Sender<LoadMsg>,
    ) -> Self {
        Self {
            controller: GameController::new(placeholder),
            grid: GridView::default(),
            cursor: CellPos::default(),
            board_layout: BoardLayout::default(),
            theme,
            log_buffer,
            toast: None,
            show_logs: false,
            should_quit: false,
            sessions_started: 0,
            start_time: Instant::now(),
            animation_frame: 0,
            client,
            plan,
            load_tx,
        }
    }

    /// Start a new board, replacing the current one.
    ///
    /// The grid is wiped immediately; the board arrives later through
    /// `finish_load`. Must be called inside a tokio runtime.
    pub fn restart(&mut self) {
        let generation = self.controller.begin_load(&mut self.grid);
        self.sessions_started += 1;
        self.cursor = CellPos::default();

        let client = Arc::clone(&self.client);
        let plan = self.plan;
        let tx = self.load_tx.clone();
        tokio::spawn(async move {
            let result = game::load_board(&client, plan).await;
            // Receiver gone means the UI has shut down
            let _ = tx.send(LoadMsg { generation, result }).await;
        });
    }

    /// Apply a finished background load
    pub fn finish_load(&mut self, msg: LoadMsg) {
        match self.controller.complete_load(msg.generation, msg.result, &mut self.grid) {
            LoadCompletion::Applied => self.clamp_cursor(),
            LoadCompletion::Failed(e) => {
                let hint = if e.is_network() {
                    "✗ Network error, press r to retry"
                } else {
                    "✗ Could not build a board, press r to retry"
                };
                self.show_toast(hint);
            }
            LoadCompletion::Stale => {}
        }
    }

    /// Activate the cell under the cursor
    pub fn activate_selected(&mut self) -> Activation {
        self.activate(self.cursor)
    }

    /// Activate a specific cell (mouse clicks land here)
    pub fn activate(&mut self, pos: CellPos) -> Activation {
        if self.controller.state() != &GameState::Ready {
            return Activation::Ignored;
        }

        self.cursor = pos;
        let outcome = self.controller.activate(pos, &mut self.grid);
        if outcome == Activation::Answer
            && self.controller.board().is_some_and(Board::is_finished)
        {
            self.show_toast("Board cleared! Press r for a new one");
        }
        outcome
    }

    /// Move the cursor, stopping at the board edges
    pub fn move_cursor(&mut self, direction: Direction) {
        let columns = self.grid.columns();
        let rows = self.grid.rows().len();
        if columns == 0 || rows == 0 {
            return;
        }

        let CellPos { category, clue } = self.cursor;
        self.cursor = match direction {
            Direction::Up => CellPos::new(category, clue.saturating_sub(1)),
            Direction::Down => CellPos::new(category, (clue + 1).min(rows - 1)),
            Direction::Left => CellPos::new(category.saturating_sub(1), clue),
            Direction::Right => CellPos::new((category + 1).min(columns - 1), clue),
        };
    }

    fn clamp_cursor(&mut self) {
        let columns = self.grid.columns().max(1);
        let rows = self.grid.rows().len().max(1);
        self.cursor = CellPos::new(
            self.cursor.category.min(columns - 1),
            self.cursor.clue.min(rows - 1),
        );
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    /// Show a toast notification (auto-dismisses after 2 seconds)
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Advance the spinner and drop an expired toast
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    /// Time since launch as HH:MM:SS
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::FakeSource;
    use crate::render::DEFAULT_PLACEHOLDER;

    fn app_with(source: FakeSource) -> (App, mpsc::Receiver<LoadMsg>) {
        let (tx, rx) = mpsc::channel(4);
        let client = Arc::new(TriviaClient::new(Arc::new(source), 100, 5, Some(1)));
        let plan = LoadPlan {
            categories: 6,
            concurrent: true,
        };
        let app = App::new(
            client,
            plan,
            DEFAULT_PLACEHOLDER,
            Theme::default(),
            LogBuffer::new(),
            tx,
        );
        (app, rx)
    }

    async fn loaded_app() -> App {
        let (mut app, mut rx) = app_with(FakeSource::with_categories(50, 5));
        app.restart();
        let msg = rx.recv().await.unwrap();
        app.finish_load(msg);
        app
    }

    #[tokio::test]
    async fn restart_loads_in_background() {
        let (mut app, mut rx) = app_with(FakeSource::with_categories(50, 5));

        app.restart();
        assert_eq!(app.controller.state(), &GameState::Loading);
        assert!(app.grid.is_empty());
        assert_eq!(app.sessions_started, 1);

        let msg = rx.recv().await.unwrap();
        app.finish_load(msg);

        assert_eq!(app.controller.state(), &GameState::Ready);
        assert_eq!(app.grid.cell_count(), 30);
    }

    #[tokio::test]
    async fn superseded_load_result_is_ignored() {
        let (mut app, mut rx) = app_with(FakeSource::with_categories(50, 5));

        app.restart();
        app.restart();
        let mut msgs = vec![rx.recv().await.unwrap(), rx.recv().await.unwrap()];
        msgs.sort_by_key(|m| m.generation);
        let newest = msgs.pop().unwrap();
        let older = msgs.pop().unwrap();

        app.finish_load(older);
        assert_eq!(app.controller.state(), &GameState::Loading);
        app.finish_load(newest);
        assert_eq!(app.controller.state(), &GameState::Ready);
        assert_eq!(app.controller.generation(), 2);
    }

    #[tokio::test]
    async fn failed_load_shows_retry_toast() {
        let (mut app, mut rx) = app_with(FakeSource {
            fail_listing: true,
            ..FakeSource::with_categories(10, 5)
        });

        app.restart();
        let msg = rx.recv().await.unwrap();
        app.finish_load(msg);

        assert!(matches!(app.controller.state(), GameState::Error(_)));
        let toast = app.toast.as_ref().unwrap();
        assert!(toast.message.contains("retry"));
    }

    #[tokio::test]
    async fn cursor_stops_at_edges() {
        let mut app = loaded_app().await;

        app.move_cursor(Direction::Up);
        app.move_cursor(Direction::Left);
        assert_eq!(app.cursor, CellPos::new(0, 0));

        for _ in 0..10 {
            app.move_cursor(Direction::Right);
            app.move_cursor(Direction::Down);
        }
        assert_eq!(app.cursor, CellPos::new(5, 4));
    }

    #[tokio::test]
    async fn activating_selected_cell_reveals_it() {
        let mut app = loaded_app().await;
        app.move_cursor(Direction::Right);
        let pos = app.cursor;

        assert_eq!(app.activate_selected(), Activation::Question);
        let question = app.controller.board().unwrap().clue(pos).unwrap().question.clone();
        assert_eq!(app.grid.cell(pos), Some(question.as_str()));

        assert_eq!(app.activate_selected(), Activation::Answer);
        assert_eq!(app.activate_selected(), Activation::Ignored);
    }

    #[tokio::test]
    async fn clearing_board_announces_it() {
        let mut app = loaded_app().await;

        for pos in app.grid.positions() {
            app.activate(pos);
            app.activate(pos);
        }

        assert!(app.controller.board().unwrap().is_finished());
        assert!(app.toast.as_ref().unwrap().message.contains("cleared"));
    }

    #[test]
    fn activation_while_loading_is_ignored() {
        let (mut app, _rx) = app_with(FakeSource::default());

        assert_eq!(app.activate(CellPos::new(0, 0)), Activation::Ignored);
        assert!(app.grid.is_empty());
    }

    #[test]
    fn spinner_cycles() {
        let (mut app, _rx) = app_with(FakeSource::default());
        let first = app.spinner_char();
        for _ in 0..4 {
            app.tick_animation();
        }
        assert_eq!(app.spinner_char(), first);
        app.tick_animation();
        assert_ne!(app.spinner_char(), first);
    }
}
