// Game controller - session lifecycle and board loading
//
// State machine:
//
//   Idle ──begin_load──▶ Loading ──ok──▶ Ready
//                          │  ▲            │
//                        err  └─restart────┘
//                          ▼  │
//                         Error
//
// Every load carries a generation number. Starting a new load bumps the
// generation, so a slower, superseded load finishing late is dropped instead of
// overwriting the board the user is looking at.

pub mod interaction;

pub use interaction::{on_cell_activate, Activation};

use crate::api::{ApiError, TriviaClient};
use crate::board::{Board, CellPos};
use crate::render::{self, RenderTarget};
use futures::future::try_join_all;

/// Game session lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Idle,
    Loading,
    Ready,
    /// Load failed; message is shown to the user, restart retries
    Error(String),
}

impl GameState {
    pub fn label(&self) -> &'static str {
        match self {
            GameState::Idle => "idle",
            GameState::Loading => "loading",
            GameState::Ready => "ready",
            GameState::Error(_) => "error",
        }
    }
}

/// How a finished load was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadCompletion {
    /// Board installed and drawn
    Applied,
    /// Load failed; controller is now in Error
    Failed(ApiError),
    /// A newer load started since; result discarded
    Stale,
}

/// The board in play plus the load that produced it
#[derive(Debug, Clone)]
pub struct GameSession {
    #[allow(dead_code)]
    pub generation: u64,
    pub board: Board,
}

/// Board size and fetch strategy for one load
#[derive(Debug, Clone, Copy)]
pub struct LoadPlan {
    pub categories: usize,
    /// Fetch categories concurrently (order is still preserved)
    pub concurrent: bool,
}

/// Fetch ids, then every category, in id order
pub async fn load_board(client: &TriviaClient, plan: LoadPlan) -> Result<Board, ApiError> {
    let ids = client.list_category_ids(plan.categories).await?;

    let mut board = Board::new();
    if plan.concurrent {
        // try_join_all yields results in input order
        let categories = try_join_all(ids.iter().map(|id| client.fetch_category(*id))).await?;
        for category in categories {
            board.push(category);
        }
    } else {
        for id in ids {
            board.push(client.fetch_category(id).await?);
        }
    }

    tracing::info!(
        "Loaded board with {} categories ({} clues)",
        board.categories().len(),
        board.total_clues()
    );
    Ok(board)
}

/// Owns the game session and drives state transitions
#[derive(Debug)]
pub struct GameController {
    state: GameState,
    generation: u64,
    session: Option<GameSession>,
    placeholder: String,
}

impl GameController {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            state: GameState::Idle,
            generation: 0,
            session: None,
            placeholder: placeholder.into(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[cfg(test)]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn board(&self) -> Option<&Board> {
        self.session.as_ref().map(|s| &s.board)
    }

    /// Enter Loading for a new generation and wipe the current board and grid.
    ///
    /// Valid from any state; a load already in flight becomes stale.
    pub fn begin_load(&mut self, target: &mut dyn RenderTarget) -> u64 {
        self.generation += 1;
        self.state = GameState::Loading;
        self.session = None;
        render::clear_board(target);
        tracing::info!("Starting game load (generation {})", self.generation);
        self.generation
    }

    /// Apply the result of the load started as `generation`
    pub fn complete_load(
        &mut self,
        generation: u64,
        result: Result<Board, ApiError>,
        target: &mut dyn RenderTarget,
    ) -> LoadCompletion {
        if generation != self.generation || self.state != GameState::Loading {
            tracing::debug!(
                "Discarding stale load (generation {}, current {})",
                generation,
                self.generation
            );
            return LoadCompletion::Stale;
        }

        match result {
            Ok(board) => {
                render::draw_board(&board, target, &self.placeholder);
                self.session = Some(GameSession { generation, board });
                self.state = GameState::Ready;
                LoadCompletion::Applied
            }
            Err(e) => {
                tracing::error!("Failed to load board: {}", e);
                self.state = GameState::Error(e.to_string());
                LoadCompletion::Failed(e)
            }
        }
    }

    /// Load a fresh board and draw it, replacing any current session
    pub async fn start_or_restart(
        &mut self,
        client: &TriviaClient,
        plan: LoadPlan,
        target: &mut dyn RenderTarget,
    ) -> LoadCompletion {
        let generation = self.begin_load(target);
        let result = load_board(client, plan).await;
        self.complete_load(generation, result, target)
    }

    /// Handle activation of the cell at `pos`
    pub fn activate(&mut self, pos: CellPos, target: &mut dyn RenderTarget) -> Activation {
        on_cell_activate(self.session.as_mut().map(|s| &mut s.board), pos, target)
    }
}
