//! Game session controller.
//!
//! `GameSession` owns everything one game needs and is the only thing that
//! mutates it:
//! - `Board` (cards)
//! - `GameState` (counters, clock token, history)
//! - `Scheduler` (delayed flip-back, win and clock tasks)
//! - the `RenderPort` it reports to
//!
//! ## Control flow
//!
//! ```text
//! dispatch(target) -> reveal(card) -> start_game() on first move
//!                                  -> pair check, schedule flip-back
//!                                  -> win check, schedule win
//! advance(dt) -> Tick / FlipBack / Win tasks as they mature
//! ```
//!
//! The session is single-threaded. Time only moves when the host calls
//! `advance`, so tests drive the clock explicitly.
//!
//! ```
//! use std::time::Duration;
//! use rust_pairs::cards::CardIndex;
//! use rust_pairs::core::GameConfig;
//! use rust_pairs::render::NullRenderer;
//! use rust_pairs::session::{ClickTarget, Dispatched, GameSession};
//!
//! let mut session = GameSession::new(GameConfig::new(4).with_seed(42), NullRenderer).unwrap();
//!
//! let result = session.dispatch(ClickTarget::Card(CardIndex::new(0))).unwrap();
//! assert!(matches!(result, Dispatched::Turn(_)));
//! assert!(session.state().started);
//!
//! session.advance(Duration::from_secs(3));
//! assert_eq!(session.state().elapsed_seconds, 3);
//! ```

mod input;
mod resolver;
mod timer;

pub use input::{ClickTarget, Dispatched};

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::board::{generate_board, Board};
use crate::core::{GameConfig, GameError, GameRng, GameState, HudSnapshot};
use crate::render::{NullRenderer, RenderPort};
use crate::schedule::{Scheduler, TaskKind};

/// Immutable view of a session at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub hud: HudSnapshot,
    pub started: bool,
    pub won: bool,
}

/// One game of pairs, from generation to win.
pub struct GameSession<R: RenderPort = NullRenderer> {
    config: GameConfig,
    rng: GameRng,
    board: Board,
    state: GameState,
    scheduler: Scheduler,
    renderer: R,
}

impl<R: RenderPort> GameSession<R> {
    /// Generate a board and render it.
    ///
    /// # Errors
    ///
    /// `Configuration` for an odd or zero dimension, `InvalidArgument` if the
    /// alphabet is too small for the board. No board is rendered on error.
    #[instrument(skip(renderer), level = "debug")]
    pub fn new(config: GameConfig, renderer: R) -> Result<Self, GameError> {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let board = generate_board(&config, &mut rng.fork())?;

        let mut session = Self {
            config,
            rng,
            board,
            state: GameState::new(),
            scheduler: Scheduler::new(),
            renderer,
        };
        session.renderer.render_board(&session.board);
        info!(
            dimension = session.config.dimension,
            seed = session.rng.seed(),
            "new game"
        );
        Ok(session)
    }

    /// Start a game on a prepared board.
    ///
    /// For hosts and tests that lay out the cards themselves. Later calls to
    /// `new_game` generate random boards of the same dimension.
    pub fn with_board(board: Board, renderer: R) -> Self {
        let mut session = Self {
            config: GameConfig::new(board.dimension()),
            rng: GameRng::from_entropy(),
            board,
            state: GameState::new(),
            scheduler: Scheduler::new(),
            renderer,
        };
        session.renderer.render_board(&session.board);
        session
    }

    /// Start over with a freshly generated board.
    ///
    /// Cancels every outstanding task (flip-back, win, clock) so nothing from
    /// the previous game fires against the new board. On error the current
    /// game is left untouched.
    #[instrument(skip(self), level = "debug")]
    pub fn new_game(&mut self) -> Result<(), GameError> {
        let board = generate_board(&self.config, &mut self.rng.fork())?;

        let cancelled = self.scheduler.cancel_all();
        self.board = board;
        self.state = GameState::new();

        self.renderer.render_board(&self.board);
        self.renderer.update_hud(&self.state.hud());
        self.renderer.set_start_enabled(true);
        info!(cancelled, "new game");
        Ok(())
    }

    /// Let `elapsed` pass on the game clock, running every task that matures.
    ///
    /// The clock saturates at `Duration::MAX`.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.scheduler.now().saturating_add(elapsed);
        while let Some(task) = self.scheduler.pop_due(until) {
            self.run_task(task.kind);
        }
        self.scheduler.advance_to(until);
    }

    fn run_task(&mut self, kind: TaskKind) {
        match kind {
            TaskKind::Tick => self.tick(),
            TaskKind::FlipBack => self.flip_back(),
            TaskKind::Win => self.finish_win(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Check if the win sequence has run.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.locked
    }

    /// Check if the manual start control accepts clicks.
    #[must_use]
    pub fn start_enabled(&self) -> bool {
        !self.state.started
    }

    /// Snapshot the board and counters.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            hud: self.state.hud(),
            started: self.state.started,
            won: self.state.locked,
        }
    }
}
