//! Game state module - the match engine
//!
//! Ties together the board, the turn state, the timer and the scheduler.
//! All transitions happen inside [`GameState::flip_tile`], [`GameState::tick`]
//! and [`GameState::restart`], each running to completion before the next.

use std::fmt;
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};

use arrayvec::ArrayVec;
use tracing::{debug, info, instrument};

use crate::alphabet::Alphabet;
use crate::board::Board;
use crate::config::GameConfig;
use crate::error::BoardError;
use crate::events::{Completion, GameEvent};
use crate::rng::{Shuffler, SimpleRng};
use crate::scheduler::{Scheduler, TaskId, TaskKind};
use crate::snapshot::{GameSnapshot, TileSnapshot};
use crate::timer::Timer;
use crate::types::*;

/// Undrained events kept before new ones are dropped.
///
/// A running timer alone produces one event per second, so a caller that
/// never calls [`GameState::take_events`] would otherwise grow the queue
/// forever. The snapshot stays authoritative either way.
pub const EVENT_BACKLOG: usize = 1024;

/// Result of a flip request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Ignored: game won, tile not face down, or a pair is still resolving.
    Rejected,
    /// First tile of a turn is now face up.
    Revealed,
    Matched,
    /// The pair stays face up until the rollback fires.
    Mismatched,
    /// The flip matched the last pair.
    Won,
}

/// Complete game state
pub struct GameState {
    config: GameConfig,
    alphabet: Alphabet,
    shuffler: Box<dyn Shuffler + Send>,
    board: Board,
    /// Face-up, unresolved tiles (board indices).
    turn: ArrayVec<usize, TURN_CAPACITY>,
    moves: u32,
    matched_pairs: usize,
    status: GameStatus,
    timer: Timer,
    scheduler: Scheduler,
    /// Pending mismatch rollback.
    rollback: Option<TaskId>,
    /// Pending congratulation notice.
    congrats: Option<TaskId>,
    completion: Option<Completion>,
    congratulations: Option<String>,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    seed: u32,
    events_tx: SyncSender<GameEvent>,
    events_rx: Receiver<GameEvent>,
}

impl GameState {
    /// Create a standard 8-pair game dealt from the configured seed
    pub fn new(config: GameConfig) -> Self {
        let seed = config.seed_or_default();
        Self::with_parts(config, Alphabet::default(), SimpleRng::new(seed))
    }

    /// Create a game with a custom alphabet and layout source.
    pub fn with_parts(
        config: GameConfig,
        alphabet: Alphabet,
        shuffler: impl Shuffler + Send + 'static,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::sync_channel(EVENT_BACKLOG);
        let timer_tx = events_tx.clone();
        let timer = Timer::new(move |text| {
            let _ = timer_tx.try_send(GameEvent::Timer {
                text: text.to_string(),
            });
        })
        .with_period_ms(config.timer_period_ms);

        let mut shuffler: Box<dyn Shuffler + Send> = Box::new(shuffler);
        let board = Board::build(&alphabet, shuffler.as_mut());
        let seed = config.seed_or_default();

        let mut state = Self {
            config,
            alphabet,
            shuffler,
            board,
            turn: ArrayVec::new(),
            moves: 0,
            matched_pairs: 0,
            status: GameStatus::NotStarted,
            timer,
            scheduler: Scheduler::new(),
            rollback: None,
            congrats: None,
            completion: None,
            congratulations: None,
            episode_id: 0,
            seed,
            events_tx,
            events_rx,
        };
        state.announce_fresh_board();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    pub fn pair_count(&self) -> usize {
        self.board.pair_count()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.timer.elapsed_seconds()
    }

    pub fn timer_text(&self) -> String {
        self.timer.text()
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Indices of the face-up, unresolved tiles (at most two).
    pub fn face_up(&self) -> &[usize] {
        &self.turn
    }

    pub fn rollback_pending(&self) -> bool {
        self.rollback.is_some()
    }

    pub fn completion(&self) -> Option<&Completion> {
        self.completion.as_ref()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Where the engine is within the current turn.
    pub fn phase(&self) -> TurnPhase {
        match self.status {
            GameStatus::NotStarted => TurnPhase::NotStarted,
            GameStatus::Won => TurnPhase::Won,
            GameStatus::Running => match self.turn.len() {
                0 => TurnPhase::AwaitingFirstFlip,
                1 => TurnPhase::AwaitingSecondFlip,
                _ => TurnPhase::Resolving,
            },
        }
    }

    /// Take every notification emitted since the last call, oldest first.
    ///
    /// Callers are expected to drain this regularly (the terminal loop does
    /// so every frame). At most [`EVENT_BACKLOG`] events are held; later ones
    /// are dropped until the queue is drained.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.events_rx.try_iter().collect()
    }

    /// Handle a click on the tile at `index`.
    ///
    /// Invalid moves (after a win, on a tile that is not face down, or while
    /// a pair is resolving) are silent no-ops reported as
    /// [`FlipOutcome::Rejected`]. Only an index off the board is an error.
    #[instrument(level = "debug", skip(self), fields(episode = self.episode_id))]
    pub fn flip_tile(&mut self, index: usize) -> Result<FlipOutcome, BoardError> {
        let tile_state = self.board.tile_at(index)?.state();
        if self.status == GameStatus::Won || !tile_state.is_flippable() || self.turn.is_full() {
            debug!(?tile_state, face_up = self.turn.len(), "flip rejected");
            return Ok(FlipOutcome::Rejected);
        }

        if self.status == GameStatus::NotStarted {
            self.status = GameStatus::Running;
            self.timer.start(&mut self.scheduler);
        }

        self.board.tile_mut(index)?.reveal();
        self.turn.push(index);
        self.emit(GameEvent::TileChanged {
            index,
            state: TileState::FaceUp,
        });

        if !self.turn.is_full() {
            return Ok(FlipOutcome::Revealed);
        }

        self.moves += 1;
        self.emit(GameEvent::Moves { moves: self.moves });
        Ok(self.resolve_turn())
    }

    /// Evaluate the two face-up tiles.
    fn resolve_turn(&mut self) -> FlipOutcome {
        let (first, second) = (self.turn[0], self.turn[1]);
        let same = self.board.symbol_at(first) == self.board.symbol_at(second);

        if !same {
            debug!(first, second, "mismatch, rollback scheduled");
            let id = self.scheduler.schedule_once(
                self.config.mismatch_delay_ms,
                TaskKind::MismatchRollback { first, second },
            );
            self.rollback = Some(id);
            return FlipOutcome::Mismatched;
        }

        for index in [first, second] {
            if let Ok(tile) = self.board.tile_mut(index) {
                tile.mark_matched();
            }
            self.emit(GameEvent::TileChanged {
                index,
                state: TileState::Matched,
            });
        }
        self.turn.clear();
        self.matched_pairs += 1;
        self.emit(GameEvent::Pairs {
            text: format_pairs(self.matched_pairs, self.pair_count()),
        });

        if self.matched_pairs < self.pair_count() {
            debug!(first, second, matched = self.matched_pairs, "pair matched");
            return FlipOutcome::Matched;
        }

        self.timer.stop(&mut self.scheduler);
        self.status = GameStatus::Won;
        let completion = Completion {
            moves: self.moves,
            elapsed_seconds: self.timer.elapsed_seconds(),
            elapsed: self.timer.text(),
        };
        info!(
            moves = completion.moves,
            elapsed = %completion.elapsed,
            episode = self.episode_id,
            "board cleared"
        );
        self.emit(GameEvent::Completed(completion.clone()));
        self.completion = Some(completion);
        self.congrats = Some(
            self.scheduler
                .schedule_once(self.config.congrats_delay_ms, TaskKind::Congratulations),
        );
        FlipOutcome::Won
    }

    /// Advance game time and run everything that came due, in due order.
    ///
    /// Returns true if any visible state changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.scheduler.advance(elapsed_ms);

        let mut changed = false;
        while let Some((id, kind)) = self.scheduler.pop_due() {
            changed |= match kind {
                TaskKind::TimerTick => self.timer.on_tick(id),
                TaskKind::MismatchRollback { first, second } => self.roll_back(id, first, second),
                TaskKind::Congratulations => self.congratulate(id),
            };
        }
        changed
    }

    fn roll_back(&mut self, id: TaskId, first: usize, second: usize) -> bool {
        if self.rollback != Some(id) {
            return false;
        }
        self.rollback = None;

        for index in [first, second] {
            if let Ok(tile) = self.board.tile_mut(index) {
                if tile.hide() {
                    self.emit(GameEvent::TileChanged {
                        index,
                        state: TileState::FaceDown,
                    });
                }
            }
        }
        self.turn.clear();
        debug!(first, second, "mismatch rolled back");
        true
    }

    fn congratulate(&mut self, id: TaskId) -> bool {
        if self.congrats != Some(id) {
            return false;
        }
        self.congrats = None;

        let Some(completion) = &self.completion else {
            return false;
        };
        let message = completion.message();
        self.emit(GameEvent::Congratulations {
            message: message.clone(),
        });
        self.congratulations = Some(message);
        true
    }

    /// Throw away the board and session and deal a new game.
    ///
    /// Safe at any time; pending rollbacks and timer ticks are cancelled so
    /// nothing from the old game can touch the new board.
    #[instrument(level = "info", skip(self), fields(episode = self.episode_id))]
    pub fn restart(&mut self) {
        self.scheduler.cancel_all();
        self.rollback = None;
        self.congrats = None;

        self.board = Board::build(&self.alphabet, self.shuffler.as_mut());
        self.turn.clear();
        self.moves = 0;
        self.matched_pairs = 0;
        self.status = GameStatus::NotStarted;
        self.completion = None;
        self.congratulations = None;
        self.episode_id = self.episode_id.wrapping_add(1);

        info!(next_episode = self.episode_id, "new board dealt");
        self.announce_fresh_board();
    }

    /// Reset the timer and push the zeroed counters to the presentation layer.
    fn announce_fresh_board(&mut self) {
        self.emit(GameEvent::BoardReset {
            tiles: self.board.len(),
        });
        self.emit(GameEvent::Moves { moves: 0 });
        self.emit(GameEvent::Pairs {
            text: format_pairs(0, self.pair_count()),
        });
        self.timer.reset(&mut self.scheduler);
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::FlipTile(index) => matches!(
                self.flip_tile(index),
                Ok(outcome) if outcome != FlipOutcome::Rejected
            ),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.tiles.clear();
        out.tiles.extend(self.board.tiles().iter().map(|tile| TileSnapshot {
            index: tile.index(),
            state: tile.state(),
            face: match tile.state() {
                TileState::FaceDown => None,
                _ => self.alphabet.glyph(tile.symbol()),
            },
        }));
        out.columns = GRID_COLUMNS;
        out.moves = self.moves;
        out.matched_pairs = self.matched_pairs;
        out.total_pairs = self.pair_count();
        out.elapsed_seconds = self.timer.elapsed_seconds();
        out.timer = self.timer.text();
        out.status = self.status;
        out.phase = self.phase();
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.congratulations = self.congratulations.clone();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn emit(&self, event: GameEvent) {
        // The receiver lives in `self`, so the only failure is a full backlog.
        if let Err(TrySendError::Full(event)) = self.events_tx.try_send(event) {
            debug!(?event, "event backlog full, dropping");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("board", &self.board)
            .field("turn", &self.turn)
            .field("moves", &self.moves)
            .field("matched_pairs", &self.matched_pairs)
            .field("status", &self.status)
            .field("timer", &self.timer)
            .field("episode_id", &self.episode_id)
            .finish_non_exhaustive()
    }
}
