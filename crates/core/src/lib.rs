//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the memory game rules, state management and the
//! deferred-task clock that drives them. It has no dependencies on UI or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed deals identical boards
//! - **Testable**: Time only moves when [`GameState::tick`] is called
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`alphabet`]: The fixed glyph set a board is dealt from
//! - [`board`]: The 2K tiles in layout order
//! - [`tile`]: Single card with its FaceDown/FaceUp/Matched state
//! - [`rng`]: Seedable LCG and the Fisher-Yates pair shuffle
//! - [`scheduler`]: Cancelable one-shot and repeating tasks on a virtual clock
//! - [`timer`]: Restartable elapsed-time counter
//! - [`game_state`]: The match engine (turn state, counters, win detection)
//! - [`events`] / [`snapshot`]: What the presentation layer gets to see
//!
//! # Game Rules
//!
//! - Every symbol is dealt twice; the board is 16 tiles for the standard 8 pairs
//! - At most two tiles are face up and unresolved at any moment
//! - A move is one completed pair of flips
//! - A matching pair stays face up for good; a mismatch flips back after 1s
//! - Clicks during that second, on turned tiles, or after the win are ignored
//! - The timer starts with the first flip and stops on the last match
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{FlipOutcome, GameConfig, GameState};
//!
//! let mut game = GameState::new(GameConfig::default().with_seed(12345));
//!
//! assert_eq!(game.flip_tile(0).unwrap(), FlipOutcome::Revealed);
//! assert_eq!(game.flip_tile(0).unwrap(), FlipOutcome::Rejected);
//! assert!(game.flip_tile(99).is_err());
//!
//! // One second of game time.
//! game.tick(1000);
//! assert_eq!(game.timer_text(), "0:01");
//! ```

pub mod alphabet;
pub mod board;
pub mod config;
pub mod error;
pub mod events;
pub mod game_state;
pub mod rng;
pub mod scheduler;
pub mod snapshot;
pub mod tile;
pub mod timer;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use alphabet::{Alphabet, DEFAULT_GLYPHS};
pub use board::Board;
pub use config::GameConfig;
pub use error::{AlphabetError, BoardError};
pub use events::{Completion, GameEvent};
pub use game_state::{FlipOutcome, GameState, EVENT_BACKLOG};
pub use rng::{deal_pairs, Shuffler, SimpleRng};
pub use scheduler::{Scheduler, TaskId, TaskKind};
pub use snapshot::{GameSnapshot, TileSnapshot};
pub use tile::Tile;
pub use timer::Timer;
