//! # Odds and Evens
//!
//! A two-player console game of hidden balls and parity guesses, built as
//! a type-safe finite state machine (FSM).
//!
//! Each turn one player hides some of their balls in a closed palm and the
//! other guesses whether that number is odd or even, betting some of their
//! own balls on it. The smaller of the hidden number and the bet changes
//! hands. Roles swap every turn and the game ends when a player has no
//! balls left.
//!
//! ## Architecture
//!
//! The game consists of three phases (states):
//!
//! - **Initializing**: Asking both players for their names
//! - **TurnInProgress**: Playing turns until a stack is empty
//! - **GameOver**: Announcing the winner
//!
//! ## Core Modules
//!
//! - [`game`]: Game state machine, entities, players and turn rules
//! - [`console`]: Line-oriented input and output shared by both players
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use odds_evens::{GameSettings, console::{Console, LineReader}};
//!
//! let input = "alice\nbob\n3\n1 3\n";
//! let mut console = Console::new(LineReader::new(Cursor::new(input)), Vec::new());
//! let game = odds_evens::play(GameSettings::new(3), &mut console).unwrap();
//! assert_eq!(game.winner().name.as_str(), "bob");
//! ```

/// Console input and output.
pub mod console;

/// Core game logic, entities, and state machine.
pub mod game;
pub use game::{
    Game, GameEvent, GameSettings, GameStateManagement, OddsEvensState,
    entities::{self, Balls, DEFAULT_STARTING_BALLS, Parity, ParityBet, PlayerName, Seat},
    functional, play,
    player::Player,
};
