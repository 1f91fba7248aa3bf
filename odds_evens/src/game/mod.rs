//! Odds and evens game engine - core FSM and turn rules.
//!
//! This module provides:
//! - Entities shared by every phase (parity, bets, seats, outcomes)
//! - Players and the prompts they answer
//! - Pure turn arithmetic
//! - A type-safe finite state machine with three game states

pub mod constants;
pub mod entities;
pub mod functional;
pub mod player;
pub mod state_machine;
pub mod states;

pub use state_machine::{
    Game, GameData, GameEvent, GameSettings, GameStateManagement, OddsEvensState, Table, play,
};
