//! Game state definitions for the odds and evens FSM.
//!
//! Each state represents a specific phase of a game's lifecycle.

use super::entities::Seat;
use super::state_machine::Table;

/// Setting up - waiting for both players to give their names
#[derive(Debug)]
pub struct Initializing {}

impl Default for Initializing {
    fn default() -> Self {
        Self::new()
    }
}

impl Initializing {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

/// Playing turns until one player runs out of balls
#[derive(Debug)]
pub struct TurnInProgress {
    pub(crate) table: Table,
}

/// One player is out of balls and the other has won
#[derive(Debug)]
pub struct GameOver {
    pub(crate) table: Table,
    pub winner: Seat,
}
