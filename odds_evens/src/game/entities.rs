use std::fmt::{self};

use super::{constants, player::Player};

/// Type alias for ball counts. Hidden numbers, bets and player stacks
/// are all whole balls.
pub type Balls = u32;

/// Number of balls each player starts with unless configured otherwise.
pub const DEFAULT_STARTING_BALLS: Balls = 10;

/// Type alias for turn numbers. The first turn is turn 1.
pub type Turn = u32;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Classifies a hidden number.
    #[must_use]
    pub const fn of(n: Balls) -> Self {
        if n % 2 == 0 { Self::Even } else { Self::Odd }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Even => "even",
            Self::Odd => "odd",
        };
        write!(f, "{repr}")
    }
}

/// A guesser's call for the turn: the parity they believe the hidden
/// number has and how many balls they stake on it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParityBet {
    pub bet: Balls,
    pub parity: Parity,
}

impl fmt::Display for ParityBet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.bet, self.parity)
    }
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(s: &str) -> Self {
        let name: String = s
            .trim()
            .chars()
            .take(constants::MAX_NAME_LENGTH)
            .collect();
        Self(name)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for PlayerName {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<&str> for PlayerName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One of the two fixed places at the table. Seats never change during
/// a game; only the hiding and guessing roles rotate between them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::One => "player 1",
            Self::Two => "player 2",
        };
        write!(f, "{repr}")
    }
}

/// Everything that happened in a single resolved turn.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TurnOutcome {
    pub turn: Turn,
    pub hidden: Balls,
    pub guess: ParityBet,
    /// Balls that actually changed hands.
    pub wager: Balls,
    pub winner: Seat,
    pub loser: Seat,
}

/// Read-only snapshot of a game for display and assertions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameView {
    pub turn: Turn,
    pub players: Vec<Player>,
    pub hider: Option<Seat>,
}
