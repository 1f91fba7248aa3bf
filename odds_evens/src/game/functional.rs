//! Pure turn arithmetic, kept free of any input or output so the rules
//! can be checked on their own.

use super::entities::{Balls, Parity, ParityBet, Seat, Turn, TurnOutcome};

/// Balls that change hands in a turn: whichever side staked less caps
/// the transfer.
#[must_use]
pub fn effective_wager(hidden: Balls, bet: Balls) -> Balls {
    hidden.min(bet)
}

/// The guess is correct exactly when its parity matches the hidden
/// number's actual parity.
#[must_use]
pub fn guesser_wins(hidden: Balls, parity: Parity) -> bool {
    Parity::of(hidden) == parity
}

/// Decides who takes the turn without touching either player.
#[must_use]
pub fn judge(turn: Turn, hider: Seat, hidden: Balls, guess: ParityBet) -> TurnOutcome {
    let guesser = hider.other();
    let (winner, loser) = if guesser_wins(hidden, guess.parity) {
        (guesser, hider)
    } else {
        (hider, guesser)
    };
    TurnOutcome {
        turn,
        hidden,
        guess,
        wager: effective_wager(hidden, guess.bet),
        winner,
        loser,
    }
}
