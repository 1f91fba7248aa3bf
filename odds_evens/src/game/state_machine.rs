//! Odds and evens game state machine implementation.
//!
//! A game moves through three phases, each its own type so that turn
//! operations only exist once both players are seated:
//! `Initializing -> TurnInProgress -> GameOver`.

use enum_dispatch::enum_dispatch;
use log::{debug, info};
use std::{collections::VecDeque, fmt, io::Write};

use super::constants::TURN_BANNER_WIDTH;
use super::entities::{
    Balls, DEFAULT_STARTING_BALLS, GameView, ParityBet, PlayerName, Seat, Turn, TurnOutcome,
};
use super::functional;
use super::player::Player;
use super::states::{GameOver, Initializing, TurnInProgress};
use crate::console::{self, Console, LineSource};

/// Events that occur during gameplay. Their display text is what the
/// players see on the console.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameEvent {
    TurnStarted(Turn),
    TurnWon {
        turn: Turn,
        winner: PlayerName,
        loser: PlayerName,
        balls: Balls,
    },
    GameWon(PlayerName),
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TurnStarted(turn) => {
                let dashes = "-".repeat(TURN_BANNER_WIDTH);
                write!(f, "{dashes} Turn {turn}! {dashes}")
            }
            Self::TurnWon {
                turn,
                winner,
                loser,
                balls,
            } => write!(
                f,
                "{winner} won turn {turn} and receives {balls} balls from {loser}."
            ),
            Self::GameWon(name) => write!(f, "The winner is {name}!"),
        }
    }
}

/// Game configuration settings
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameSettings {
    pub starting_balls: Balls,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_BALLS)
    }
}

impl GameSettings {
    #[must_use]
    pub const fn new(starting_balls: Balls) -> Self {
        Self { starting_balls }
    }
}

/// Mutable game data shared across all states
#[derive(Debug)]
pub struct GameData {
    /// Number of the turn being played, or about to be played.
    pub turn: Turn,
    /// Queue of game events that callers can drain to see what happened
    /// since they last looked.
    pub(super) events: VecDeque<GameEvent>,
    pub(super) settings: GameSettings,
}

impl Default for GameData {
    fn default() -> Self {
        GameSettings::default().into()
    }
}

impl From<GameSettings> for GameData {
    fn from(value: GameSettings) -> Self {
        Self {
            turn: 1,
            events: VecDeque::new(),
            settings: value,
        }
    }
}

/// The two seated players and which of them hides this turn.
#[derive(Debug)]
pub struct Table {
    players: [Player; 2],
    hider: Seat,
}

impl Table {
    fn new(player1: Player, player2: Player) -> Self {
        Self {
            players: [player1, player2],
            hider: Seat::One,
        }
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::One => &self.players[0],
            Seat::Two => &self.players[1],
        }
    }

    /// Both players at once, `seat` first.
    fn pair_mut(&mut self, seat: Seat) -> (&mut Player, &mut Player) {
        let [one, two] = &mut self.players;
        match seat {
            Seat::One => (one, two),
            Seat::Two => (two, one),
        }
    }

    fn view(&self, turn: Turn, hider: Option<Seat>) -> GameView {
        GameView {
            turn,
            players: self.players.to_vec(),
            hider,
        }
    }
}

/// Trait for reading game state regardless of phase
#[enum_dispatch]
pub trait GameStateManagement {
    fn drain_events(&mut self) -> VecDeque<GameEvent>;

    #[must_use]
    fn get_view(&self) -> GameView;
}

/// An odds and evens game with data and logic for running it end-to-end.
#[derive(Debug)]
pub struct Game<T> {
    pub data: GameData,
    pub state: T,
}

impl<T> Game<T> {
    fn record(&mut self, event: GameEvent) {
        debug!("{event}");
        self.data.events.push_back(event);
    }

    fn announce<S: LineSource, W: Write>(
        &mut self,
        console: &mut Console<S, W>,
        event: GameEvent,
    ) -> console::Result<()> {
        console.say(&event)?;
        self.record(event);
        Ok(())
    }
}

impl Game<Initializing> {
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        Self {
            data: settings.into(),
            state: Initializing::new(),
        }
    }

    /// Seats two players with the configured number of balls. Player 1
    /// hides first.
    #[must_use]
    pub fn with_players(self, name1: PlayerName, name2: PlayerName) -> Game<TurnInProgress> {
        let balls = self.data.settings.starting_balls;
        info!("starting game: {name1} vs {name2} with {balls} balls each");
        let table = Table::new(Player::new(name1, balls), Player::new(name2, balls));
        Game {
            data: self.data,
            state: TurnInProgress { table },
        }
    }

    /// Asks both players for their names.
    pub fn seat_players<S: LineSource, W: Write>(
        self,
        console: &mut Console<S, W>,
    ) -> console::Result<Game<TurnInProgress>> {
        console.say("Specify name of player 1 and hit enter.")?;
        let name1 = PlayerName::from(console.read_line()?);
        console.say("Specify name of player 2 and hit enter.")?;
        let name2 = PlayerName::from(console.read_line()?);
        Ok(self.with_players(name1, name2))
    }
}

impl GameStateManagement for Game<Initializing> {
    fn drain_events(&mut self) -> VecDeque<GameEvent> {
        self.data.events.drain(..).collect()
    }

    fn get_view(&self) -> GameView {
        GameView {
            turn: self.data.turn,
            players: Vec::new(),
            hider: None,
        }
    }
}

impl Game<TurnInProgress> {
    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        self.state.table.player(seat)
    }

    #[must_use]
    pub fn hider_seat(&self) -> Seat {
        self.state.table.hider
    }

    #[must_use]
    pub fn hider(&self) -> &Player {
        self.player(self.hider_seat())
    }

    #[must_use]
    pub fn guesser(&self) -> &Player {
        self.player(self.hider_seat().other())
    }

    /// Whether either player has run out of balls. Only checked between
    /// turns, so a turn that empties a stack is always played out fully.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.table.players.iter().any(Player::is_out)
    }

    /// Settles a turn from the hider's number and the guesser's call:
    /// moves the effective wager from loser to winner, then swaps roles
    /// and advances the turn counter.
    pub fn resolve_turn(&mut self, hidden: Balls, guess: ParityBet) -> TurnOutcome {
        let outcome = functional::judge(self.data.turn, self.hider_seat(), hidden, guess);
        let (winner, loser) = self.state.table.pair_mut(outcome.winner);
        winner.win(outcome.wager);
        loser.lose(outcome.wager);
        let event = GameEvent::TurnWon {
            turn: outcome.turn,
            winner: winner.name.clone(),
            loser: loser.name.clone(),
            balls: outcome.wager,
        };
        self.record(event);

        self.state.table.hider = self.state.table.hider.other();
        self.data.turn += 1;
        outcome
    }

    /// Plays one full turn on the console.
    pub fn play_turn<S: LineSource, W: Write>(
        &mut self,
        console: &mut Console<S, W>,
    ) -> console::Result<TurnOutcome> {
        self.announce(console, GameEvent::TurnStarted(self.data.turn))?;
        let hidden = self.hider().read_hide_number(console)?;
        let guess = self.guesser().guess_parity_and_read_bet(console)?;
        let outcome = self.resolve_turn(hidden, guess);
        if let Some(event) = self.data.events.back() {
            console.say(event)?;
        }
        console.say("")?;
        Ok(outcome)
    }
}

impl GameStateManagement for Game<TurnInProgress> {
    fn drain_events(&mut self) -> VecDeque<GameEvent> {
        self.data.events.drain(..).collect()
    }

    fn get_view(&self) -> GameView {
        self.state
            .table
            .view(self.data.turn, Some(self.state.table.hider))
    }
}

impl From<Game<TurnInProgress>> for Game<GameOver> {
    fn from(value: Game<TurnInProgress>) -> Self {
        let table = value.state.table;
        let winner = if table.player(Seat::One).is_out() {
            Seat::Two
        } else {
            Seat::One
        };
        Self {
            data: value.data,
            state: GameOver { table, winner },
        }
    }
}

impl Game<GameOver> {
    #[must_use]
    pub fn winner(&self) -> &Player {
        self.state.table.player(self.state.winner)
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        self.state.table.player(seat)
    }

    /// Turns played before the game ended.
    #[must_use]
    pub fn turns_played(&self) -> Turn {
        self.data.turn - 1
    }

    fn announce_winner<S: LineSource, W: Write>(
        &mut self,
        console: &mut Console<S, W>,
    ) -> console::Result<()> {
        let name = self.winner().name.clone();
        info!("{name} won after {} turns", self.turns_played());
        self.announce(console, GameEvent::GameWon(name))
    }
}

impl GameStateManagement for Game<GameOver> {
    fn drain_events(&mut self) -> VecDeque<GameEvent> {
        self.data.events.drain(..).collect()
    }

    fn get_view(&self) -> GameView {
        self.state.table.view(self.data.turn, None)
    }
}

/// A game in whichever phase it is currently in.
#[enum_dispatch(GameStateManagement)]
#[derive(Debug)]
pub enum OddsEvensState {
    Initializing(Game<Initializing>),
    TurnInProgress(Game<TurnInProgress>),
    GameOver(Game<GameOver>),
}

impl OddsEvensState {
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        Self::Initializing(Game::<Initializing>::new(settings))
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, Self::GameOver(_))
    }

    /// Advances the game by one step: seating the players, playing one
    /// turn, or declaring the winner. A finished game stays finished.
    pub fn step<S: LineSource, W: Write>(
        self,
        console: &mut Console<S, W>,
    ) -> console::Result<Self> {
        let next = match self {
            Self::Initializing(game) => Self::TurnInProgress(game.seat_players(console)?),
            Self::TurnInProgress(mut game) => {
                if game.is_over() {
                    let mut game = Game::<GameOver>::from(game);
                    game.announce_winner(console)?;
                    Self::GameOver(game)
                } else {
                    game.play_turn(console)?;
                    Self::TurnInProgress(game)
                }
            }
            Self::GameOver(game) => Self::GameOver(game),
        };
        Ok(next)
    }
}

/// Runs a whole game on `console`, from asking for names to announcing
/// the winner.
pub fn play<S: LineSource, W: Write>(
    settings: GameSettings,
    console: &mut Console<S, W>,
) -> console::Result<Game<GameOver>> {
    let mut state = OddsEvensState::new(settings);
    loop {
        state = match state.step(console)? {
            OddsEvensState::GameOver(game) => return Ok(game),
            next => next,
        };
    }
}
