//! A player at the table and the prompts they answer.

use log::{debug, error};
use std::{fmt, io::Write};

use super::entities::{Balls, Parity, ParityBet, PlayerName};
use crate::console::{self, Console, InputError, LineSource};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Player {
    pub name: PlayerName,
    balls: Balls,
}

impl Player {
    #[must_use]
    pub fn new(name: PlayerName, balls: Balls) -> Self {
        Self { name, balls }
    }

    #[must_use]
    pub fn balls(&self) -> Balls {
        self.balls
    }

    #[must_use]
    pub fn is_out(&self) -> bool {
        self.balls == 0
    }

    pub fn win(&mut self, bet: Balls) {
        self.balls += bet;
    }

    /// Takes `bet` balls away. Wagers are capped by both players' stacks
    /// before they get here, so an overdraw means that cap was broken; the
    /// stack floors at zero and the mismatch is logged.
    pub fn lose(&mut self, bet: Balls) {
        match self.balls.checked_sub(bet) {
            Some(balls) => self.balls = balls,
            None => {
                error!(
                    "{} lost {bet} balls but only had {}, flooring at 0",
                    self.name, self.balls
                );
                self.balls = 0;
            }
        }
    }

    /// Asks how many balls to hide this turn. The answer is always in
    /// `[1, balls]`.
    pub fn read_hide_number<S: LineSource, W: Write>(
        &self,
        console: &mut Console<S, W>,
    ) -> console::Result<Balls> {
        console.say(format!(
            "{}! Please decide how many balls to hide in your palm.",
            self.name
        ))?;
        self.read_number(console)
    }

    /// Asks for a parity guess followed by a bet bounded like a hidden
    /// number.
    pub fn guess_parity_and_read_bet<S: LineSource, W: Write>(
        &self,
        console: &mut Console<S, W>,
    ) -> console::Result<ParityBet> {
        let parity = self.guess_parity(console)?;
        console.say(format!(
            "{}! Please decide how many balls to bet along your guess.",
            self.name
        ))?;
        let bet = self.read_number(console)?;
        Ok(ParityBet { bet, parity })
    }

    fn read_number<S: LineSource, W: Write>(
        &self,
        console: &mut Console<S, W>,
    ) -> console::Result<Balls> {
        loop {
            console.say(format!("You currently have {} balls.", self.balls))?;
            let token = console.read_token(true)?;
            match console::parse_balls(&token, self.balls) {
                Ok(number) => return Ok(number),
                Err(err) => self.reject(console, err)?,
            }
        }
    }

    fn guess_parity<S: LineSource, W: Write>(
        &self,
        console: &mut Console<S, W>,
    ) -> console::Result<Parity> {
        loop {
            console.say(format!(
                "{}! Guess the parity of the number that the other player is hiding.",
                self.name
            ))?;
            console.say("Enter 0 if even, 1 if odd.")?;
            let token = console.read_token(false)?;
            match console::parse_parity(&token) {
                Ok(parity) => return Ok(parity),
                Err(err) => self.reject(console, err)?,
            }
        }
    }

    fn reject<S: LineSource, W: Write>(
        &self,
        console: &mut Console<S, W>,
        err: InputError,
    ) -> console::Result<()> {
        debug!("rejected input from {}: {err:?}", self.name);
        // A bad token takes the rest of its line down with it.
        let err = match err {
            InputError::InvalidFormat(token) => {
                let rest = console.discard_line();
                if rest.is_empty() {
                    InputError::InvalidFormat(token)
                } else {
                    InputError::InvalidFormat(format!("{token} {rest}"))
                }
            }
            err => err,
        };
        console.say(format!("{}! {err}", self.name))
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} balls)", self.name, self.balls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{ConsoleError, LineReader};
    use crate::game::entities::DEFAULT_STARTING_BALLS;
    use std::collections::VecDeque;
    use std::io::{self, Cursor};

    type TestConsole = Console<LineReader<Cursor<Vec<u8>>>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(
            LineReader::new(Cursor::new(input.as_bytes().to_vec())),
            Vec::new(),
        )
    }

    fn transcript(console: &TestConsole) -> String {
        String::from_utf8_lossy(console.output()).into_owned()
    }

    fn alice() -> Player {
        Player::new("alice".into(), DEFAULT_STARTING_BALLS)
    }

    #[test]
    fn test_player_win_and_lose() {
        let mut player = alice();
        player.win(3);
        assert_eq!(player.balls(), 13);
        player.lose(5);
        assert_eq!(player.balls(), 8);
        assert!(!player.is_out());
    }

    #[test]
    fn test_player_lose_everything() {
        let mut player = Player::new("bob".into(), 4);
        player.lose(4);
        assert_eq!(player.balls(), 0);
        assert!(player.is_out());
    }

    #[test]
    fn test_player_lose_overdraw_floors_at_zero() {
        let mut player = Player::new("bob".into(), 2);
        player.lose(5);
        assert_eq!(player.balls(), 0);
    }

    #[test]
    fn test_read_hide_number_valid() {
        let mut console = console("4\n");
        assert_eq!(alice().read_hide_number(&mut console).unwrap(), 4);
        assert_eq!(
            transcript(&console),
            "alice! Please decide how many balls to hide in your palm.\n\
             You currently have 10 balls.\n"
        );
    }

    #[test]
    fn test_read_hide_number_retries_until_valid() {
        let mut console = console("abc\n0\n11\n3\n");
        assert_eq!(alice().read_hide_number(&mut console).unwrap(), 3);
        assert_eq!(
            transcript(&console),
            "alice! Please decide how many balls to hide in your palm.\n\
             You currently have 10 balls.\n\
             alice! abc was not an Integer number. Try again.\n\
             You currently have 10 balls.\n\
             alice! Number must be > 0 and <= 10. Try again.\n\
             You currently have 10 balls.\n\
             alice! Number must be > 0 and <= 10. Try again.\n\
             You currently have 10 balls.\n"
        );
    }

    #[test]
    fn test_bad_token_discards_rest_of_line() {
        let mut console = console("x 5\n2\n");
        assert_eq!(alice().read_hide_number(&mut console).unwrap(), 2);
        assert!(
            transcript(&console).contains("alice! x 5 was not an Integer number. Try again.")
        );
    }

    /// Source where every line is typed with echo off.
    struct HiddenLines(VecDeque<&'static str>);

    impl LineSource for HiddenLines {
        fn read_line(&mut self) -> io::Result<Option<String>> {
            Ok(self.0.pop_front().map(str::to_string))
        }

        fn conceals(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_hidden_entry_never_answers_next_prompt() {
        let lines = VecDeque::from(["3 1", "3", "0", "5"]);
        let mut console = Console::new(HiddenLines(lines), Vec::<u8>::new());
        let bob = Player::new("bob".into(), DEFAULT_STARTING_BALLS);

        assert_eq!(alice().read_hide_number(&mut console).unwrap(), 3);
        let guess = bob.guess_parity_and_read_bet(&mut console).unwrap();
        assert_eq!(
            guess,
            ParityBet {
                bet: 5,
                parity: Parity::Even
            }
        );

        let out = String::from_utf8_lossy(console.output()).into_owned();
        assert!(out.contains("alice! 3 1 was not an Integer number. Try again."));
    }

    #[test]
    fn test_guess_parity_and_read_bet() {
        let mut console = console("1\n7\n");
        let guess = alice().guess_parity_and_read_bet(&mut console).unwrap();
        assert_eq!(
            guess,
            ParityBet {
                bet: 7,
                parity: Parity::Odd
            }
        );
        assert_eq!(
            transcript(&console),
            "alice! Guess the parity of the number that the other player is hiding.\n\
             Enter 0 if even, 1 if odd.\n\
             alice! Please decide how many balls to bet along your guess.\n\
             You currently have 10 balls.\n"
        );
    }

    #[test]
    fn test_guess_parity_retries_with_full_prompt() {
        let mut console = console("2\neven\n0 5\n");
        let guess = alice().guess_parity_and_read_bet(&mut console).unwrap();
        assert_eq!(guess.parity, Parity::Even);
        assert_eq!(guess.bet, 5);

        let out = transcript(&console);
        assert_eq!(out.matches("Enter 0 if even, 1 if odd.").count(), 3);
        assert!(out.contains("alice! Number must be 0 or 1. Try again."));
        assert!(out.contains("alice! even was not an Integer number. Try again."));
    }

    #[test]
    fn test_bet_bounded_by_own_stack() {
        let player = Player::new("carol".into(), 3);
        let mut console = console("0\n4\n3\n");
        let guess = player.guess_parity_and_read_bet(&mut console).unwrap();
        assert_eq!(guess.bet, 3);
        assert!(transcript(&console).contains("carol! Number must be > 0 and <= 3. Try again."));
    }

    #[test]
    fn test_input_ends_mid_prompt() {
        let mut console = console("nope\n");
        assert!(matches!(
            alice().read_hide_number(&mut console),
            Err(ConsoleError::Exhausted)
        ));
    }
}
