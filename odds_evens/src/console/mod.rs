//! Console input and output shared by both players.
//!
//! A game owns exactly one [`Console`] for its whole lifetime and lends it
//! to whichever player is being asked for input. Integer prompts read
//! whitespace-separated tokens, so several answers typed on one line
//! serve consecutive prompts. Names always consume a whole line.

pub mod errors;
pub mod parse;

pub use errors::{ConsoleError, Expected, InputError, Result};
pub use parse::{parse_balls, parse_parity};

use std::{
    collections::VecDeque,
    fmt,
    io::{self, BufRead, Write},
};

/// Somewhere lines of player input come from.
pub trait LineSource {
    /// Reads the next line without its line terminator, or `None` once the
    /// input is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Like [`LineSource::read_line`], but the typed characters shouldn't be
    /// visible to anyone watching. Sources that can't hide input fall back
    /// to a regular read.
    fn read_line_concealed(&mut self) -> io::Result<Option<String>> {
        self.read_line()
    }

    /// Whether [`LineSource::read_line_concealed`] really hides input.
    fn conceals(&self) -> bool {
        false
    }
}

/// Line source over any buffered reader. Nothing is concealed.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    /// Bytes that aren't UTF-8 come through as U+FFFD, so they end up as
    /// an unparsable token rather than a read failure.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[derive(Debug)]
pub struct Console<S, W> {
    source: S,
    out: W,
    /// Tokens left over from the last line read for an integer prompt.
    pending: VecDeque<String>,
}

impl<S: LineSource, W: Write> Console<S, W> {
    pub fn new(source: S, out: W) -> Self {
        Self {
            source,
            out,
            pending: VecDeque::new(),
        }
    }

    /// Writes one line of output.
    pub fn say(&mut self, msg: impl fmt::Display) -> Result<()> {
        writeln!(self.out, "{msg}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Reads a whole line. Leftover tokens from a previous line are
    /// returned first, as the remainder of that line.
    pub fn read_line(&mut self) -> Result<String> {
        if !self.pending.is_empty() {
            return Ok(self.discard_line());
        }
        self.source.read_line()?.ok_or(ConsoleError::Exhausted)
    }

    /// Reads the next whitespace-separated token, pulling new lines from
    /// the source until one turns up.
    ///
    /// A concealed read on a source that really hides input takes the
    /// whole trimmed line as one token. Nothing typed there is ever left
    /// over for the next prompt, which may belong to the other player.
    pub fn read_token(&mut self, concealed: bool) -> Result<String> {
        if concealed && self.source.conceals() {
            self.pending.clear();
            let line = self
                .source
                .read_line_concealed()?
                .ok_or(ConsoleError::Exhausted)?;
            return Ok(line.trim().to_string());
        }
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let line = self.source.read_line()?.ok_or(ConsoleError::Exhausted)?;
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Drops whatever is left of the current input line and returns it.
    pub fn discard_line(&mut self) -> String {
        let rest: Vec<String> = self.pending.drain(..).collect();
        rest.join(" ")
    }

    #[must_use]
    pub fn output(&self) -> &W {
        &self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<LineReader<Cursor<Vec<u8>>>, Vec<u8>> {
        Console::new(
            LineReader::new(Cursor::new(input.as_bytes().to_vec())),
            Vec::new(),
        )
    }

    #[test]
    fn test_read_line_strips_terminator() {
        let mut console = console("alice\r\nbob\n");
        assert_eq!(console.read_line().unwrap(), "alice");
        assert_eq!(console.read_line().unwrap(), "bob");
    }

    #[test]
    fn test_read_token_skips_blank_lines() {
        let mut console = console("\n   \n 7 \n");
        assert_eq!(console.read_token(false).unwrap(), "7");
    }

    #[test]
    fn test_tokens_on_one_line_serve_consecutive_reads() {
        let mut console = console("0 3\n");
        assert_eq!(console.read_token(false).unwrap(), "0");
        assert_eq!(console.read_token(true).unwrap(), "3");
    }

    #[test]
    fn test_discard_line_drops_leftovers() {
        let mut console = console("x 4\n5\n");
        assert_eq!(console.read_token(false).unwrap(), "x");
        assert_eq!(console.discard_line(), "4");
        assert_eq!(console.read_token(false).unwrap(), "5");
    }

    #[test]
    fn test_invalid_utf8_becomes_a_token() {
        let mut console = Console::new(
            LineReader::new(Cursor::new(b"\xe9\n2\n".to_vec())),
            Vec::new(),
        );
        let token = console.read_token(false).unwrap();
        assert_eq!(token, "\u{FFFD}");
        assert!(matches!(
            parse_balls(&token, 10),
            Err(InputError::InvalidFormat(_))
        ));
        assert_eq!(console.read_token(false).unwrap(), "2");
    }

    /// Source whose every line is typed with echo off.
    struct HiddenLines(VecDeque<&'static str>);

    impl LineSource for HiddenLines {
        fn read_line(&mut self) -> io::Result<Option<String>> {
            Ok(self.0.pop_front().map(str::to_string))
        }

        fn read_line_concealed(&mut self) -> io::Result<Option<String>> {
            self.read_line()
        }

        fn conceals(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_concealed_line_is_one_token() {
        let lines = VecDeque::from([" 3 1 ", "4"]);
        let mut console = Console::new(HiddenLines(lines), Vec::<u8>::new());
        assert_eq!(console.read_token(true).unwrap(), "3 1");
        assert_eq!(console.read_token(false).unwrap(), "4");
    }

    #[test]
    fn test_concealed_read_drops_visible_leftovers() {
        let lines = VecDeque::from(["0 9", "5"]);
        let mut console = Console::new(HiddenLines(lines), Vec::<u8>::new());
        assert_eq!(console.read_token(false).unwrap(), "0");
        assert_eq!(console.read_token(true).unwrap(), "5");
    }

    #[test]
    fn test_exhausted_input() {
        let mut console = console("");
        assert!(matches!(
            console.read_token(false),
            Err(ConsoleError::Exhausted)
        ));
        assert!(matches!(console.read_line(), Err(ConsoleError::Exhausted)));
    }

    #[test]
    fn test_say_writes_line() {
        let mut console = console("");
        console.say("hello").unwrap();
        console.say(42).unwrap();
        assert_eq!(String::from_utf8_lossy(console.output()), "hello\n42\n");
    }
}
