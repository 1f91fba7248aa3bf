//! Terminal input for a game played by two people at one keyboard.
//!
//! Numbers are typed with echo turned off so the other player can't read
//! how many balls were hidden or bet.

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};
use odds_evens::console::{LineReader, LineSource};
use std::io::{self, IsTerminal, StdinLock, Write};

pub struct TerminalSource {
    lines: LineReader<StdinLock<'static>>,
    conceal: bool,
}

impl TerminalSource {
    /// Reads from stdin. Concealment only applies when stdin is an
    /// interactive terminal; piped input is read as plain lines.
    pub fn new(conceal: bool) -> Self {
        let stdin = io::stdin();
        let conceal = conceal && stdin.is_terminal();
        Self {
            lines: LineReader::new(stdin.lock()),
            conceal,
        }
    }
}

impl LineSource for TerminalSource {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.lines.read_line()
    }

    fn read_line_concealed(&mut self) -> io::Result<Option<String>> {
        if !self.conceal {
            return self.lines.read_line();
        }
        terminal::enable_raw_mode()?;
        let line = read_keys(event::read);
        restore();
        // Raw mode swallowed the newline of the Enter key.
        let mut stdout = io::stdout();
        writeln!(stdout)?;
        stdout.flush()?;
        line
    }

    fn conceals(&self) -> bool {
        self.conceal
    }
}

/// Leaves raw mode if a concealed read was interrupted.
pub fn restore() {
    if let Err(err) = terminal::disable_raw_mode() {
        log::warn!("failed to restore terminal: {err}");
    }
}

/// Collects key presses into a line until Enter, without echoing them.
fn read_keys(mut next_event: impl FnMut() -> io::Result<Event>) -> io::Result<Option<String>> {
    let mut line = String::new();
    loop {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = next_event()?
        else {
            continue;
        };

        match code {
            KeyCode::Enter => return Ok(Some(line)),
            KeyCode::Backspace => {
                line.pop();
            }
            // Raw mode delivers Ctrl-C and Ctrl-D as keys, not signals.
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
            }
            KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
                if line.is_empty() {
                    return Ok(None);
                }
            }
            KeyCode::Char(c) => line.push(c),
            _ => {}
        }
    }
}
