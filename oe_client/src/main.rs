//! Play odds and evens with balls on one terminal.
//!
//! Two players take turns hiding balls and guessing whether the hidden
//! number is odd or even until one of them has no balls left.

use anyhow::{Context, Result};
use ctrlc::set_handler;
use log::info;
use odds_evens::{
    Balls,
    console::{Console, ConsoleError},
};
use pico_args::Arguments;
use std::io::{self, ErrorKind};

use oe_client::{
    config::ClientConfig,
    terminal::{self, TerminalSource},
};

const HELP: &str = "\
Play odds and evens with balls

USAGE:
  oe_client [OPTIONS]

OPTIONS:
  --balls N             Balls each player starts with  [default: env ODDS_EVENS_BALLS or 10]

FLAGS:
  --no-conceal          Echo hidden numbers and bets as they are typed
  -h, --help            Print help information

ENVIRONMENT:
  ODDS_EVENS_BALLS      Starting balls per player
  ODDS_EVENS_NO_CONCEAL Set to true to echo numbers
  RUST_LOG              Log level written to stderr (e.g. debug)
";

struct Args {
    balls: Option<Balls>,
    no_conceal: bool,
}

fn main() -> Result<()> {
    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        balls: pargs
            .opt_value_from_str("--balls")
            .context("--balls must be a whole number")?,
        no_conceal: pargs.contains("--no-conceal"),
    };

    // Catching signals for exit.
    set_handler(|| {
        terminal::restore();
        std::process::exit(130);
    })?;

    env_logger::builder().format_target(false).init();

    let config = ClientConfig::from_env(args.balls, args.no_conceal);
    config.validate()?;
    info!(
        "starting with {} balls each, concealed entry {}",
        config.settings.starting_balls,
        if config.conceal { "on" } else { "off" }
    );

    run(config)
}

fn run(config: ClientConfig) -> Result<()> {
    let mut console = Console::new(TerminalSource::new(config.conceal), io::stdout());
    match odds_evens::play(config.settings, &mut console) {
        Ok(game) => {
            info!("game finished after {} turns", game.turns_played());
            Ok(())
        }
        Err(ConsoleError::Io(err)) if err.kind() == ErrorKind::Interrupted => {
            std::process::exit(130);
        }
        Err(err) => Err(err).context("game aborted"),
    }
}
