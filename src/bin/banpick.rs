//! Command line front end for the ban/pick core.
//! Run with: cargo run --bin banpick -- <command>
//!
//! - `bracket`: read a CSV roster (`name,email`) and print the bracket as JSON.
//! - `turns`: print the ban/pick turn order as JSON.
//! - `draft`: run a draft from stdin, one character per line, and print the status as JSON.
//!
//! Logging goes to stderr at `info` unless overridden with RUST_LOG.

use anyhow::Context;
use banpick_tournament::{
    determine_turn, read_roster, BracketFormat, DraftSession, DraftState, Slot, Tournament,
};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

/// Ban/pick tournament tools
#[derive(Parser, Debug)]
#[command(version, about = "Ban/pick tournament brackets and draft turn order")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a bracket from a CSV roster
    Bracket {
        /// Roster file, or `-` for stdin
        #[arg(long, default_value = "-")]
        roster: String,

        /// single or double
        #[arg(long, env = "BANPICK_FORMAT", default_value = "single")]
        format: BracketFormat,

        /// Randomize seeds instead of using roster order
        #[arg(long)]
        shuffle: bool,

        /// Write the JSON here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the turn order for a draft
    Turns {
        #[command(flatten)]
        counts: Counts,
    },

    /// Run a draft, reading one character per line from stdin
    Draft {
        #[command(flatten)]
        counts: Counts,

        /// Restrict choices to these characters (comma separated)
        #[arg(long, value_delimiter = ',')]
        pool: Vec<String>,
    },
}

#[derive(clap::Args, Debug)]
struct Counts {
    #[arg(long, env = "BANPICK_BANS", default_value_t = 2)]
    bans: u32,

    #[arg(long, env = "BANPICK_PICKS", default_value_t = 2)]
    picks: u32,

    /// Player who takes the opening ban (1 or 2)
    #[arg(long, value_parser = parse_slot)]
    first: Option<Slot>,
}

fn parse_slot(s: &str) -> Result<Slot, String> {
    let n: u8 = s.parse().map_err(|_| format!("expected 1 or 2, got {s:?}"))?;
    Slot::try_from(n)
}

fn open_input(path: &str) -> anyhow::Result<Box<dyn Read>> {
    if path == "-" {
        return Ok(Box::new(io::stdin()));
    }
    let file = File::open(path).with_context(|| format!("opening roster {path}"))?;
    Ok(Box::new(file))
}

fn write_json<T: serde::Serialize>(value: &T, output: Option<&PathBuf>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?,
        None => writeln!(io::stdout(), "{json}")?,
    }
    Ok(())
}

fn run_bracket(
    roster: &str,
    format: BracketFormat,
    shuffle: bool,
    output: Option<&PathBuf>,
) -> anyhow::Result<()> {
    let players = read_roster(open_input(roster)?)?;
    log::info!("Loaded {} players", players.len());
    let mut tournament = Tournament::with_players(players, format);
    if shuffle {
        tournament.shuffle_seeds()?;
    }
    banpick_tournament::start_tournament(&mut tournament)?;
    write_json(&tournament.bracket, output)
}

fn run_draft(counts: &Counts, pool: Vec<String>) -> anyhow::Result<()> {
    let script = determine_turn(counts.bans, counts.picks, counts.first);
    let mut session = DraftSession::with_pool(script, pool);
    for line in io::stdin().lock().lines() {
        let DraftState::AwaitingTurn { player, action, .. } = session.state() else {
            break;
        };
        let line = line?;
        match session.resolve(player, line.trim()) {
            Ok(_) => log::info!("Player {player} {action:?}: {}", line.trim()),
            Err(e) => log::warn!("{e}"),
        }
    }
    if !session.is_complete() {
        log::warn!("Input ended before the draft was complete");
    }
    write_json(&session.status(), None)
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let args = Args::parse();

    match args.command {
        Command::Bracket {
            roster,
            format,
            shuffle,
            output,
        } => run_bracket(&roster, format, shuffle, output.as_ref()),
        Command::Turns { counts } => {
            write_json(&determine_turn(counts.bans, counts.picks, counts.first), None)
        }
        Command::Draft { counts, pool } => run_draft(&counts, pool),
    }
}
