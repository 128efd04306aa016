//! Command-line front end that plays Wumpus World on the console.

mod render;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use wumpus_kb::Session;
use wumpus_rules::{parse_level, Command, RulesConfig};

/// Hunt the Wumpus on a grid loaded from a level file.
#[derive(Debug, Parser)]
#[command(name = "wumpus", version, about)]
struct Cli {
    /// Level file: comma-separated rows, top row first.
    level: PathBuf,

    /// TOML file overriding the start room and orientation.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the knowledge snapshot after every turn.
    #[arg(long, default_value = "kb.dat")]
    snapshot: PathBuf,
}

fn load_config(path: Option<&Path>) -> Result<RulesConfig> {
    let Some(path) = path else {
        return Ok(RulesConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    RulesConfig::from_toml_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

fn write_snapshot(session: &Session, path: &Path) -> Result<()> {
    let json = session.snapshot().to_json()?;
    fs::write(path, json).with_context(|| format!("failed to write snapshot {}", path.display()))
}

/// Entry point for the Wumpus World command-line interface.
fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.level)
        .with_context(|| format!("failed to read level {}", cli.level.display()))?;
    let grid = parse_level(&text).context("invalid level")?;
    let config = load_config(cli.config.as_deref())?;
    let mut session = Session::new(grid, &config).context("failed to start session")?;
    log::info!("session {} started", session.id());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    while !session.is_over() {
        let report = session.observe()?;
        write_snapshot(&session, &cli.snapshot)?;

        let wumpus_dead = session.state().wumpus_dead;
        println!("{}", render::location(session.state()));
        for line in render::percepts(&report.percepts, wumpus_dead) {
            println!("{}", line);
        }
        for line in render::hints(&report.hints, wumpus_dead) {
            println!("{}", line);
        }

        let command = loop {
            println!("{}", render::PROMPT);
            stdout.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                log::info!("input closed, leaving session {}", session.id());
                println!("{}", render::FAREWELL);
                return Ok(());
            }
            match line.parse::<Command>() {
                Ok(command) => break command,
                Err(err) => {
                    log::debug!("{}", err);
                    println!("Invalid command! Please choose from [R,L,F,S]!\n");
                }
            }
        };

        let transition = session.apply(command);
        if let Some(message) = render::outcome(transition.outcome) {
            println!("{}", message);
        }
    }

    log::info!("session {} ended: {:?}", session.id(), session.state().status());
    println!("{}", render::FAREWELL);
    Ok(())
}
