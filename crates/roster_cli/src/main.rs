//! `roster` - terminal front end for the employee roster.
//!
//! # Responsibility
//! - Parse arguments, load configuration and start file logging.
//! - Build the in-memory roster and hand it to a command or the shell.

mod cli;
mod shell;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use roster_core::{
    init_logging, sample_roster, IdGenerator, InMemoryEmployeeRepository, RosterApp,
    RosterConfig, RosterService, SequentialIdGenerator, UuidIdGenerator,
};

use crate::cli::{Cli, Command, ConfigCommand, ListCommand};
use crate::shell::Shell;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = RosterConfig::load_from(cli.config.clone()).context("loading configuration")?;
    let config = cli
        .apply_overrides(config)
        .context("applying command-line overrides")?;

    let log_dir = config.log_dir();
    if let Err(err) = init_logging(&config.logging.level, &log_dir) {
        // Logging is best-effort; the roster works without it.
        eprintln!("warning: file logging disabled: {err}");
    }

    let session = match split_command(cli.command) {
        Ok(session) => session,
        Err(config_cmd) => return handle_config(&config, config_cmd),
    };

    if config.roster.sequential_ids {
        run(&config, SequentialIdGenerator::default(), session)
    } else {
        run(&config, UuidIdGenerator, session)
    }
}

/// Commands that need a roster.
#[derive(Debug)]
enum Session {
    List(ListCommand),
    Interactive,
}

/// Separates roster sessions from `config` commands; no command means the shell.
fn split_command(command: Option<Command>) -> Result<Session, ConfigCommand> {
    match command {
        None | Some(Command::Shell) => Ok(Session::Interactive),
        Some(Command::List(list_cmd)) => Ok(Session::List(list_cmd)),
        Some(Command::Config(config_cmd)) => Err(config_cmd),
    }
}

fn run<G: IdGenerator>(config: &RosterConfig, ids: G, session: Session) -> Result<()> {
    let repo = if config.roster.seed_sample_data {
        InMemoryEmployeeRepository::with_employees(sample_roster())
            .context("seeding sample roster")?
    } else {
        InMemoryEmployeeRepository::new()
    };
    let mut app =
        RosterApp::new(RosterService::new(repo, ids)).with_date_format(&config.display.date_format);

    match session {
        Session::List(list_cmd) => handle_list(&mut app, &list_cmd),
        Session::Interactive => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(&mut app, stdin.lock(), stdout.lock())
                .run()
                .context("running interactive session")
        }
    }
}

fn handle_list<G: IdGenerator>(
    app: &mut RosterApp<InMemoryEmployeeRepository, G>,
    cmd: &ListCommand,
) -> Result<()> {
    if let Some(query) = &cmd.query {
        app.set_search_query(query.as_str());
    }

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&app.visible())?);
    } else {
        print!("{}", app.render());
    }
    Ok(())
}

fn handle_config(config: &RosterConfig, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Logging]");
                println!("  Level:              {}", config.logging.level);
                println!("  Directory:          {}", config.log_dir().display());
                println!();
                println!("[Display]");
                println!("  Date format:        {}", config.display.date_format);
                println!();
                println!("[Roster]");
                println!("  Seed sample data:   {}", config.roster.seed_sample_data);
                println!("  Sequential ids:     {}", config.roster.sequential_ids);
            }
        }
        ConfigCommand::Path => {
            println!("{}", RosterConfig::default_config_path().display());
        }
    }
    Ok(())
}
