//! # CLI Layer
//!
//! One possible client of the library, and the only place that knows about
//! stdin, stdout, stderr and exit codes.
//!
//! Two modes:
//! - **one-shot**: `bookopedia edit 1 p/98765432` runs the command, prints
//!   the outcome and exits non-zero on error
//! - **interactive**: with no command, reads commands from stdin one per line
//!   until `exit` or end of input; errors are printed and the loop goes on
//!
//! Logs go to stderr so stdout carries only command output.

mod render;
mod setup;

use bookopedia::api::BookopediaApi;
use bookopedia::config::AppConfig;
use bookopedia::error::{BookopediaError, Result};
use bookopedia::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use render::{print_error, print_result};
use setup::Cli;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;

    let (config, config_error) = match AppConfig::load(&data_dir) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    init_logging(&config, cli.verbose);
    if let Some(e) = config_error {
        warn!(error = %e, "could not read config.json, using defaults");
    }

    let store = FileStore::new(config.data_path(&data_dir));
    debug!(path = %store.path().display(), "opening address book");
    let mut api = BookopediaApi::new(store)?;

    match cli.command_line() {
        Some(line) => run_once(&mut api, &line),
        None => run_interactive(&mut api),
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    ProjectDirs::from("com", "bookopedia", "bookopedia")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BookopediaError::Store("Could not determine data directory".to_string()))
}

fn init_logging(config: &AppConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run_once(api: &mut BookopediaApi<FileStore>, line: &str) -> Result<()> {
    let result = api.execute(line)?;
    print_result(&result);
    Ok(())
}

fn run_interactive(api: &mut BookopediaApi<FileStore>) -> Result<()> {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    if prompt {
        println!("Bookopedia: type `help` for commands, `exit` to quit.");
    }

    let mut lines = stdin.lock().lines();
    loop {
        if prompt {
            print!("> ");
            io::stdout().flush().map_err(BookopediaError::Io)?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(BookopediaError::Io)?;
        if line.trim().is_empty() {
            continue;
        }

        match api.execute(&line) {
            Ok(result) => {
                print_result(&result);
                if result.exit {
                    break;
                }
            }
            Err(e @ (BookopediaError::Parse(_) | BookopediaError::Command(_))) => print_error(&e),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
