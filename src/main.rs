//! wayfile - a small file manager with navigation history and a clipboard.
//!
//! Usage:
//!   wayfile [PATH]           Start an interactive session
//!   wayfile list [PATH]      Print one listing and exit
//!   wayfile --help           Show help

mod shell;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use wayfile_core::{ConflictPolicy, Location, SessionConfig};
use wayfile_ops::{StdFileSystem, list_location};
use wayfile_session::Session;

use crate::shell::{Shell, TextPresenter};

#[derive(Parser)]
#[command(
    name = "wayfile",
    version,
    about = "A small file manager with navigation history and a clipboard",
    long_about = "wayfile browses drives and directories, and copies, moves, renames, \
                  creates and deletes files and folders.\n\n\
                  Run `wayfile [PATH]` for an interactive session (type `help` there), \
                  or `wayfile list [PATH]` for a one-off listing."
)]
struct Cli {
    /// Directory to start in (defaults to the drive list)
    path: Option<PathBuf>,

    /// List entries whose name starts with a dot
    #[arg(short = 'a', long)]
    show_hidden: bool,

    /// Send deletions to the trash instead of removing them
    #[arg(short, long)]
    trash: bool,

    /// What a move-paste does when the name is taken
    #[arg(short, long, default_value_t = ConflictPolicy::Reject)]
    move_conflict: ConflictPolicy,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List a directory (or the drives) and exit
    List {
        /// Directory to list (defaults to the drive list)
        path: Option<PathBuf>,

        /// Include dot-entries
        #[arg(short = 'a', long)]
        all: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::List { path, all, format }) => {
            run_list(path.as_deref(), all, format)?;
        }
        None => {
            let start = match cli.path {
                Some(path) => Some(path.canonicalize().context("Invalid path")?),
                None => None,
            };
            let config = SessionConfig::builder()
                .start(start)
                .show_hidden(cli.show_hidden)
                .use_trash(cli.trash)
                .move_conflict(cli.move_conflict)
                .build()?;
            run_interactive(config)?;
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (warnings by default).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);
    if let Err(e) = subscriber.try_init() {
        eprintln!("Failed to init tracing subscriber: {e}");
    }
}

/// Print a single listing.
fn run_list(path: Option<&Path>, all: bool, format: OutputFormat) -> Result<()> {
    let location = match path {
        Some(path) => Location::directory(path.canonicalize().context("Invalid path")?),
        None => Location::Drives,
    };

    let entries = list_location(&StdFileSystem, &location, all)
        .with_context(|| format!("Failed to list {location}"))?;

    match format {
        OutputFormat::Text => {
            println!("{location}");
            for entry in &entries {
                let marker = if entry.is_dir() { "/" } else { "" };
                println!("  {}{}", entry.name, marker);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}

/// Read commands from stdin until `quit` or end of input.
fn run_interactive(config: SessionConfig) -> Result<()> {
    let session = Session::new(StdFileSystem, TextPresenter::new(io::stdout()), config);
    let mut shell = Shell::new(session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}> ", shell.prompt());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        if !shell.handle_line(&line?) {
            break;
        }
    }

    Ok(())
}
