use clap::{Parser, Subcommand};
use eyre::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tasknotes::{Config, Shell};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tasknotes")]
#[command(about = "TaskNotes - keep tasks and notes for the length of a session")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to a YAML config file (default: <config dir>/tasknotes/config.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" (overrides the config file and RUST_LOG)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Trim whitespace around comma separated tags and drop empty ones
    #[arg(long)]
    trim_tags: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin (default)
    Shell,

    /// Read commands from a script file
    Run {
        /// File with one command or answer per line
        script: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if cli.trim_tags {
        config.trim_tags = true;
    }
    if cli.no_color {
        config.color = false;
    }

    // Setup tracing
    init_tracing(cli.log_level.as_deref().or(config.log_level.as_deref()))?;

    let mut shell = Shell::new(config);
    let stdout = io::stdout();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            shell.run(io::stdin().lock(), stdout.lock())?;
        }
        Commands::Run { script } => {
            let file = File::open(&script).with_context(|| format!("Failed to open script {}", script.display()))?;
            shell.run(BufReader::new(file), stdout.lock())?;
        }
    }

    Ok(())
}

fn init_tracing(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(directive) => EnvFilter::try_new(directive).context("Invalid log level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    Ok(())
}
