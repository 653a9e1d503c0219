//! CLI definitions and entry point

use std::io;
use std::path::PathBuf;

use clap::Parser;

use attendease::AttendanceManager;
use attendease::config::Config;
use attendease::models::DuplicatePolicy;
use attendease::output::OutputMode;
use attendease::session::Session;

/// attendease - Track student attendance per subject
#[derive(Parser, Debug)]
#[command(
    name = "attendease",
    version,
    about = "Track student attendance per subject",
    long_about = "Interactive attendance tracker.\n\n\
                  Add students, enroll them in subjects and mark attendance from a menu.\n\
                  All data is kept in memory and lost on exit."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Render attendance queries and student listings as JSON
    #[arg(long)]
    pub json: bool,

    /// Duplicate handling for student ids and subject names: overwrite, keep
    #[arg(long = "on-duplicate")]
    pub on_duplicate: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The menu shares the terminal with logs, so stay quiet unless asked
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let config = Config::load_optional(cli.config.as_deref())?;

    let policy: DuplicatePolicy = cli
        .on_duplicate
        .as_deref()
        .map(str::parse::<DuplicatePolicy>)
        .transpose()
        .map_err(|e: String| anyhow::anyhow!(e))?
        .unwrap_or(config.on_duplicate);

    let output_mode = if cli.json || config.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    log::debug!("starting session, duplicate policy {policy}, output {output_mode:?}");

    let stdin = io::stdin();
    let mut session = Session::new(
        AttendanceManager::with_policy(policy),
        stdin.lock(),
        io::stdout(),
        output_mode,
    );
    session.run()?;
    Ok(())
}
