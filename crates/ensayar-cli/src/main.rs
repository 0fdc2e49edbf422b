//! Ensayar playground binary.
//!
//! Starts the interactive terminal page, or renders one frame with
//! `--once` for non-interactive use.

use clap::Parser;
use ensayar_core::{fixtures, MockApi, PlaygroundState, XorShift64};
use ensayar_terminal::{App, CrosstermBackend};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ensayar")]
#[command(about = "Interactive testing & mocking playground")]
#[command(version)]
struct Cli {
    /// Seed for the status randomizer. Falls back to ENSAYAR_SEED, then 42.
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated API latency in milliseconds, clamped to 500..=1000.
    #[arg(long, default_value_t = 500)]
    latency_ms: u64,

    /// Render a single frame to stdout and exit.
    #[arg(long)]
    once: bool,

    /// Width used with --once instead of the terminal width.
    #[arg(long, default_value_t = 100)]
    width: u16,

    /// Log filter directive, e.g. "info" or "ensayar_core=debug".
    #[arg(long, default_value = "warn")]
    log: String,
}

fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_state(cli: &Cli) -> PlaygroundState {
    let rng = cli.seed.map_or_else(XorShift64::from_env, XorShift64::new);
    let api = MockApi::default().latency(Duration::from_millis(cli.latency_ms));
    PlaygroundState::new(fixtures::sample_cases(), api, rng)
}

fn run(cli: &Cli) -> Result<(), ensayar_terminal::TuiError> {
    let runtime = tokio::runtime::Runtime::new()?;
    let state = build_state(cli);
    let mut app = App::new(CrosstermBackend::new(), state, runtime.handle().clone());

    if cli.once {
        print!("{}", app.render_plain(cli.width));
        return Ok(());
    }
    app.run()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "playground exited with an error");
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
