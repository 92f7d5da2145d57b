use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use separator_viz::{run_app, SeparatorConfig};

/// Interactive editor for red/blue point sets and their separators.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML config file (defaults to ~/.separator-viz/config.yaml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of the separator service
    #[arg(long)]
    api_url: Option<String>,

    /// Ask the service to persist every computation
    #[arg(long)]
    save_to_db: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let cfg = SeparatorConfig::load(args.config.as_deref()).and_then(|mut cfg| {
        cfg.apply_cli(args.api_url, args.save_to_db)?;
        Ok(cfg)
    });
    let cfg = match cfg {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    match run_app(cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
