use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use wasm_size_report::cmd;
use wasm_size_report::config::{ConfigLoader, EnvBindings, CONFIG_FILE_NAME};

/// WASM example size comparison for pull requests
///
/// `collect` measures the example bundles of a master and a pull request
/// checkout; `render` turns the result into a markdown comment for CI.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji in console output (the published report is unaffected)
    #[arg(long, global = true)]
    no_emoji: bool,

    /// Configuration file
    #[arg(long, global = true, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Interchange file (overrides the configuration file)
    #[arg(long, global = true)]
    handoff: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Measure both checkouts and write the interchange file
    Collect {
        /// Checkout of the baseline (master) build
        baseline_root: PathBuf,

        /// Checkout of the candidate (pull request) build
        candidate_root: PathBuf,
    },

    /// Render the report from the interchange file and publish it
    Render {
        /// Significance threshold as a fraction (overrides the configuration file)
        #[arg(long)]
        threshold: Option<f64>,

        /// Print the report without appending to the environment file
        #[arg(long)]
        dry_run: bool,
    },
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = ConfigLoader::load(&cli.config)?;
    if let Some(handoff) = &cli.handoff {
        config.handoff_path = handoff.clone();
    }
    let env = EnvBindings::from_process_env();

    match &cli.command {
        Commands::Collect {
            baseline_root,
            candidate_root,
        } => cmd::cmd_collect(baseline_root, candidate_root, &config, &env).map(|_| ()),
        Commands::Render { threshold, dry_run } => {
            if let Some(threshold) = threshold {
                config.threshold = *threshold;
                config.validate()?;
            }
            cmd::cmd_render(&config, &env, *dry_run).map(|_| ())
        }
    }
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_emoji {
        wasm_size_report::fmt::set_emoji_enabled(false);
    }

    if let Err(e) = run(&cli) {
        use wasm_size_report::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        process::exit(ErrorFormatter::exit_code(&e));
    }
}
