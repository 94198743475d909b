use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use depsift::config::Config;
use depsift::validate;
use tracing_subscriber::{EnvFilter, Registry, fmt::Layer, layer::SubscriberExt};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path of the Cargo project to scan. Defaults to the current working directory
    path: Option<PathBuf>,

    /// Also track dev and build dependencies
    #[arg(short, long)]
    dev: bool,

    /// Log scan diagnostics
    #[arg(short, long)]
    verbose: bool,

    /// Print the elapsed time after the report
    #[arg(short, long)]
    timer: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let default_filter = if cli.verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let subscriber = Registry::default().with(env_filter).with(
        Layer::default()
            .with_writer(std::io::stderr)
            .with_ansi(false),
    );

    tracing::subscriber::set_global_default(subscriber)?;

    let path = cli.path.unwrap_or_else(|| PathBuf::from("."));
    let project_path = validate::valid_project_path(&path)?;
    let config = Config::new(project_path, cli.dev, cli.timer);

    depsift::run(config)
}
