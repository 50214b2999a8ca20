use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use badgegen::cli;

#[derive(Parser)]
#[command(name = "badgegen", version)]
#[command(
    about = "Regenerate the aggregated README with pypi and CI badges for every sub-project",
    long_about = None
)]
struct Cli {
    /// Output file path (defaults to README.md one directory above the executable)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Print the document to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Print the built-in configuration as TOML and exit
    #[arg(long, conflicts_with = "dry_run")]
    print_config: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so --dry-run output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli::run(cli.output, cli.dry_run, cli.print_config)
}
