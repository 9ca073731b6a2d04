use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use typings_publisher::config::PublisherConfig;
use typings_publisher::publish::runner::NpmRunner;

#[derive(Parser)]
#[command(name = "typings-publisher")]
#[command(version, about = "Republish typings whenever the tracked package releases")]
struct Cli {
    /// Directory holding package.json and the checkpoint file
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,

    /// Optional JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List versions newer than the checkpoint without publishing
    Pending,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    typings_publisher::log::init()?;

    let config = match &cli.config {
        Some(path) => PublisherConfig::load(path)?,
        None => PublisherConfig::default(),
    };

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli, config))
}

async fn run(cli: Cli, config: PublisherConfig) -> anyhow::Result<ExitCode> {
    let runner = NpmRunner::from_config(&cli.project_dir, &config)?;

    match cli.command {
        Some(Command::Pending) => {
            let pending = runner.pending().await?;
            if pending.is_empty() {
                info!("No new {} versions", config.package);
            }
            for version in pending {
                println!("{}", version);
            }
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let summary = runner.run().await?;
            match summary.failure {
                Some((version, e)) => {
                    error!("Stopped at {} version {}: {}", config.package, version, e);
                    Ok(ExitCode::FAILURE)
                }
                None => {
                    info!("Published {} version(s)", summary.published.len());
                    Ok(ExitCode::SUCCESS)
                }
            }
        }
    }
}
