mod command;
mod error;
mod functions;
mod pages;
mod paths;
mod render;
mod settings;
mod shell;

use std::fs;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use labdesk_lib::LabDeskClient;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;

use crate::error::CliError;
use crate::settings::Settings;
use crate::shell::Shell;

/// Console front end for the LabDesk laboratory-work backend.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Backend REST API root, e.g. http://localhost:8080/api
    #[arg(long)]
    base_url: Option<String>,

    /// Additional configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,

    /// Page to open first
    #[arg(long, default_value = "labworks")]
    page: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let mut settings = Settings::load(args.config.as_deref())?;
    settings.override_with(args.base_url, args.log_level);
    init_logging(settings.level_filter()?)?;
    log::info!("Starting with {settings:?}");

    let client = LabDeskClient::builder()
        .url(settings.base_url.clone())
        .timeout(settings.request_timeout())
        .connect_timeout(settings.connect_timeout())
        .build()?;

    let mut shell = Shell::new(client);
    shell.select(&args.page).await?;
    shell.run().await
}

/// Logs to `latest.log` in the cache directory, archiving the previous run's log.
fn init_logging(level: LevelFilter) -> Result<(), CliError> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    let Some(path) = paths::log_file() else {
        eprintln!("No home directory found, logging disabled");
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    paths::rotate_logs();

    let file = File::create(&path)?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}
