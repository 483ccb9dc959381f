mod api;
mod cli;
mod config;
mod dns;
mod table;
#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use api::Rage4Client;
use clap::Parser;
use cli::{parse_new_record, Cli, Command};
use config::Config;
use dns::{RecordError, RecordManager};
use log::{debug, error, LevelFilter};
use std::io::Write;
use std::process::ExitCode;

// Exit code for requests the API could not satisfy (duplicate, not found)
const LOGICAL_FAILURE: u8 = 3;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            match e.downcast_ref::<RecordError>() {
                Some(err) if err.is_logical() => ExitCode::from(LOGICAL_FAILURE),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                buf.timestamp(),
                record.level(),
                record.args()
            )
        })
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let client = Rage4Client::new(&config);
    let mut manager = RecordManager::load(client)
        .await
        .context("Failed to load domains and records")?;
    debug!(
        "Loaded {} record(s) across {} domain(s)",
        manager.records().len(),
        manager.domains().len()
    );

    match cli.command {
        Command::Create { args } => {
            let record = parse_new_record(&args)?;
            manager.add(record).await?;
        }
        Command::Show { search } => {
            let records = manager.show(&search)?;
            let stdout = std::io::stdout();
            table::write_records(&mut stdout.lock(), &records)?;
        }
        Command::Delete { name } => {
            manager.delete(&name).await?;
        }
        Command::Update { name, content } => {
            manager.update(&name, &content).await?;
        }
    }
    Ok(())
}
