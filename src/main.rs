use std::fs::File;

use clap::Parser;

use subscription_vault::clock::SystemClock;
use subscription_vault::config::Config;
use subscription_vault::dlq::LogRejections;
use subscription_vault::domain::{Error, OutputSink, Settlement};
use subscription_vault::engine::Engine;
use subscription_vault::ingestion::CsvReader;
use subscription_vault::ledger::Ledger;
use subscription_vault::logging::init_logging;
use subscription_vault::output::SummaryWriter;
use subscription_vault::settlement::{DelayedSettlement, InstantSettlement};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    init_logging(&config.log_level, config.log_format);

    match config.settlement_delay() {
        Some(delay) => run(&config, DelayedSettlement::new(delay)).await?,
        None => run(&config, InstantSettlement).await?,
    }

    Ok(())
}

async fn run<S: Settlement>(config: &Config, settlement: S) -> Result<(), Error> {
    let file = File::open(&config.input)?;
    let ledger = Ledger::with_opening_balance(config.opening_balance, SystemClock)?;

    let mut engine = Engine::new(
        CsvReader::new(file),
        settlement,
        LogRejections::default(),
        ledger,
    );
    engine.process().await?;

    SummaryWriter::stdout().flush(engine.ledger())
}
