use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;

use crate::domain::Error;
use crate::domain::money::parse_amount;

/// Replays a CSV file of vault commands and prints the resulting dashboard.
#[derive(Parser, Debug, Clone)]
#[command(name = "subscription_vault", version)]
pub struct Config {
    /// CSV file with a `type, amount, name, frequency, recipient, id` header.
    pub input: PathBuf,

    /// Balance the vault starts with.
    #[arg(long, env = "VAULT_OPENING_BALANCE", default_value = "0", value_parser = opening_balance)]
    pub opening_balance: Decimal,

    /// Simulated settlement latency for deposits and withdrawals.
    #[arg(long, env = "VAULT_SETTLEMENT_DELAY_MS", default_value_t = 0)]
    pub settlement_delay_ms: u64,

    /// Default log filter when `RUST_LOG` is not set.
    #[arg(long, env = "VAULT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "VAULT_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn settlement_delay(&self) -> Option<Duration> {
        (self.settlement_delay_ms > 0).then(|| Duration::from_millis(self.settlement_delay_ms))
    }
}

fn opening_balance(s: &str) -> Result<Decimal, Error> {
    let balance = parse_amount(s)?;
    if balance < Decimal::ZERO {
        return Err(Error::Config(format!("opening balance {} is negative", balance)));
    }
    Ok(balance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_apply() {
        let config = Config::try_parse_from(["subscription_vault", "commands.csv"]).unwrap();
        assert_eq!(config.input, PathBuf::from("commands.csv"));
        assert_eq!(config.opening_balance, Decimal::ZERO);
        assert_eq!(config.settlement_delay(), None);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "subscription_vault",
            "commands.csv",
            "--opening-balance",
            "100.00",
            "--settlement-delay-ms",
            "2000",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(config.opening_balance, dec!(100.00));
        assert_eq!(config.settlement_delay(), Some(Duration::from_secs(2)));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn negative_opening_balance_is_rejected_by_the_value_parser() {
        let err = Config::try_parse_from([
            "subscription_vault",
            "x.csv",
            "--opening-balance=-1",
        ])
        .unwrap_err()
        .to_string();
        assert!(err.contains("negative"), "{err}");
    }

    #[test]
    fn non_numeric_opening_balance_is_rejected() {
        let err = Config::try_parse_from([
            "subscription_vault",
            "x.csv",
            "--opening-balance=lots",
        ])
        .unwrap_err()
        .to_string();
        assert!(err.contains("not a number"), "{err}");
    }
}
