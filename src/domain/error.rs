use rust_decimal::Decimal;

use crate::domain::SubscriptionId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Subscription {0} not found")]
    NotFound(SubscriptionId),

    #[error("Settlement failed with: {0}")]
    Settlement(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
