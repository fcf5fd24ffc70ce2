use rust_decimal::Decimal;

use crate::domain::{NewSubscription, SubscriptionId};

/// A user intent against the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Deposit { amount: Decimal },
    Withdraw { amount: Decimal },
    AddSubscription(NewSubscription),
    ToggleSubscription { id: SubscriptionId },
}

impl Command {
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Deposit { .. } => "deposit",
            Command::Withdraw { .. } => "withdraw",
            Command::AddSubscription(_) => "add",
            Command::ToggleSubscription { .. } => "toggle",
        }
    }
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Command::Deposit { amount } | Command::Withdraw { amount } => {
                write!(f, "{},amount={}", self.kind(), amount)
            }
            Command::AddSubscription(request) => write!(
                f,
                "{},name={},amount={},frequency={}",
                self.kind(),
                request.name,
                request.amount,
                request.frequency
            ),
            Command::ToggleSubscription { id } => write!(f, "{},id={}", self.kind(), id),
        }
    }
}
