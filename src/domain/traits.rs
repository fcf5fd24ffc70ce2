use std::future::Future;

use chrono::{DateTime, Utc};
use futures::Stream;
use rust_decimal::Decimal;

use crate::domain::{Command, Error};
use crate::ledger::Ledger;

pub trait CommandStream {
    type CmdStream: Stream<Item = Result<Command, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::CmdStream;
}

pub trait RejectionSink {
    fn report(&self, error: &Error);
}

pub trait OutputSink {
    fn flush<C: Clock>(&mut self, ledger: &Ledger<C>) -> Result<(), Error>;
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// A balance-affecting operation awaiting confirmation from the settlement backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementRequest {
    Deposit { amount: Decimal },
    Withdraw { amount: Decimal },
}

/// The external backend (chain, custodian) that must confirm a deposit or
/// withdrawal before the ledger applies it.
///
/// Dropping the returned future abandons the operation; the ledger is only
/// touched after it resolves to `Ok`.
pub trait Settlement {
    fn settle(
        &self,
        request: &SettlementRequest,
    ) -> impl Future<Output = Result<(), Error>> + Send;
}
