use crate::domain::{
    Clock, Command, Error, SettlementRequest,
    traits::{CommandStream, RejectionSink, Settlement},
};
use crate::ledger::Ledger;

use futures::StreamExt;
use tracing::{debug, info};

/// Drives user intents into the ledger it exclusively owns.
///
/// Commands are handled one at a time: a deposit or withdrawal is
/// pre-checked, handed to the settlement backend, and only applied once
/// settlement confirms. Nothing else can mutate the ledger meanwhile.
#[derive(Debug)]
pub struct Engine<I, S, D, C>
where
    I: CommandStream,
    S: Settlement,
    D: RejectionSink,
    C: Clock,
{
    ingestion: I,
    settlement: S,
    rejections: D,
    ledger: Ledger<C>,
}

impl<I, S, D, C> Engine<I, S, D, C>
where
    I: CommandStream,
    S: Settlement,
    D: RejectionSink,
    C: Clock,
{
    pub fn new(ingestion: I, settlement: S, rejections: D, ledger: Ledger<C>) -> Self {
        Self {
            ingestion,
            settlement,
            rejections,
            ledger,
        }
    }

    pub fn ledger(&self) -> &Ledger<C> {
        &self.ledger
    }

    pub async fn process(&mut self) -> Result<(), Error> {
        let mut commands = self.ingestion.stream();
        let (mut applied, mut rejected) = (0usize, 0usize);

        while let Some(cmd) = commands.next().await {
            let outcome = match cmd {
                Ok(cmd) => self.execute(cmd).await,
                Err(e) => Err(e),
            };

            match outcome {
                Ok(()) => applied += 1,
                Err(e) => {
                    rejected += 1;
                    self.rejections.report(&e);
                }
            }
        }

        info!(applied, rejected, "command stream drained");
        Ok(())
    }

    /// Validates, settles and applies a single command.
    pub async fn execute(&mut self, cmd: Command) -> Result<(), Error> {
        debug!(%cmd, "executing");

        match cmd {
            Command::Deposit { amount } => {
                self.ledger.check_deposit(amount)?;
                self.settlement
                    .settle(&SettlementRequest::Deposit { amount })
                    .await?;
                self.ledger.deposit(amount)?;
            }
            Command::Withdraw { amount } => {
                self.ledger.check_withdraw(amount)?;
                self.settlement
                    .settle(&SettlementRequest::Withdraw { amount })
                    .await?;
                self.ledger.withdraw(amount)?;
            }
            Command::AddSubscription(request) => {
                self.ledger.add_subscription(request)?;
            }
            Command::ToggleSubscription { id } => {
                self.ledger.toggle_subscription_status(id)?;
            }
        }

        Ok(())
    }
}
