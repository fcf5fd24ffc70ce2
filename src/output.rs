use std::io::Write;

use crate::domain::money::{self, CURRENCY};
use crate::domain::{Clock, Error, OutputSink};
use crate::ledger::Ledger;

/// Renders the dashboard view of a ledger as two CSV sections: the vault
/// summary line and the subscription table.
#[derive(Debug)]
pub struct SummaryWriter<W: Write> {
    out: W,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl SummaryWriter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> OutputSink for SummaryWriter<W> {
    fn flush<C: Clock>(&mut self, ledger: &Ledger<C>) -> Result<(), Error> {
        // Sections differ in width, so the writer must not enforce a fixed record length.
        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(&mut self.out);

        wtr.write_record(["balance", "active_subscriptions", "monthly_estimate", "currency"])?;
        wtr.write_record([
            money::display(ledger.balance()),
            ledger.active_subscription_count().to_string(),
            money::display(ledger.monthly_spend_estimate()),
            CURRENCY.to_string(),
        ])?;

        wtr.write_record([
            "id",
            "name",
            "amount",
            "frequency",
            "next_payment",
            "active",
            "recipient",
        ])?;
        for sub in ledger.subscriptions() {
            wtr.write_record([
                sub.id.to_string(),
                sub.name.clone(),
                money::display(sub.amount),
                sub.frequency.to_string(),
                sub.next_payment.format("%Y-%m-%d").to_string(),
                sub.is_active.to_string(),
                sub.recipient.clone().unwrap_or_default(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
