use std::time::Duration;

use tracing::debug;

use crate::domain::{Error, Settlement, SettlementRequest};

/// Confirms every request immediately.
#[derive(Default, Debug, Clone, Copy)]
pub struct InstantSettlement;

impl Settlement for InstantSettlement {
    async fn settle(&self, request: &SettlementRequest) -> Result<(), Error> {
        debug!(?request, "settled instantly");
        Ok(())
    }
}

/// Confirms every request after a fixed delay on the tokio timer, standing
/// in for network and confirmation latency.
#[derive(Debug, Clone, Copy)]
pub struct DelayedSettlement {
    delay: Duration,
}

impl DelayedSettlement {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Settlement for DelayedSettlement {
    async fn settle(&self, request: &SettlementRequest) -> Result<(), Error> {
        debug!(?request, delay_ms = self.delay.as_millis() as u64, "awaiting settlement");
        tokio::time::sleep(self.delay).await;
        debug!(?request, "settled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test(start_paused = true)]
    async fn delayed_settlement_waits_for_the_delay() {
        let settlement = DelayedSettlement::new(Duration::from_secs(2));
        let started = tokio::time::Instant::now();

        settlement
            .settle(&SettlementRequest::Deposit { amount: dec!(5) })
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_secs(2));
    }
}
