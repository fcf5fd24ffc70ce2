use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::domain::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(pub u64);

impl core::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Monthly,
    Yearly,
}

impl Frequency {
    /// Length of one billing cycle, used to schedule the first charge.
    pub fn cycle_days(self) -> i64 {
        match self {
            Frequency::Monthly => 30,
            Frequency::Yearly => 365,
        }
    }

    /// Equivalent monthly cost of one cycle's `amount`. Not rounded.
    pub fn monthly_share(self, amount: Decimal) -> Decimal {
        match self {
            Frequency::Monthly => amount,
            Frequency::Yearly => amount / Decimal::from(12),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }
}

impl FromStr for Frequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(Error::InvalidInput(format!("unknown frequency '{}'", other))),
        }
    }
}

impl core::fmt::Display for Frequency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's request to register a subscription, before the ledger has
/// accepted it and assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubscription {
    pub name: String,
    pub amount: Decimal,
    pub frequency: Frequency,
    pub recipient: Option<String>,
}

impl NewSubscription {
    pub fn new(name: impl Into<String>, amount: Decimal, frequency: Frequency) -> Self {
        Self {
            name: name.into(),
            amount,
            frequency,
            recipient: None,
        }
    }

    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub name: String,
    pub amount: Decimal,
    pub frequency: Frequency,
    pub next_payment: DateTime<Utc>,
    pub is_active: bool,
    pub recipient: Option<String>,
}

impl Subscription {
    /// Builds an active record whose first charge falls one cycle after `created_at`.
    pub(crate) fn open(
        id: SubscriptionId,
        request: NewSubscription,
        created_at: DateTime<Utc>,
    ) -> Self {
        let next_payment = created_at + Duration::days(request.frequency.cycle_days());
        let recipient = request
            .recipient
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());

        Self {
            id,
            name: request.name.trim().to_string(),
            amount: request.amount,
            frequency: request.frequency,
            next_payment,
            is_active: true,
            recipient,
        }
    }

    /// Contribution to the monthly estimate; zero while paused.
    pub fn monthly_cost(&self) -> Decimal {
        if self.is_active {
            self.frequency.monthly_share(self.amount)
        } else {
            Decimal::ZERO
        }
    }
}

impl core::fmt::Display for Subscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "id={},name={},amount={},frequency={},active={}",
            self.id, self.name, self.amount, self.frequency, self.is_active
        )
    }
}
