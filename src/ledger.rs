use rust_decimal::Decimal;
use tracing::info;

use crate::clock::SystemClock;
use crate::domain::{
    Clock, Error, NewSubscription, Subscription, SubscriptionId, VaultAccount,
};

/// Sole owner of the vault balance and the subscription set.
///
/// Every mutation validates before it applies, so a failed call never
/// leaves a partial change behind. Deposits, withdrawals and new
/// subscriptions expose that validation as `check_*` so a caller can
/// reject an intent before settling it.
///
/// The monthly shares of all subscriptions, active or paused, always sum
/// to a value that fits in a `Decimal`, so any toggle keeps the estimate
/// representable.
#[derive(Debug)]
pub struct Ledger<C: Clock = SystemClock> {
    account: VaultAccount,
    subscriptions: Vec<Subscription>,
    next_id: u64,
    clock: C,
}

impl<C: Clock> Ledger<C> {
    pub fn new(clock: C) -> Self {
        Self {
            account: VaultAccount::default(),
            subscriptions: Vec::new(),
            next_id: 1,
            clock,
        }
    }

    pub fn with_opening_balance(balance: Decimal, clock: C) -> Result<Self, Error> {
        Ok(Self {
            account: VaultAccount::with_opening_balance(balance)?,
            ..Self::new(clock)
        })
    }

    pub fn balance(&self) -> Decimal {
        self.account.balance()
    }

    /// All subscriptions in creation order.
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn subscription(&self, id: SubscriptionId) -> Option<&Subscription> {
        self.subscriptions.iter().find(|s| s.id == id)
    }

    pub fn check_deposit(&self, amount: Decimal) -> Result<(), Error> {
        ensure_positive(amount)?;

        if self.balance().checked_add(amount).is_none() {
            return Err(Error::InvalidAmount(format!(
                "depositing {} would overflow the balance {}",
                amount,
                self.balance()
            )));
        }
        Ok(())
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, Error> {
        self.check_deposit(amount)?;

        self.account.credit(amount);
        info!(%amount, balance = %self.balance(), "deposit applied");
        Ok(self.balance())
    }

    pub fn check_withdraw(&self, amount: Decimal) -> Result<(), Error> {
        ensure_positive(amount)?;

        if amount > self.balance() {
            return Err(Error::InsufficientBalance {
                requested: amount,
                available: self.balance(),
            });
        }
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, Error> {
        self.check_withdraw(amount)?;

        self.account.debit(amount);
        info!(%amount, balance = %self.balance(), "withdrawal applied");
        Ok(self.balance())
    }

    pub fn check_new_subscription(&self, request: &NewSubscription) -> Result<(), Error> {
        if request.name.trim().is_empty() {
            return Err(Error::InvalidInput(
                "subscription name must not be empty".to_string(),
            ));
        }
        if request.amount <= Decimal::ZERO {
            return Err(Error::InvalidInput(format!(
                "subscription amount must be positive, got {}",
                request.amount
            )));
        }

        let committed = self
            .subscriptions
            .iter()
            .try_fold(Decimal::ZERO, |acc, s| {
                acc.checked_add(s.frequency.monthly_share(s.amount))
            });
        let share = request.frequency.monthly_share(request.amount);
        if committed.and_then(|total| total.checked_add(share)).is_none() {
            return Err(Error::InvalidInput(format!(
                "subscription amount {} is too large for the monthly total",
                request.amount
            )));
        }
        Ok(())
    }

    pub fn add_subscription(&mut self, request: NewSubscription) -> Result<&Subscription, Error> {
        self.check_new_subscription(&request)?;

        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let subscription = Subscription::open(id, request, self.clock.now());
        info!(%subscription, next_payment = %subscription.next_payment, "subscription added");

        self.subscriptions.push(subscription);
        self.subscription(id).ok_or(Error::NotFound(id))
    }

    pub fn toggle_subscription_status(
        &mut self,
        id: SubscriptionId,
    ) -> Result<&Subscription, Error> {
        let subscription = self
            .subscriptions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(Error::NotFound(id))?;

        subscription.is_active = !subscription.is_active;
        info!(%id, active = subscription.is_active, "subscription toggled");
        Ok(&*subscription)
    }

    /// Active subscriptions normalized to a monthly figure; yearly plans
    /// count as a twelfth of their amount. No rounding is applied.
    pub fn monthly_spend_estimate(&self) -> Decimal {
        self.subscriptions
            .iter()
            .try_fold(Decimal::ZERO, |acc, s| acc.checked_add(s.monthly_cost()))
            // add_subscription keeps the total of every share representable
            .unwrap_or(Decimal::MAX)
    }

    pub fn active_subscription_count(&self) -> usize {
        self.subscriptions.iter().filter(|s| s.is_active).count()
    }
}

fn ensure_positive(amount: Decimal) -> Result<(), Error> {
    if amount <= Decimal::ZERO {
        return Err(Error::InvalidAmount(format!(
            "amount must be positive, got {}",
            amount
        )));
    }
    Ok(())
}
