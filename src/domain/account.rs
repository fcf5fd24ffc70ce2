use rust_decimal::Decimal;

use crate::domain::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaultAccount {
    balance: Decimal, // never negative
}

impl VaultAccount {
    pub fn with_opening_balance(balance: Decimal) -> Result<Self, Error> {
        if balance < Decimal::ZERO {
            return Err(Error::InvalidAmount(format!(
                "opening balance {} is negative",
                balance
            )));
        }
        Ok(Self { balance })
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Callers must have confirmed `balance + amount` fits in a `Decimal`.
    pub(crate) fn credit(&mut self, amount: Decimal) {
        self.balance += amount;
    }

    pub(crate) fn debit(&mut self, amount: Decimal) {
        debug_assert!(amount <= self.balance);
        self.balance -= amount;
    }
}
