use tracing::{debug, info, warn};

use crate::domain::{
    AccountError, Clock, HolderName, Money, Pin, TransactionEntry, TransactionKind,
};

#[derive(Debug)]
pub struct Account<C: Clock> {
    holder_name: HolderName,
    pin: Pin,
    balance: Money, // never negative
    transactions: Vec<TransactionEntry>,
    clock: C,
}

impl<C: Clock> Account<C> {
    /// Opens the account and logs the opening balance as its first entry.
    pub fn open(
        holder_name: HolderName,
        pin: Pin,
        opening_balance: Money,
        clock: C,
    ) -> Result<Self, AccountError> {
        if opening_balance.is_negative() {
            return Err(AccountError::NegativeAmount(opening_balance));
        }

        let mut account = Self {
            holder_name,
            pin,
            balance: opening_balance,
            transactions: Vec::new(),
            clock,
        };
        account.add_transaction(TransactionKind::Opened {
            balance: opening_balance,
        });
        info!(holder = %account.holder_name, balance = %opening_balance, "account opened");

        Ok(account)
    }

    pub fn holder_name(&self) -> &HolderName {
        &self.holder_name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn transactions(&self) -> &[TransactionEntry] {
        &self.transactions
    }

    pub fn check_pin(&self, candidate: &Pin) -> bool {
        self.pin.matches(candidate)
    }

    /// Replaces the PIN. Callers verify the current PIN first.
    pub fn set_pin(&mut self, new_pin: Pin) {
        self.pin = new_pin;
        self.add_transaction(TransactionKind::PinChanged);
        info!("pin changed");
    }

    pub fn record_login(&mut self) {
        self.add_transaction(TransactionKind::LoggedIn);
    }

    /// Returns the new balance.
    pub fn deposit(&mut self, amount: Money) -> Result<Money, AccountError> {
        if amount.is_negative() {
            return Err(AccountError::NegativeAmount(amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::BalanceOverflow)?;
        self.add_transaction(TransactionKind::Deposit { amount });
        debug!(%amount, balance = %self.balance, "deposit applied");

        Ok(self.balance)
    }

    /// Returns the new balance. An over-balance request is logged as a failed
    /// attempt and leaves the balance untouched.
    pub fn withdraw(&mut self, amount: Money) -> Result<Money, AccountError> {
        if amount.is_negative() {
            return Err(AccountError::NegativeAmount(amount));
        }

        if amount > self.balance {
            self.add_transaction(TransactionKind::FailedWithdrawal { amount });
            warn!(%amount, balance = %self.balance, "withdrawal rejected");
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(AccountError::BalanceOverflow)?;
        self.add_transaction(TransactionKind::Withdrawal { amount });
        debug!(%amount, balance = %self.balance, "withdrawal applied");

        Ok(self.balance)
    }

    fn add_transaction(&mut self, kind: TransactionKind) {
        let entry = TransactionEntry::new(self.clock.now(), kind);
        self.transactions.push(entry);
    }
}
