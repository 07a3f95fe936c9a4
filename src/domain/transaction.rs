use chrono::NaiveDateTime;

use crate::domain::Money;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Opened { balance: Money },
    Deposit { amount: Money },
    Withdrawal { amount: Money },
    FailedWithdrawal { amount: Money },
    PinChanged,
    LoggedIn,
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransactionKind::Opened { balance } => {
                write!(f, "Account created with opening balance ${}", balance)
            }
            TransactionKind::Deposit { amount } => write!(f, "Deposited ${}", amount),
            TransactionKind::Withdrawal { amount } => write!(f, "Withdrew ${}", amount),
            TransactionKind::FailedWithdrawal { amount } => {
                write!(f, "Failed withdrawal attempt of ${}", amount)
            }
            TransactionKind::PinChanged => f.write_str("PIN changed"),
            TransactionKind::LoggedIn => f.write_str("User logged in"),
        }
    }
}

/// One immutable line of the account history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEntry {
    timestamp: NaiveDateTime,
    kind: TransactionKind,
}

impl TransactionEntry {
    pub fn new(timestamp: NaiveDateTime, kind: TransactionKind) -> Self {
        Self { timestamp, kind }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }
}

impl core::fmt::Display for TransactionEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.timestamp().format(TIMESTAMP_FORMAT),
            self.kind()
        )
    }
}
