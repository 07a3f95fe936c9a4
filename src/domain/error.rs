use crate::domain::Money;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Input closed before the session finished")]
    InputClosed,

    #[error("Account operation failed with: {0}")]
    Account(#[from] AccountError),
}

/// Business-rule rejections raised by [`crate::domain::Account`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("Insufficient funds.")]
    InsufficientFunds { requested: Money, available: Money },

    #[error("Amount must not be negative, got ${0}.")]
    NegativeAmount(Money),

    #[error("Amount is too large for this account.")]
    BalanceOverflow,
}
