pub mod account;
pub mod credentials;
pub mod error;
pub mod money;
pub mod traits;
pub mod transaction;

pub use account::Account;
pub use credentials::{HolderName, Pin};
pub use error::{AccountError, Error};
pub use money::Money;
pub use traits::{Clock, LineSource};
pub use transaction::{TransactionEntry, TransactionKind};
