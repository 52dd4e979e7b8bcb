pub use crate::bank::Bank;
pub use crate::csv::{CsvDecoder, CsvEncoder};
pub use crate::error::{InvalidDateError, InvalidEntryError};
pub use crate::models::Amount;
pub use crate::models::account::Account;
pub use crate::models::date::StatementDate;
pub use crate::models::transaction::{Operation, Transaction, TransactionKind};
