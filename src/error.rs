use thiserror::Error;

/// Returned by [deposit](crate::models::account::Account::deposit) and
/// [withdraw](crate::models::account::Account::withdraw) when the supplied date does not have the
/// `dd/mm/yyyy` shape. The operation records nothing when this is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid date, must be dd/mm/yyyy")]
pub struct InvalidDateError;

/// Returned by [add_account](crate::bank::Bank::add_account) when the entry is missing a holder
/// name. The registry is left unchanged when this is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid entry")]
pub struct InvalidEntryError;
