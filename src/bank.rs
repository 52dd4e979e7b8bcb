use crate::error::InvalidEntryError;
use crate::models::account::Account;

/// A flat registry of accounts, kept in registration order.
///
/// Accounts are usable on their own; the bank only enumerates the ones registered with it. There
/// is no keyed lookup and no removal.
#[derive(Debug, Default, Clone)]
pub struct Bank {
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account. An entry with a blank first or last name is rejected and the registry
    /// stays unchanged.
    pub fn add_account(&mut self, account: Account) -> Result<(), InvalidEntryError> {
        if account.first_name.trim().is_empty() || account.last_name.trim().is_empty() {
            return Err(InvalidEntryError);
        }

        self.accounts.push(account);

        Ok(())
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
