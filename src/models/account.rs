use rust_decimal::Decimal;

use crate::error::InvalidDateError;
use crate::models::Amount;
use crate::models::date::StatementDate;
use crate::models::transaction::{Transaction, TransactionKind};

/// This type represents the holder's account: a name and an append-only log of transactions in
/// operation order.
///
/// The balance is never stored. It is derived from the log on demand, so there is no second piece
/// of state that could drift from the recorded transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub first_name: String,
    pub last_name: String,
    transactions: Vec<Transaction>,
}

impl Account {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            transactions: Vec::new(),
        }
    }

    /// Records a credit of `amount` on `date`.
    ///
    /// The date is validated before anything is appended, so a failed deposit leaves the
    /// transaction log untouched.
    pub fn deposit(&mut self, amount: Decimal, date: &str) -> Result<(), InvalidDateError> {
        let date = StatementDate::parse(date)?;

        self.transactions
            .push(Transaction::new(TransactionKind::Credit, Amount::new(amount), date));

        Ok(())
    }

    /// Records a debit of `amount` on `date`. Same date validation as [Account::deposit].
    ///
    /// There is no sufficient-funds check; the balance is allowed to go negative.
    pub fn withdraw(&mut self, amount: Decimal, date: &str) -> Result<(), InvalidDateError> {
        let date = StatementDate::parse(date)?;

        self.transactions
            .push(Transaction::new(TransactionKind::Debit, Amount::new(amount), date));

        Ok(())
    }

    /// Sums all credits minus all debits over the full transaction log in a single pass.
    pub fn balance(&self) -> Amount {
        let total = self
            .transactions
            .iter()
            .fold(Decimal::ZERO, |acc, tx| acc + tx.signed_amount());

        Amount::new(total)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}
