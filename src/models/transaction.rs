use rust_decimal::Decimal;

use crate::models::Amount;
use crate::models::date::StatementDate;

/// An immutable record of one credit or debit, kept in the order the account performed it.
///
/// Rather than storing a credit and a debit field of which one is always blank, the kind is encoded
/// in [TransactionKind] and there is a single amount. The [Transaction::credit] and
/// [Transaction::debit] accessors recover the two-sided view the statement needs, with `None` as
/// the blank side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Amount,
    date: StatementDate,
}

impl Transaction {
    pub fn new(kind: TransactionKind, amount: Amount, date: StatementDate) -> Self {
        Self { kind, amount, date }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn date(&self) -> &StatementDate {
        &self.date
    }

    /// The credited amount, or `None` when this transaction is a debit.
    pub fn credit(&self) -> Option<Amount> {
        match self.kind {
            TransactionKind::Credit => Some(self.amount),
            TransactionKind::Debit => None,
        }
    }

    /// The debited amount, or `None` when this transaction is a credit.
    pub fn debit(&self) -> Option<Amount> {
        match self.kind {
            TransactionKind::Debit => Some(self.amount),
            TransactionKind::Credit => None,
        }
    }

    /// The amount with the sign it contributes to the balance.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Credit => self.amount.into_inner(),
            TransactionKind::Debit => -self.amount.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Credit,
    Debit,
}

/// A requested ledger operation, as decoded from the input boundary. The date is still raw text
/// here; it is validated when the operation is applied to an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Deposit { amount: Decimal, date: String },
    Withdrawal { amount: Decimal, date: String },
}
