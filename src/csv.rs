use std::io::{Read, Write};

use anyhow::{Context, Result};
use csv::{Reader, ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::models::account::Account;
use crate::models::transaction::Operation;

/// The CsvDecoder reads requested ledger operations from CSV encoded input.
///
/// It is constructed with a reader, which is something that implements [std::io::Read]. This makes
/// it very [flexible](https://doc.rust-lang.org/std/io/trait.Read.html#implementors) to use.
///
/// Deserialization is two-step. The rows deserialize into an internal struct [DeOpRecord] in which
/// the date is optional, mirroring input where the date column was left out. A `TryFrom`
/// conversion then produces the public [Operation], rejecting rows without a date. Rows failing
/// either step are logged and skipped, so one malformed row does not abort the whole run.
pub struct CsvDecoder<R> {
    reader: Reader<R>,
}

impl<R: Read> CsvDecoder<R> {
    pub fn new(reader: R) -> Self {
        // The builder is configured to fulfill the following requirements:
        // - trim whitespace from header and values
        // - a header row is expected to be always present
        // - the expected delimiter
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .has_headers(true)
            .delimiter(b',')
            .from_reader(reader);

        Self { reader }
    }

    pub fn decode_ops(&mut self) -> impl Iterator<Item = Operation> + '_ {
        self.reader
            .deserialize::<DeOpRecord>()
            .map(|rec| rec.context("Failed to deserialize CSV record into DeOpRecord"))
            .filter_map(|deserialized| {
                deserialized
                    .inspect_err(|err| {
                        error!("Failed to deserialize DeOpRecord from CsvRecord: {err:?}");
                    })
                    .and_then(Operation::try_from)
                    .inspect_err(|err| {
                        error!("Failed to convert DeOpRecord to Operation: {err:?}");
                    })
                    .ok()
            })
    }
}

pub struct CsvEncoder;

impl CsvEncoder {
    /// Encodes the account statement as CSV rows with the same semantics as the rendered
    /// statement: the blank side of a transaction stays empty and every row carries the overall
    /// balance.
    pub fn encode_statement<W: Write>(sink: W, account: &Account) -> Result<()> {
        let mut writer = csv::Writer::from_writer(sink);
        let balance = account.balance().to_string();

        for tx in account.transactions() {
            let row = StatementRow {
                date: tx.date().to_string(),
                credit: tx.credit().map(|amount| amount.to_string()).unwrap_or_default(),
                debit: tx.debit().map(|amount| amount.to_string()).unwrap_or_default(),
                balance: balance.clone(),
            };

            writer
                .serialize(row)
                .context("Failed to serialize statement row")?;
        }
        writer.flush().context("Failed to flush the writer")?;

        Ok(())
    }
}

/// This internal type exists so a row with a missing date still deserializes and can be rejected
/// with a proper error, instead of disappearing inside a csv error.
#[derive(Debug, Deserialize)]
struct DeOpRecord {
    kind: DeOpKind,
    amount: Decimal,
    date: Option<String>,
}

impl TryFrom<DeOpRecord> for Operation {
    type Error = anyhow::Error;

    fn try_from(deserialized: DeOpRecord) -> Result<Self, Self::Error> {
        let date = deserialized
            .date
            .context("Deserialized operation does not contain a date, which was expected")?;

        let operation = match deserialized.kind {
            DeOpKind::Deposit => Operation::Deposit {
                amount: deserialized.amount,
                date,
            },

            DeOpKind::Withdrawal => Operation::Withdrawal {
                amount: deserialized.amount,
                date,
            },
        };

        Ok(operation)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum DeOpKind {
    Deposit,
    Withdrawal,
}

#[derive(Debug, Serialize)]
struct StatementRow {
    date: String,
    credit: String,
    debit: String,
    balance: String,
}
