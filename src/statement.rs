use std::io::{self, Write};

use crate::models::Amount;
use crate::models::account::Account;

/// Currency symbol printed immediately before the digits of every amount.
pub const CURRENCY_SYMBOL: char = '£';

/// Total width of a credit or debit column field, padding included.
pub const AMOUNT_FIELD_WIDTH: usize = 10;

/// Column header preceding the statement lines.
pub const STATEMENT_HEADER: &str = "date     ||  credit    ||  debit     ||    balance";

/// Renders one credit or debit column field.
///
/// An absent or zero amount renders as an all-blank field of [AMOUNT_FIELD_WIDTH] characters, so
/// the unused side of a statement line stays visually empty. Anything else is right-justified with
/// the [CURRENCY_SYMBOL] in front, e.g. `1.50` becomes `"     £1.50"`.
pub fn amount_field(amount: Option<Amount>) -> String {
    match amount {
        Some(amount) if !amount.is_zero() => {
            let figure = format!("{CURRENCY_SYMBOL}{amount}");
            format!("{:>width$}", figure, width = AMOUNT_FIELD_WIDTH)
        }
        _ => " ".repeat(AMOUNT_FIELD_WIDTH),
    }
}

/// Writes the account statement to `sink`: the header, then one line per transaction in the order
/// the operations were performed.
///
/// Every line shows the overall account balance, not a running per-line balance.
pub fn render<W: Write>(account: &Account, mut sink: W) -> io::Result<()> {
    writeln!(sink, "{STATEMENT_HEADER}")?;

    let balance = account.balance();

    for tx in account.transactions() {
        writeln!(
            sink,
            "{} || {} || {} || {CURRENCY_SYMBOL}{balance}",
            tx.date(),
            amount_field(tx.credit()),
            amount_field(tx.debit()),
        )?;
    }

    Ok(())
}

/// Convenience wrapper writing the statement to the standard output stream.
pub fn print(account: &Account) -> io::Result<()> {
    render(account, io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use claims::{assert_ok, assert_some};
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn formats_an_amount_right_justified_with_the_currency_symbol() {
        let field = amount_field(Some(Amount::new(dec!(1.5))));

        assert_eq!(field, "     £1.50");
        assert_eq!(field.chars().count(), AMOUNT_FIELD_WIDTH);
    }

    #[test]
    fn formats_the_blank_side_as_whitespace_only() {
        assert_eq!(amount_field(None), "          ");
        assert_eq!(amount_field(Some(Amount::ZERO)), "          ");
    }

    #[test]
    fn renders_the_header_for_an_empty_account() {
        let account = Account::new("Frank", "Zappa");
        let mut sink = Vec::new();

        assert_ok!(render(&account, &mut sink));

        let output = assert_ok!(String::from_utf8(sink));
        assert_eq!(output, format!("{STATEMENT_HEADER}\n"));
    }

    #[test]
    fn renders_one_line_per_transaction_with_the_overall_balance() {
        let mut account = Account::new("Frank", "Zappa");
        assert_ok!(account.deposit(dec!(50), "13/12/2024"));
        assert_ok!(account.withdraw(dec!(10), "14/12/2024"));

        let mut sink = Vec::new();
        assert_ok!(render(&account, &mut sink));

        let output = assert_ok!(String::from_utf8(sink));
        let mut lines = output.lines();

        assert_eq!(assert_some!(lines.next()), STATEMENT_HEADER);
        assert_eq!(
            assert_some!(lines.next()),
            "13/12/2024 ||     £50.00 ||            || £40.00"
        );
        assert_eq!(
            assert_some!(lines.next()),
            "14/12/2024 ||            ||     £10.00 || £40.00"
        );
        assert_eq!(lines.next(), None);
    }
}
