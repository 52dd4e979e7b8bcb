use claims::{assert_err, assert_ok};
use rust_decimal::dec;

use personal_ledger::prelude::Account;

use setup::{Components, DATE};


#[test]
fn can_register_an_account_with_its_transactions() {
    let Components { mut account, mut bank } = Components::setup();

    // arrange
    let res = account.deposit(dec!(50), DATE);
    assert_ok!(res);

    // act
    let res = bank.add_account(account);

    // assert
    assert_ok!(res);
    assert_eq!(bank.len(), 1);

    let registered = &bank.accounts()[0];
    assert_eq!(registered.last_name, "Zappa");
    assert_eq!(registered.transactions().len(), 1);
}

#[test]
fn cant_register_an_entry_without_names() {
    let Components { mut bank, .. } = Components::setup();

    // act
    let res = bank.add_account(Account::new("", ""));

    // assert
    let err = assert_err!(res, "Expected the nameless entry to be rejected");
    assert_eq!(err.to_string(), "Invalid entry");
    assert!(bank.is_empty(), "a rejected entry must not be registered");
}

#[test]
fn registration_keeps_insertion_order() {
    let Components { mut bank, .. } = Components::setup();

    // act
    assert_ok!(bank.add_account(Account::new("Frank", "Zappa")));
    assert_ok!(bank.add_account(Account::new("Captain", "Beefheart")));

    // assert
    assert_eq!(bank.len(), 2);
    assert_eq!(bank.accounts()[0].first_name, "Frank");
    assert_eq!(bank.accounts()[1].first_name, "Captain");
}
