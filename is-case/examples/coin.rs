//! Walk-through of the attribute and the assertion helper.

use is_case::{assert_case, is_case};

#[is_case]
#[derive(Debug, PartialEq)]
enum Coin {
    Heads(i32),
    Tails(String),
}

fn main() {
    let flip1 = Coin::Heads(1);
    let flip2 = Coin::Heads(2);

    // Same case, different payloads.
    assert!(flip1.is(CoinCompanion::Heads));
    assert!(flip1 != flip2);

    // Passes: both are heads. Swapping in CoinCompanion::Tails would abort
    // debug builds here.
    assert_case!(flip2, CoinCompanion::Heads);

    let flip3 = Coin::Tails("tails!".to_string());
    assert!(!flip3.is(CoinCompanion::Heads));

    println!("flip1 = {flip1:?}, flip2 = {flip2:?}, flip3 = {flip3:?}");
}
