#![cfg(feature = "serde")]

use is_case::is_case_serde;

#[is_case_serde]
pub enum Coin {
    Heads(i32),
    Tails(String),
}

#[test]
fn serde_roundtrip() -> anyhow::Result<()> {
    let tag = CoinCompanion::Tails;

    let serialized = serde_json::to_string(&tag)?;
    assert_eq!(serialized, "\"Tails\"");

    let deserialized: CoinCompanion = serde_json::from_str(&serialized)?;
    assert_eq!(tag, deserialized);

    assert!(Coin::Tails("tails!".to_string()).is(deserialized));
    assert!(!Coin::Heads(1).is(deserialized));
    Ok(())
}
