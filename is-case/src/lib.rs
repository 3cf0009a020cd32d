//! Compare enum values by case, ignoring payloads.
//!
//! Annotating an enum with [`macro@is_case`] generates a payload-free
//! companion enum (`{Name}Companion`, one bare case per original case, same
//! order) and an `is` method that checks whether a value holds the case named
//! by a companion value, no matter what payload it carries.
//! ```rust
//! use is_case::is_case;
//!
//! #[is_case]
//! #[derive(PartialEq)]
//! enum Coin {
//!     Heads(i32),
//!     Tails(String),
//! }
//!
//! let flip1 = Coin::Heads(1);
//! let flip2 = Coin::Heads(2);
//!
//! assert!(flip1.is(CoinCompanion::Heads));
//! assert!(!flip1.is(CoinCompanion::Tails));
//!
//! // `is` is deliberately coarser than equality: the payloads still differ.
//! assert!(flip1 != flip2);
//! ```
//!
//! # Asserting on cases
//!
//! [`assert_case!`] rewrites a `(value, companion)` pair into a fatal check
//! over the same predicate. It expands to [`debug_assert!`], so it terminates
//! the program on a case mismatch when `debug_assertions` is enabled and
//! compiles to a no-op otherwise.
//! ```rust
//! use is_case::{assert_case, is_case};
//!
//! #[is_case]
//! enum Test {
//!     Test1(String),
//!     Test2(i32),
//! }
//!
//! assert_case!(Test::Test2(3), TestCompanion::Test2);
//! ```
//!
//! # serde
//!
//! With the `serde` feature (on by default), [`macro@is_case_serde`] also
//! derives `Serialize` and `Deserialize` on the companion enum, so case tags
//! can travel through any serde format without a direct serde dependency.
//! ```rust
//! use is_case::is_case_serde;
//!
//! #[is_case_serde]
//! enum Coin {
//!     Heads(i32),
//!     Tails(String),
//! }
//!
//! let tag = serde_json::to_string(&CoinCompanion::Heads).unwrap();
//! assert_eq!(tag, "\"Heads\"");
//! ```

pub use is_case_macro::assert_case;

pub use is_case_macro::is_case;

#[cfg(feature = "serde")]
pub use is_case_macro::is_case_serde;

/// Implemented by the [`macro@is_case`] attribute for annotated enums.
///
/// The generated inherent `is` delegates here, so the trait only needs to be
/// in scope when writing code generic over case-comparable enums.
pub trait CaseComparable {
    /// The payload-free companion enum mirroring the cases of `Self`.
    type Companion;

    /// Returns whether `self` holds the case named by `companion`, ignoring
    /// any payload.
    fn is(&self, companion: Self::Companion) -> bool;
}

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "serde")]
    pub use serde;
}
