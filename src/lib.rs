//! Exact, arbitrary-precision decimal arithmetic over a string-backed
//! representation.
//!
//! A [`Decimal`] is an immutable sign + digit-coefficient + scale triple with
//! no bound on magnitude or fractional precision, so results are always exact:
//! no rounding, no floating-point drift. [`Addition`] and [`Subtraction`] are
//! stateless operations over that type.
//!
//! ```
//! use exact_decimal::{Addition, Decimal};
//! use std::str::FromStr;
//!
//! let lhs = Decimal::from_str("1.5")?;
//! let rhs = Decimal::from_str("2.25")?;
//! let add = Addition::new();
//! assert_eq!(add.compute(&lhs, &rhs).to_string(), "3.75");
//! # Ok::<(), exact_decimal::Error>(())
//! ```

#![forbid(unsafe_code)]

mod constants;
mod decimal;
mod error;
mod ops;
mod str;

#[cfg(feature = "bigint")]
mod bigint;
#[cfg(feature = "serde")]
mod serde;

#[cfg(feature = "bigint")]
pub use crate::bigint::BigIntAdder;
pub use crate::decimal::{Decimal, Sign};
pub use crate::error::Error;
pub use crate::ops::{Addition, DecimalAdd, Subtraction};
