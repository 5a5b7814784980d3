//! Transcendental functions on the 96-bit decimal type of `rust_decimal`, implemented purely
//! in decimal arithmetic.
//!
//! Characteristics:
//!
//! | Name                             | Value  |
//! |:---------------------------------|-------:|
//! | Significant decimal digits       |  28-29 |
//! | Maximum scale                    |     28 |
//! | Smallest positive value          |  1e-28 |
//!
//! Series stop when a term rounds to exactly zero at the scale of the decimal type, so every
//! function terminates after a number of steps bounded by its precision. Binary floating point
//! is used only to seed the root iterations.
//!
//! ``` rust
//! use decimal_math::{sin, sqrt, PI};
//! use rust_decimal::Decimal;
//!
//! // exact values at special angles
//! assert_eq!(sin(PI).unwrap(), Decimal::ZERO);
//!
//! let r = sqrt(Decimal::TWO).unwrap();
//! assert!((r * r - Decimal::TWO).abs() < Decimal::new(1, 26));
//! ```
//!
//! Results that the decimal type can't represent, and arguments outside of the domain of a function,
//! are reported as [`Error`]. No function panics.

#![deny(clippy::suspicious)]

mod defs;
mod ops;

pub use crate::defs::Error;
pub use crate::defs::RoundingMode;
pub use crate::defs::DEFAULT_RM;
pub use crate::defs::MAX_ITERATIONS;
pub use crate::defs::MAX_ROUNDING_DIGITS;
pub use crate::defs::MAX_SCALE;

pub use crate::ops::consts::E;
pub use crate::ops::consts::EPSILON;
pub use crate::ops::consts::HALF_PI;
pub use crate::ops::consts::LN_10;
pub use crate::ops::consts::LN_2;
pub use crate::ops::consts::PI;
pub use crate::ops::consts::QUARTER_PI;
pub use crate::ops::consts::TWELFTH_PI;
pub use crate::ops::consts::TWO_PI;

pub use crate::ops::*;
