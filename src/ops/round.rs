//! Rounding to a number of fractional digits, and IEEE remainder.

use core::cmp::Ordering;

use rust_decimal::Decimal;

use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::DEFAULT_RM;
use crate::defs::MAX_ROUNDING_DIGITS;
use crate::ops::consts::HALF;
use crate::ops::consts::ROUND_LIMIT;
use crate::ops::consts::ROUND_POWER_10;
use crate::ops::util::add;
use crate::ops::util::div;
use crate::ops::util::mul;
use crate::ops::util::remainder;
use crate::ops::util::sub;

/// Rounds `x` to the nearest integer, halves go to the even neighbour.
pub fn round(x: Decimal) -> Result<Decimal, Error> {
    round_dp_with(x, 0, DEFAULT_RM)
}

/// Rounds `x` to `digits` fractional digits, halves go to the even neighbour.
///
/// ## Errors
///
///  - OutOfRange: `digits` is greater than `MAX_ROUNDING_DIGITS`.
pub fn round_dp(x: Decimal, digits: u32) -> Result<Decimal, Error> {
    round_dp_with(x, digits, DEFAULT_RM)
}

/// Rounds `x` to the nearest integer, halves are rounded according to `rm`.
///
/// ## Errors
///
///  - InvalidArgument: `rm` is `RoundingMode::None`.
pub fn round_with(x: Decimal, rm: RoundingMode) -> Result<Decimal, Error> {
    round_dp_with(x, 0, rm)
}

/// Rounds `x` to `digits` fractional digits, halves are rounded according to `rm`.
///
/// The value is scaled by `10^digits`, rounded at the ones place and scaled back.
/// Values which already have no more than `digits` fractional digits, and values with
/// magnitude of at least `10^28`, are returned unchanged.
///
/// ## Errors
///
///  - OutOfRange: `digits` is greater than `MAX_ROUNDING_DIGITS`.
///  - InvalidArgument: `rm` is `RoundingMode::None`.
pub fn round_dp_with(x: Decimal, digits: u32, rm: RoundingMode) -> Result<Decimal, Error> {
    if digits > MAX_ROUNDING_DIGITS {
        return Err(Error::OutOfRange);
    }

    if rm == RoundingMode::None {
        return Err(Error::InvalidArgument);
    }

    if x.abs() >= *ROUND_LIMIT {
        return Ok(x);
    }

    let p = ROUND_POWER_10[digits as usize];

    // the product only overflows if x has fewer than `digits` fractional digits
    let scaled = match x.checked_mul(p) {
        Some(v) => v,
        None => return Ok(x),
    };

    div(round_half(scaled, rm)?, p)
}

/// Computes `x - y * q`, where `q` is `x / y` rounded to the nearest integer, halves to even.
/// The result lies in [-|y|/2, |y|/2].
///
/// ## Errors
///
///  - DivisionByZero: `y` is zero.
///  - Overflow: the quotient `x / y` exceeds the representable range.
pub fn ieee_remainder(x: Decimal, y: Decimal) -> Result<Decimal, Error> {
    let r = remainder(x, y)?;
    let ay = y.abs();

    let adjust = match mul(r.abs(), Decimal::TWO)?.cmp(&ay) {
        Ordering::Less => false,
        Ordering::Greater => true,
        Ordering::Equal => !is_even(div(x, y)?.trunc()),
    };

    if !adjust {
        Ok(r)
    } else if r.is_sign_negative() {
        add(r, ay)
    } else {
        sub(r, ay)
    }
}

// Rounds at the ones place.
fn round_half(x: Decimal, rm: RoundingMode) -> Result<Decimal, Error> {
    let t = x.trunc();
    let frac = x.fract().abs();

    if frac.is_zero() {
        return Ok(t);
    }

    let from_zero = match frac.cmp(&HALF) {
        Ordering::Less => false,
        Ordering::Greater => true,
        Ordering::Equal => match rm {
            RoundingMode::Up => x.is_sign_positive(),
            RoundingMode::Down => x.is_sign_negative(),
            RoundingMode::ToZero | RoundingMode::None => false,
            RoundingMode::FromZero => true,
            RoundingMode::ToEven => !is_even(t),
            RoundingMode::ToOdd => is_even(t),
        },
    };

    if !from_zero {
        Ok(t)
    } else if x.is_sign_negative() {
        sub(t, Decimal::ONE)
    } else {
        add(t, Decimal::ONE)
    }
}

fn is_even(d: Decimal) -> bool {
    d.checked_rem(Decimal::TWO).map_or(false, |r| r.is_zero())
}
