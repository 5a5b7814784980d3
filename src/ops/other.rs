//! Other operations.

use rust_decimal::Decimal;

/// Returns the absolute value of `x`.
///
/// The decimal type stores sign and magnitude separately, so `abs(Decimal::MIN)` is `Decimal::MAX`.
#[inline]
pub fn abs(x: Decimal) -> Decimal {
    x.abs()
}

/// Returns -1 if `x` is negative, 1 if `x` is positive, and 0 if `x` is zero of either sign.
#[inline]
pub fn sign(x: Decimal) -> i32 {
    if x.is_zero() {
        0
    } else if x.is_sign_negative() {
        -1
    } else {
        1
    }
}

/// Returns the integer part of `x`, i.e. having x=12.345 it returns 12.
#[inline]
pub fn truncate(x: Decimal) -> Decimal {
    x.trunc()
}

/// Returns the largest integer less than or equal to `x`.
#[inline]
pub fn floor(x: Decimal) -> Decimal {
    x.floor()
}

/// Returns the smallest integer greater than or equal to `x`.
#[inline]
pub fn ceiling(x: Decimal) -> Decimal {
    x.ceil()
}

/// Returns the larger of two numbers. If they are equal `x` is returned.
#[inline]
pub fn max(x: Decimal, y: Decimal) -> Decimal {
    if x >= y {
        x
    } else {
        y
    }
}

/// Returns the smaller of two numbers. If they are equal `x` is returned.
#[inline]
pub fn min(x: Decimal, y: Decimal) -> Decimal {
    if x <= y {
        x
    } else {
        y
    }
}
