//! Logarithms.

use rust_decimal::Decimal;

use crate::defs::Error;
use crate::ops::consts::LN_10;
use crate::ops::consts::LN_2;
use crate::ops::ln::ln;
use crate::ops::util::div;

/// Computes the logarithm of `x` to the base `b`.
///
/// ## Errors
///
///  - InvalidOperation: `b` is 1.
///  - Domain: `x` or `b` is negative.
///  - Overflow: `x` or `b` is zero.
pub fn log(x: Decimal, b: Decimal) -> Result<Decimal, Error> {
    // log of 1 is 0 for any base, even the ones yielding infinity below
    if x == Decimal::ONE {
        return Ok(Decimal::ZERO);
    }

    if b == Decimal::ONE {
        return Err(Error::InvalidOperation);
    }

    check_arg(x)?;
    check_arg(b)?;

    div(ln(x)?, ln(b)?)
}

/// Computes the logarithm base 10 of `x`.
///
/// ## Errors
///
///  - Domain: `x` is negative.
///  - Overflow: `x` is zero.
pub fn log10(x: Decimal) -> Result<Decimal, Error> {
    check_arg(x)?;

    div(ln(x)?, LN_10)
}

/// Computes the logarithm base 2 of `x`.
///
/// ## Errors
///
///  - Domain: `x` is negative.
///  - Overflow: `x` is zero.
pub fn log2(x: Decimal) -> Result<Decimal, Error> {
    check_arg(x)?;

    div(ln(x)?, LN_2)
}

fn check_arg(x: Decimal) -> Result<(), Error> {
    if x.is_zero() {
        Err(Error::Overflow)
    } else if x.is_sign_negative() {
        Err(Error::Domain)
    } else {
        Ok(())
    }
}
