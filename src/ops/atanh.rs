//! Hyperbolic arctangent.

use rust_decimal::Decimal;

use crate::defs::Error;
use crate::ops::ln::ln;
use crate::ops::util::add;
use crate::ops::util::div;
use crate::ops::util::sub;

/// Computes the hyperbolic arctangent of `x`.
///
/// ## Errors
///
///  - OutOfRange: `x` is not in the open interval (-1, 1).
pub fn atanh(x: Decimal) -> Result<Decimal, Error> {
    if x <= Decimal::NEGATIVE_ONE || x >= Decimal::ONE {
        return Err(Error::OutOfRange);
    }

    if x.is_zero() {
        return Ok(Decimal::ZERO);
    }

    // ln((1 + x) / (1 - x)) / 2
    let q = div(add(Decimal::ONE, x)?, sub(Decimal::ONE, x)?)?;

    div(ln(q)?, Decimal::TWO)
}
