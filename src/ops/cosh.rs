//! Hyperbolic cosine.

use rust_decimal::Decimal;

use crate::defs::Error;
use crate::ops::pow::exp;
use crate::ops::util::add;
use crate::ops::util::div;

/// Computes the hyperbolic cosine of `x`.
///
/// ## Errors
///
///  - Overflow: the result is too large.
pub fn cosh(x: Decimal) -> Result<Decimal, Error> {
    if x.is_zero() {
        return Ok(Decimal::ONE);
    }

    let e = exp(x.abs())?;

    div(add(e, div(Decimal::ONE, e)?)?, Decimal::TWO)
}
