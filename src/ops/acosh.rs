//! Hyperbolic arccosine.

use rust_decimal::Decimal;

use crate::defs::Error;
use crate::ops::asinh::LARGE_ARG;
use crate::ops::consts::LN_2;
use crate::ops::ln::ln;
use crate::ops::sqrt::sqrt;
use crate::ops::util::add;
use crate::ops::util::mul;
use crate::ops::util::sub;

/// Computes the hyperbolic arccosine of `x`.
///
/// ## Errors
///
///  - OutOfRange: `x` is smaller than 1.
pub fn acosh(x: Decimal) -> Result<Decimal, Error> {
    if x < Decimal::ONE {
        return Err(Error::OutOfRange);
    }

    if x == Decimal::ONE {
        return Ok(Decimal::ZERO);
    }

    if x > LARGE_ARG {
        return add(ln(x)?, LN_2);
    }

    // ln(x + sqrt(x^2 - 1))
    let s = sqrt(sub(mul(x, x)?, Decimal::ONE)?)?;

    ln(add(x, s)?)
}
