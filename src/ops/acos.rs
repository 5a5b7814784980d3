//! Arccosine.

use rust_decimal::Decimal;

use crate::defs::Error;
use crate::ops::atan::atan;
use crate::ops::consts::HALF_PI;
use crate::ops::consts::PI;
use crate::ops::sqrt::sqrt;
use crate::ops::util::add;
use crate::ops::util::div;
use crate::ops::util::mul;
use crate::ops::util::sub;

/// Computes the arccosine of `x`. The result is in [0, pi].
///
/// ## Errors
///
///  - OutOfRange: `x` is greater than 1 or smaller than -1.
pub fn acos(x: Decimal) -> Result<Decimal, Error> {
    if x < Decimal::NEGATIVE_ONE || x > Decimal::ONE {
        return Err(Error::OutOfRange);
    }

    if x == Decimal::NEGATIVE_ONE {
        return Ok(PI);
    }

    if x.is_zero() {
        return Ok(HALF_PI);
    }

    if x == Decimal::ONE {
        return Ok(Decimal::ZERO);
    }

    // arccos(x) = 2 * arctan(sqrt(1 - x^2) / (1 + x))
    let s = sqrt(sub(Decimal::ONE, mul(x, x)?)?)?;
    let a = atan(div(s, add(Decimal::ONE, x)?)?)?;

    mul(Decimal::TWO, a)
}
