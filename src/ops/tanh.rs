//! Hyperbolic tangent.

use rust_decimal::Decimal;

use crate::defs::Error;
use crate::ops::cosh::cosh;
use crate::ops::sinh::sinh;
use crate::ops::util::div;

/// Computes the hyperbolic tangent of `x`.
///
/// For |x| > 33 the result differs from 1 by less than the smallest
/// representable value, and +-1 is returned.
///
/// ## Errors
///
///  - Overflow: an intermediate value exceeds the representable range (not expected).
pub fn tanh(x: Decimal) -> Result<Decimal, Error> {
    if x.is_zero() {
        return Ok(Decimal::ZERO);
    }

    if x.abs() > Decimal::from(33) {
        return Ok(if x.is_sign_negative() { Decimal::NEGATIVE_ONE } else { Decimal::ONE });
    }

    div(sinh(x)?, cosh(x)?)
}
