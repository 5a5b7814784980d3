//! Tangent.

use rust_decimal::Decimal;

use crate::defs::Error;
use crate::ops::cos::cos;
use crate::ops::sin::sin;
use crate::ops::util::div;

/// Computes the tangent of `x` radians as sin(x) / cos(x).
///
/// ## Errors
///
///  - Undefined: cos(x) is exactly zero, i.e. `x` is an odd multiple of pi/2.
///  - Overflow: the result is too large.
pub fn tan(x: Decimal) -> Result<Decimal, Error> {
    let c = cos(x)?;

    if c.is_zero() {
        return Err(Error::Undefined);
    }

    div(sin(x)?, c)
}
