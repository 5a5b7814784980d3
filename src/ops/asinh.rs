//! Hyperbolic arcsine.

use rust_decimal::Decimal;

use crate::defs::Error;
use crate::ops::consts::LN_2;
use crate::ops::ln::ln;
use crate::ops::sqrt::sqrt;
use crate::ops::util::add;
use crate::ops::util::mul;

/// Above this magnitude asinh(x) and ln(2x) differ by less than the smallest representable value.
pub(crate) const LARGE_ARG: Decimal = Decimal::from_parts(0x107a4000, 0x5af3, 0, false, 0);

/// Computes the hyperbolic arcsine of `x`.
///
/// ## Errors
///
///  - Overflow: an intermediate value exceeds the representable range (not expected).
pub fn asinh(x: Decimal) -> Result<Decimal, Error> {
    if x.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let ax = x.abs();

    let ret = if ax > LARGE_ARG {
        add(ln(ax)?, LN_2)?
    } else {
        // ln(x + sqrt(x^2 + 1))
        let s = sqrt(add(mul(ax, ax)?, Decimal::ONE)?)?;
        ln(add(ax, s)?)?
    };

    Ok(if x.is_sign_negative() { -ret } else { ret })
}
