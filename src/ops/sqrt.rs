//! Square root.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::trace;
use tracing::warn;

use crate::defs::Error;
use crate::defs::MAX_ITERATIONS;
use crate::ops::consts::EPSILON;
use crate::ops::util::add;
use crate::ops::util::div;

/// Computes the square root of `x`.
///
/// The estimate obtained in binary floating point is refined by the Babylonian method
/// until two consecutive iterates are equal, or an iterate repeats the one from two
/// steps before.
///
/// ## Errors
///
///  - Domain: `x` is negative.
///  - NoConvergence: the iteration did not settle within `MAX_ITERATIONS` steps.
pub fn sqrt(x: Decimal) -> Result<Decimal, Error> {
    if x < Decimal::ZERO {
        return Err(Error::Domain);
    }

    // s / 2 would vanish to zero for these.
    if x.is_zero() || x == EPSILON {
        return Ok(Decimal::ZERO);
    }

    let half_s = div(x, Decimal::TWO)?;
    let mut cur = seed(x, f64::sqrt);
    let mut prev = Decimal::NEGATIVE_ONE;

    for i in 0..MAX_ITERATIONS {
        let next = add(div(cur, Decimal::TWO)?, div(half_s, cur)?)?;

        if next == cur || next == prev {
            trace!(iterations = i + 1, "sqrt converged");
            return Ok(next);
        }

        prev = cur;
        cur = next;
    }

    warn!(x = %x, "sqrt did not converge");

    Err(Error::NoConvergence)
}

/// Initial estimate for the Newton iteration of a root of a positive `x`.
/// Falls back to `x` itself when the binary estimate is not usable.
pub(crate) fn seed(x: Decimal, f: fn(f64) -> f64) -> Decimal {
    x.to_f64()
        .map(f)
        .and_then(Decimal::from_f64)
        .filter(|s| !s.is_zero())
        .unwrap_or(x)
}
