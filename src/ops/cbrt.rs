//! Cube root.

use rust_decimal::Decimal;
use tracing::trace;
use tracing::warn;

use crate::defs::Error;
use crate::defs::MAX_ITERATIONS;
use crate::ops::sqrt::seed;
use crate::ops::util::add;
use crate::ops::util::div;
use crate::ops::util::mul;
use crate::ops::util::sub;

// 1e-27, a relative step this small leaves only rounding in the next iterate
const STEP_LIMIT: Decimal = Decimal::from_parts(1, 0, 0, false, 27);

/// Computes the cube root of `x`.
///
/// Newton's iteration `(2*r + x/r^2) / 3` is started from a binary floating point
/// estimate. At the last digit the iteration may cycle through three values, so it stops
/// when a new iterate repeats one of the last three, or when the relative step drops to 1e-27.
///
/// ## Errors
///
///  - NoConvergence: the iteration did not settle within `MAX_ITERATIONS` steps.
pub fn cbrt(x: Decimal) -> Result<Decimal, Error> {
    if x.is_zero() {
        return Ok(Decimal::ZERO);
    }

    if x.is_sign_negative() {
        return cbrt(-x).map(|r| -r);
    }

    let three = Decimal::from(3);
    let mut cur = seed(x, f64::cbrt);
    let mut prev = Decimal::NEGATIVE_ONE;
    let mut prev2 = Decimal::NEGATIVE_ONE;

    for i in 0..MAX_ITERATIONS {
        let q = div(x, mul(cur, cur)?)?;
        let next = div(add(mul(cur, Decimal::TWO)?, q)?, three)?;

        let step = sub(next, cur)?.abs();
        if next == cur || next == prev || next == prev2 || step <= mul(next, STEP_LIMIT)? {
            trace!(iterations = i + 1, "cbrt converged");
            return Ok(next);
        }

        prev2 = prev;
        prev = cur;
        cur = next;
    }

    warn!(x = %x, "cbrt did not converge");

    Err(Error::NoConvergence)
}

#[cfg(test)]
mod tests {

    use super::*;
    use core::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn assert_close(a: Decimal, b: Decimal, eps: &str) {
        assert!((a - b).abs() <= d(eps), "{} != {}", a, b);
    }

    #[test]
    fn test_cbrt() {
        assert_eq!(cbrt(Decimal::ZERO).unwrap(), Decimal::ZERO);
        assert_eq!(cbrt(Decimal::ONE).unwrap(), Decimal::ONE);
        assert_eq!(cbrt(d("27")).unwrap(), d("3"));
        assert_eq!(cbrt(d("-8")).unwrap(), d("-2"));

        assert_close(cbrt(d("0.001")).unwrap(), d("0.1"), "0.000000000000000000000000001");
        assert_close(cbrt(d("2")).unwrap(), d("1.2599210498948731647672106073"), "0.000000000000000000000000001");
        assert_close(cbrt(d("-2")).unwrap(), d("-1.2599210498948731647672106073"), "0.000000000000000000000000001");
        assert_close(cbrt(d("0.5")).unwrap(), d("0.7937005259840997373758528196"), "0.000000000000000000000000001");
        assert_close(cbrt(Decimal::MAX).unwrap(), d("4294967295.9999999999999999999819"), "0.00000000000000001");

        // the smallest value still has a representable root
        assert!(cbrt(d("0.0000000000000000000000000001")).unwrap() > Decimal::ZERO);
    }

    #[test]
    fn test_cbrt_last_digit_cycle() {
        // Newton's iteration alternates between three values at the last digit for these
        for x in [d("-67732876.84646562"), d("72933938.778514433360279274281")] {
            let r = cbrt(x).unwrap();
            assert_eq!(r.is_sign_negative(), x.is_sign_negative());

            let cube = r * r * r;
            assert!((cube - x).abs() <= x.abs() * d("0.000000000000000000000001"), "{}^3 != {}", r, x);
        }

        assert_close(cbrt(d("-67732876.84646562")).unwrap(), d("-407.63034578934492351466713117"), "0.000000000000000000000001");
        assert_close(cbrt(d("72933938.778514433360279274281")).unwrap(), d("417.80781206859026629012471103"), "0.000000000000000000000001");
    }
}
