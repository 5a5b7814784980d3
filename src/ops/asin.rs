//! Arcsine.

use rust_decimal::Decimal;

use crate::defs::Error;
use crate::ops::atan::atan;
use crate::ops::consts::HALF_PI;
use crate::ops::sqrt::sqrt;
use crate::ops::util::add;
use crate::ops::util::div;
use crate::ops::util::mul;
use crate::ops::util::sub;

/// Computes the arcsine of `x`. The result is in [-pi/2, pi/2].
///
/// ## Errors
///
///  - OutOfRange: `x` is greater than 1 or smaller than -1.
pub fn asin(x: Decimal) -> Result<Decimal, Error> {
    if x < Decimal::NEGATIVE_ONE || x > Decimal::ONE {
        return Err(Error::OutOfRange);
    }

    if x == Decimal::NEGATIVE_ONE {
        return Ok(-HALF_PI);
    }

    if x.is_zero() {
        return Ok(Decimal::ZERO);
    }

    if x == Decimal::ONE {
        return Ok(HALF_PI);
    }

    // arcsin(x) = 2 * arctan(x / (1 + sqrt(1 - x^2)))
    let s = sqrt(sub(Decimal::ONE, mul(x, x)?)?)?;
    let a = atan(div(x, add(Decimal::ONE, s)?)?)?;

    mul(Decimal::TWO, a)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ops::consts::EPSILON;
    use core::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn assert_close(a: Decimal, b: Decimal, eps: &str) {
        assert!((a - b).abs() <= d(eps), "{} != {}", a, b);
    }

    #[test]
    fn test_arcsine() {
        assert_eq!(asin(Decimal::ZERO).unwrap(), Decimal::ZERO);
        assert_eq!(asin(Decimal::ONE).unwrap(), HALF_PI);
        assert_eq!(asin(Decimal::NEGATIVE_ONE).unwrap(), -HALF_PI);

        assert_close(asin(d("0.5")).unwrap(), d("0.5235987755982988730771072305"), "0.00000000000000000000000001");
        assert_close(asin(d("-0.5")).unwrap(), d("-0.5235987755982988730771072305"), "0.00000000000000000000000001");
        assert_close(asin(d("0.1")).unwrap(), d("0.1001674211615597963455231795"), "0.00000000000000000000000001");
        assert_close(asin(d("0.7")).unwrap(), d("0.7753974966107530637403533527"), "0.00000000000000000000000001");
        assert_close(asin(d("0.99")).unwrap(), d("1.4292568534704694004855323347"), "0.0000000000000000000000001");
    }

    #[test]
    fn test_arcsine_domain() {
        assert_eq!(asin(Decimal::ONE + EPSILON), Err(Error::OutOfRange));
        assert_eq!(asin(Decimal::NEGATIVE_ONE - EPSILON), Err(Error::OutOfRange));
        assert_eq!(asin(d("2")), Err(Error::OutOfRange));
        assert_eq!(asin(Decimal::MIN), Err(Error::OutOfRange));
    }
}
