//! Auxiliary functions.

use rust_decimal::Decimal;

use crate::defs::Error;
use crate::ops::consts::ROUND_POWER_10;

// Checked arithmetic on the host type. The operators of `Decimal` panic on overflow.

#[inline]
pub(crate) fn add(d1: Decimal, d2: Decimal) -> Result<Decimal, Error> {
    d1.checked_add(d2).ok_or(Error::Overflow)
}

#[inline]
pub(crate) fn sub(d1: Decimal, d2: Decimal) -> Result<Decimal, Error> {
    d1.checked_sub(d2).ok_or(Error::Overflow)
}

#[inline]
pub(crate) fn mul(d1: Decimal, d2: Decimal) -> Result<Decimal, Error> {
    d1.checked_mul(d2).ok_or(Error::Overflow)
}

#[inline]
pub(crate) fn div(d1: Decimal, d2: Decimal) -> Result<Decimal, Error> {
    if d2.is_zero() {
        return Err(Error::DivisionByZero);
    }
    d1.checked_div(d2).ok_or(Error::Overflow)
}

/// Returns the number of digits after the decimal point, including trailing zeroes.
#[inline]
pub(crate) fn decimal_places(d: Decimal) -> u32 {
    d.scale()
}

/// Computes `d1 mod d2` without the precision loss of `d1 - trunc(d1 / d2) * d2`.
///
/// The product `trunc(d1 / d2) * d2` is subtracted digit by digit of `d2`, so every
/// subtraction loses at most a single digit. The result has the sign of `d1`.
///
/// ## Errors
///
///  - DivisionByZero: `d2` is zero.
///  - Overflow: an intermediate value exceeds the representable range.
pub(crate) fn remainder(mut d1: Decimal, d2: Decimal) -> Result<Decimal, Error> {
    if d2.is_zero() {
        return Err(Error::DivisionByZero);
    }

    if d1.abs() < d2.abs() {
        return Ok(d1);
    }

    let times_into = div(d1, d2)?.trunc();
    let mut shifting = d2;
    let sign = d1.is_sign_negative();

    for i in 0..=decimal_places(d2) as usize {
        // the first digit is the whole integer part of d2
        let digit = shifting.trunc();

        let part = mul(times_into, div(digit, ROUND_POWER_10[i])?)?;
        d1 = sub(d1, part)?;

        shifting = mul(sub(shifting, digit)?, Decimal::TEN)?;
        if shifting.is_zero() {
            break;
        }
    }

    // crossing zero is an artifact of the precision mismatch, one whole d2 brings it back
    if !d1.is_zero() && d1.is_sign_negative() != sign {
        d1 = if d2.is_sign_negative() == sign {
            add(d1, d2)?
        } else {
            sub(d1, d2)?
        };
    }

    Ok(d1)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ops::consts::PI;
    use crate::ops::consts::TWO_PI;
    use core::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_checked_arith() {
        assert_eq!(add(Decimal::MAX, Decimal::ONE), Err(Error::Overflow));
        assert_eq!(sub(Decimal::MIN, Decimal::ONE), Err(Error::Overflow));
        assert_eq!(mul(Decimal::MAX, Decimal::TWO), Err(Error::Overflow));
        assert_eq!(div(Decimal::ONE, Decimal::ZERO), Err(Error::DivisionByZero));
        assert_eq!(div(Decimal::MAX, d("0.5")), Err(Error::Overflow));
        assert_eq!(div(Decimal::ONE, Decimal::TWO), Ok(d("0.5")));
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(decimal_places(d("1.2500")), 4);
        assert_eq!(decimal_places(d("12")), 0);
        assert_eq!(decimal_places(TWO_PI), 28);
    }

    #[test]
    fn test_remainder() {
        // already reduced
        assert_eq!(remainder(d("1.5"), TWO_PI).unwrap(), d("1.5"));
        assert_eq!(remainder(d("-1.5"), TWO_PI).unwrap(), d("-1.5"));

        // simple integer and decimal cases
        assert_eq!(remainder(d("10"), d("3")).unwrap(), Decimal::ONE);
        assert_eq!(remainder(d("-10"), d("3")).unwrap(), Decimal::NEGATIVE_ONE);
        assert_eq!(remainder(d("10"), d("-3")).unwrap(), Decimal::ONE);
        assert_eq!(remainder(d("7.5"), d("2.5")).unwrap(), Decimal::ZERO);
        assert_eq!(remainder(d("7.75"), d("2.5")).unwrap(), d("0.25"));

        // multiples of 2*pi reduce to zero
        let x = TWO_PI * Decimal::from(5);
        assert!(remainder(x, TWO_PI).unwrap().abs() < d("0.0000000000000000000000001"));

        // 3*pi reduces to pi
        let x = PI * Decimal::from(3);
        let r = remainder(x, TWO_PI).unwrap();
        assert!((r - PI).abs() < d("0.0000000000000000000000001"));

        // sign follows the dividend
        let r = remainder(d("-100"), TWO_PI).unwrap();
        assert!(r.is_sign_negative());
        assert!(r.abs() < TWO_PI);

        // large argument
        let r = remainder(d("1000000000000"), TWO_PI).unwrap();
        assert!(r >= Decimal::ZERO && r < TWO_PI);

        assert_eq!(remainder(Decimal::ONE, Decimal::ZERO), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_remainder_precision() {
        // naive reduction of 10^6 loses digits of 2*pi times the quotient
        let x = d("1000000");
        let r = remainder(x, TWO_PI).unwrap();
        // 10^6 mod 2*pi = 5.92562114009385143290994...
        let expected = d("5.925621140093851432909");
        assert!((r - expected).abs() < d("0.000000000000001"));
    }

    #[test]
    fn test_remainder_crossing_zero() {
        // the quotient 999999999999999999999999999.966.. rounds up to 10^27,
        // subtracting 10^27 * 3 leaves -0.1 and one divisor is added back
        let x = d("2999999999999999999999999999.9");
        assert_eq!(div(x, d("3")).unwrap().trunc(), d("1000000000000000000000000000"));

        let r = remainder(x, d("3")).unwrap();
        assert_eq!(r, d("2.9"));
        assert!(r.is_sign_positive());

        let r = remainder(x, d("-3")).unwrap();
        assert_eq!(r, d("2.9"));
        assert!(r.is_sign_positive());

        let r = remainder(-x, d("3")).unwrap();
        assert_eq!(r, d("-2.9"));
        assert!(r.is_sign_negative());

        let r = remainder(-x, d("-3")).unwrap();
        assert_eq!(r, d("-2.9"));
        assert!(r.is_sign_negative());
    }
}
