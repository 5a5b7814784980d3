//! Exponentiation.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::defs::Error;
use crate::ops::consts::E;
use crate::ops::ln::ln;
use crate::ops::series::series_run;
use crate::ops::series::TermGen;
use crate::ops::util::div;
use crate::ops::util::mul;

// Maclaurin series of e^x: 1 + x + x^2/2! + x^3/3! + ...
struct ExpSeries {
    x: Decimal,
    term: Decimal,
    i: u32,
}

impl ExpSeries {
    fn new(x: Decimal) -> Self {
        ExpSeries {
            x,
            term: Decimal::ONE,
            i: 0,
        }
    }
}

impl TermGen for ExpSeries {
    fn next(&mut self) -> Result<Decimal, Error> {
        if self.i > 0 {
            // x^i / i!
            self.term = mul(self.term, div(self.x, Decimal::from(self.i))?)?;
        }
        self.i += 1;

        Ok(self.term)
    }

    fn name(&self) -> &'static str {
        "exp"
    }
}

/// Computes `x` to the power of the non-negative integer `y` using binary exponentiation.
///
/// ## Errors
///
///  - InvalidArgument: `y` is negative or has a fractional part.
///  - Overflow: the result is too large.
pub(crate) fn exp_by_squaring(x: Decimal, y: Decimal) -> Result<Decimal, Error> {
    if (y.is_sign_negative() && !y.is_zero()) || y.trunc() != y {
        return Err(Error::InvalidArgument);
    }

    let mut n = y.to_u128().ok_or(Error::InvalidArgument)?;
    let mut ret = Decimal::ONE;
    let mut multiplier = x;

    while n > 0 {
        if n & 1 == 1 {
            ret = mul(ret, multiplier)?;
            n -= 1;
            if n == 0 {
                // squaring once more could overflow for nothing
                break;
            }
        }

        multiplier = mul(multiplier, multiplier)?;
        n >>= 1;
    }

    Ok(ret)
}

/// Computes `e` to the power of `x`.
///
/// Arguments with both an integer and a fractional part are split, and e^t * e^f is computed
/// with exponentiation by squaring for the integer part and a series for the fractional part.
/// A negative argument is handled as the reciprocal of e^|x|; when e^|x| is beyond the
/// representable range the result is below the smallest representable value and zero is returned.
///
/// ## Errors
///
///  - Overflow: the result is too large.
pub fn exp(x: Decimal) -> Result<Decimal, Error> {
    let d = x.abs();

    let ret = exp_abs(d);

    if x.is_sign_negative() {
        match ret {
            Ok(v) => div(Decimal::ONE, v),
            Err(Error::Overflow) => Ok(Decimal::ZERO),
            Err(e) => Err(e),
        }
    } else {
        ret
    }
}

// e^d for d >= 0.
fn exp_abs(d: Decimal) -> Result<Decimal, Error> {
    let t = d.trunc();

    if d.is_zero() {
        Ok(Decimal::ONE)
    } else if d == Decimal::ONE {
        Ok(E)
    } else if d > Decimal::ONE && t != d {
        mul(exp_abs(t)?, exp_abs(d - t)?)
    } else if d == t {
        exp_by_squaring(E, d)
    } else {
        series_run(&mut ExpSeries::new(d))
    }
}

/// Computes `x` to the power of `y`.
///
/// Integer powers use exponentiation by squaring only. For a fractional `y` the integer part
/// is still done by squaring and only the remaining fraction goes through e^(f * ln(x)).
/// A negative `y` is computed as the reciprocal of the positive power.
///
/// ## Errors
///
///  - Overflow: the result is too large, or `x` is zero and `y` is negative.
///  - Domain: `x` is negative and `y` has a fractional part.
pub fn pow(x: Decimal, y: Decimal) -> Result<Decimal, Error> {
    let negative_exp = y.is_sign_negative();
    let y = y.abs();

    let ret = if y.is_zero() {
        Ok(Decimal::ONE)
    } else if y == Decimal::ONE {
        Ok(x)
    } else {
        let t = y.trunc();

        if y == t {
            exp_by_squaring(x, y)
        } else if x.is_zero() {
            Ok(Decimal::ZERO)
        } else {
            let f = mul(y - t, ln(x)?)?;
            mul(exp_by_squaring(x, t)?, exp(f)?)
        }
    };

    if negative_exp {
        match ret {
            Ok(v) if v.is_zero() => Err(Error::Overflow),
            Ok(v) => div(Decimal::ONE, v),
            // the reciprocal of a value that large rounds to zero
            Err(Error::Overflow) => Ok(Decimal::ZERO),
            Err(e) => Err(e),
        }
    } else {
        ret
    }
}
