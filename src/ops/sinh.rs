//! Hyperbolic sine.

use rust_decimal::Decimal;

use crate::defs::Error;
use crate::ops::pow::exp;
use crate::ops::series::series_run;
use crate::ops::series::TermGen;
use crate::ops::util::div;
use crate::ops::util::mul;
use crate::ops::util::sub;

// sinh:  x + x^3/3! + x^5/5! + x^7/7! + ...
struct SinhSeries {
    term: Decimal,
    x_sq: Decimal,
    k: u32,
}

impl SinhSeries {
    fn new(x: Decimal) -> Result<Self, Error> {
        Ok(SinhSeries {
            term: x,
            x_sq: mul(x, x)?,
            k: 0,
        })
    }
}

impl TermGen for SinhSeries {
    fn next(&mut self) -> Result<Decimal, Error> {
        if self.k > 0 {
            let f = div(self.x_sq, Decimal::from(self.k * self.k + self.k))?;
            self.term = mul(self.term, f)?;
        }
        self.k += 2;

        Ok(self.term)
    }

    fn name(&self) -> &'static str {
        "sinh"
    }
}

/// Computes the hyperbolic sine of `x`.
///
/// ## Errors
///
///  - Overflow: the result is too large.
pub fn sinh(x: Decimal) -> Result<Decimal, Error> {
    if x.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let ax = x.abs();

    let ret = if ax < Decimal::ONE {
        // e^x - e^-x cancels badly near zero
        series_run(&mut SinhSeries::new(ax)?)?
    } else {
        let e = exp(ax)?;
        div(sub(e, div(Decimal::ONE, e)?)?, Decimal::TWO)?
    };

    Ok(if x.is_sign_negative() { -ret } else { ret })
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
    fn test_sinh() {
        assert_eq!(sinh(Decimal::ZERO).unwrap(), Decimal::ZERO);

        assert_close(sinh(d("0.5")).unwrap(), d("0.5210953054937473616224256264"), "0.000000000000000000000000001");
        assert_close(sinh(d("-0.5")).unwrap(), d("-0.5210953054937473616224256264"), "0.000000000000000000000000001");
        assert_close(sinh(d("2")).unwrap(), d("3.6268604078470187676682139828"), "0.0000000000000000000000001");
        assert_close(sinh(d("-3")).unwrap(), d("-10.017874927409901898974593619"), "0.000000000000000000000001");
        assert_close(sinh(d("50")).unwrap(), d("2592352764293536232043.7266615"), "0.001");

        assert_eq!(sinh(d("0.00000000000001")).unwrap(), d("0.00000000000001"));

        assert_eq!(sinh(d("100")), Err(Error::Overflow));
        assert_eq!(sinh(d("-100")), Err(Error::Overflow));
    }
}
