//! Natural logarithm.

use rust_decimal::Decimal;

use crate::defs::Error;
use crate::ops::consts::LN_10;
use crate::ops::consts::TENTH;
use crate::ops::series::series_run;
use crate::ops::series::TermGen;
use crate::ops::util::add;
use crate::ops::util::div;
use crate::ops::util::mul;
use crate::ops::util::sub;

// ln(x) = 2 * (y + y^3/3 + y^5/5 + ...), y = (x - 1) / (x + 1)
struct LnSeries {
    y_sq: Decimal,
    power: Decimal,
    i: u32,
}

impl LnSeries {
    fn new(x: Decimal) -> Result<Self, Error> {
        let y = div(sub(x, Decimal::ONE)?, add(x, Decimal::ONE)?)?;
        let y_sq = mul(y, y)?;
        let power = mul(Decimal::TWO, y)?;

        Ok(LnSeries { y_sq, power, i: 0 })
    }
}

impl TermGen for LnSeries {
    fn next(&mut self) -> Result<Decimal, Error> {
        if self.i > 0 {
            self.power = mul(self.power, self.y_sq)?;
        }
        let ret = div(self.power, Decimal::from(2 * self.i + 1))?;
        self.i += 1;

        Ok(ret)
    }

    fn name(&self) -> &'static str {
        "ln"
    }
}

/// Computes the natural logarithm of `x`.
///
/// The argument is brought into [0.1, 1] by powers of ten before summing the series,
/// and the result is corrected by multiples of ln(10).
///
/// ## Errors
///
///  - Domain: `x` is negative.
///  - Overflow: `x` is zero, the logarithm is negative infinity.
pub fn ln(x: Decimal) -> Result<Decimal, Error> {
    if x.is_zero() {
        return Err(Error::Overflow);
    }

    if x.is_sign_negative() {
        return Err(Error::Domain);
    }

    if x == Decimal::ONE {
        return Ok(Decimal::ZERO);
    }

    if x > Decimal::ONE {
        // ln(x) = ln(x / 10^n) + n*ln(10)
        let mut v = x;
        let mut n = 0u32;
        while v > Decimal::ONE {
            v = div(v, Decimal::TEN)?;
            n += 1;
        }

        return add(ln(v)?, mul(Decimal::from(n), LN_10)?);
    }

    if x < TENTH {
        // ln(x) = ln(x * 10^n) - n*ln(10)
        // close to zero y^2 is indistinguishable from 1 and the series never ends
        let mut v = x;
        let mut n = 0u32;
        while v < TENTH {
            v = mul(v, Decimal::TEN)?;
            n += 1;
        }

        return sub(ln(v)?, mul(Decimal::from(n), LN_10)?);
    }

    series_run(&mut LnSeries::new(x)?)
}
