//! Arctangent.

use rust_decimal::Decimal;

use crate::defs::Error;
use crate::ops::consts::HALF_PI;
use crate::ops::consts::PI;
use crate::ops::consts::QUARTER_PI;
use crate::ops::series::series_run;
use crate::ops::series::TermGen;
use crate::ops::util::add;
use crate::ops::util::div;
use crate::ops::util::mul;
use crate::ops::util::sub;

// Euler's series: atan(x) = sum (2^2n * (n!)^2 / (2n+1)!) * x^(2n+1) / (1+x^2)^(n+1)
struct AtanSeries {
    term: Decimal,
    y: Decimal,
    k: u32,
}

impl AtanSeries {
    fn new(x: Decimal) -> Result<Self, Error> {
        let x_sq = mul(x, x)?;
        let x_sq_1 = add(Decimal::ONE, x_sq)?;

        Ok(AtanSeries {
            // x / (1 + x^2) rather than y / x keeps precision for very small x
            term: div(x, x_sq_1)?,
            y: div(x_sq, x_sq_1)?,
            k: 0,
        })
    }
}

impl TermGen for AtanSeries {
    fn next(&mut self) -> Result<Decimal, Error> {
        if self.k > 0 {
            // term *= y * k / (k + 1), k is twice the iteration number
            let f = div(mul(self.y, Decimal::from(self.k))?, Decimal::from(self.k + 1))?;
            self.term = mul(self.term, f)?;
        }
        self.k += 2;

        Ok(self.term)
    }

    fn name(&self) -> &'static str {
        "atan"
    }
}

/// Computes the arctangent of `x`. The result is in [-pi/2, pi/2].
///
/// ## Errors
///
///  - Overflow: an intermediate value exceeds the representable range.
pub fn atan(x: Decimal) -> Result<Decimal, Error> {
    if x == Decimal::NEGATIVE_ONE {
        return Ok(-QUARTER_PI);
    }

    if x.is_zero() {
        return Ok(Decimal::ZERO);
    }

    if x == Decimal::ONE {
        return Ok(QUARTER_PI);
    }

    // keep the series argument in [-1, 1]: atan(x) = +-pi/2 - atan(1/x)
    if x < Decimal::NEGATIVE_ONE {
        return sub(-HALF_PI, atan(div(Decimal::ONE, x)?)?);
    }

    if x > Decimal::ONE {
        return sub(HALF_PI, atan(div(Decimal::ONE, x)?)?);
    }

    series_run(&mut AtanSeries::new(x)?)
}

/// Computes the four quadrant arctangent of `y` and `x`. The result is in [-pi, pi].
///
/// ## Errors
///
///  - Overflow: an intermediate value exceeds the representable range.
pub fn atan2(y: Decimal, x: Decimal) -> Result<Decimal, Error> {
    if x.is_zero() && y.is_zero() {
        return Ok(Decimal::ZERO);
    }

    if x.is_zero() {
        return Ok(if y.is_sign_positive() { HALF_PI } else { -HALF_PI });
    }

    if y.is_zero() {
        return Ok(if x.is_sign_positive() { Decimal::ZERO } else { PI });
    }

    let ret = match div(y, x) {
        Ok(v) => atan(v)?,
        // |y/x| is beyond the range, the angle is pi/2 up to the last digit
        Err(Error::Overflow) => {
            if y.is_sign_positive() == x.is_sign_positive() {
                HALF_PI
            } else {
                -HALF_PI
            }
        }
        Err(e) => return Err(e),
    };

    if x.is_sign_positive() {
        Ok(ret)
    } else if y.is_sign_positive() {
        add(ret, PI)
    } else {
        sub(ret, PI)
    }
}
