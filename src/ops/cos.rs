//! Cosine.

use rust_decimal::Decimal;

use crate::defs::Error;
use crate::ops::consts::HALF_PI;
use crate::ops::consts::PI;
use crate::ops::consts::TWO_PI;
use crate::ops::series::series_run;
use crate::ops::series::TermGen;
use crate::ops::util::add;
use crate::ops::util::div;
use crate::ops::util::mul;
use crate::ops::util::remainder;

// cos:  1 - x^2/2! + x^4/4! - x^6/6! + ...
struct CosSeries {
    term: Decimal,
    neg_x_sq: Decimal,
    k: u32,
}

impl CosSeries {
    fn new(x: Decimal) -> Result<Self, Error> {
        Ok(CosSeries {
            term: Decimal::ONE,
            neg_x_sq: -mul(x, x)?,
            k: 0,
        })
    }
}

impl TermGen for CosSeries {
    fn next(&mut self) -> Result<Decimal, Error> {
        if self.k > 0 {
            // k is twice the iteration number: term *= -x^2 / ((k - 1) * k)
            let f = div(self.neg_x_sq, Decimal::from(self.k * self.k - self.k))?;
            self.term = mul(self.term, f)?;
        }
        self.k += 2;

        Ok(self.term)
    }

    fn name(&self) -> &'static str {
        "cos"
    }
}

/// Computes the cosine of `x` radians.
///
/// The argument is reduced into (-2*pi, 2*pi) first. Exact multiples of pi/2 return
/// exact results.
///
/// ## Errors
///
///  - Overflow: reduction of the argument failed (not expected for any finite decimal).
pub fn cos(x: Decimal) -> Result<Decimal, Error> {
    let x = remainder(x, TWO_PI)?;

    if x.is_zero() || x == TWO_PI {
        return Ok(Decimal::ONE);
    }

    if x == PI {
        return Ok(Decimal::NEGATIVE_ONE);
    }

    if x == HALF_PI || x == add(PI, HALF_PI)? {
        return Ok(Decimal::ZERO);
    }

    series_run(&mut CosSeries::new(x)?)
}
