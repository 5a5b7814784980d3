//! Sine.

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

// sin:  x - x^3/3! + x^5/5! - x^7/7! + ...
struct SinSeries {
    term: Decimal,
    neg_x_sq: Decimal,
    k: u32,
}

impl SinSeries {
    fn new(x: Decimal) -> Result<Self, Error> {
        Ok(SinSeries {
            term: x,
            neg_x_sq: -mul(x, x)?,
            k: 0,
        })
    }
}

impl TermGen for SinSeries {
    fn next(&mut self) -> Result<Decimal, Error> {
        if self.k > 0 {
            // k is twice the iteration number: term *= -x^2 / (k * (k + 1))
            let f = div(self.neg_x_sq, Decimal::from(self.k * self.k + self.k))?;
            self.term = mul(self.term, f)?;
        }
        self.k += 2;

        Ok(self.term)
    }

    fn name(&self) -> &'static str {
        "sin"
    }
}

/// Computes the sine of `x` radians.
///
/// The argument is reduced into (-2*pi, 2*pi) first. Exact multiples of pi/2 return
/// exact results.
///
/// ## Errors
///
///  - Overflow: reduction of the argument failed (not expected for any finite decimal).
pub fn sin(x: Decimal) -> Result<Decimal, Error> {
    let x = remainder(x, TWO_PI)?;

    if x.is_zero() || x == PI || x == TWO_PI {
        return Ok(Decimal::ZERO);
    }

    if x == HALF_PI {
        return Ok(Decimal::ONE);
    }

    if x == add(PI, HALF_PI)? {
        return Ok(Decimal::NEGATIVE_ONE);
    }

    series_run(&mut SinSeries::new(x)?)
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
    fn test_sine() {
        assert_eq!(sin(Decimal::ZERO).unwrap(), Decimal::ZERO);
        assert_eq!(sin(PI).unwrap(), Decimal::ZERO);
        assert_eq!(sin(TWO_PI).unwrap(), Decimal::ZERO);
        assert_eq!(sin(HALF_PI).unwrap(), Decimal::ONE);
        assert_eq!(sin(PI + HALF_PI).unwrap(), Decimal::NEGATIVE_ONE);

        assert_close(sin(d("0.5")).unwrap(), d("0.4794255386042030002732879352"), "0.000000000000000000000000001");
        assert_close(sin(d("-0.5")).unwrap(), d("-0.4794255386042030002732879352"), "0.000000000000000000000000001");
        assert_close(sin(d("1")).unwrap(), d("0.8414709848078965066525023216"), "0.000000000000000000000000001");
        assert_close(sin(d("3")).unwrap(), d("0.1411200080598672221007448029"), "0.0000000000000000000000001");
        assert_close(sin(d("-2")).unwrap(), d("-0.9092974268256816953960198659"), "0.0000000000000000000000001");

        // small argument, the first term dominates
        assert_eq!(sin(d("0.0000000000001")).unwrap(), d("0.0000000000001"));
    }

    #[test]
    fn test_sine_large_arg() {
        assert_close(sin(d("100")).unwrap(), d("-0.5063656411097587936565576104"), "0.000000000000000000000001");
        assert_close(sin(d("1000000")).unwrap(), d("-0.3499935021712929521176525"), "0.0000000000000000001");
        assert_close(sin(d("-1000000")).unwrap(), d("0.3499935021712929521176525"), "0.0000000000000000001");
    }

    #[ignore]
    #[test]
    fn sine_perf() {
        let mut n = vec![];
        for _ in 0..10000 {
            let v: i64 = rand::random::<i64>() % 100_000_000;
            n.push(Decimal::new(v, 7));
        }

        for _ in 0..5 {
            let start_time = std::time::Instant::now();
            for ni in n.iter() {
                let _f = sin(*ni).unwrap();
            }
            let time = start_time.elapsed();
            println!("{}", time.as_millis());
        }
    }
}
