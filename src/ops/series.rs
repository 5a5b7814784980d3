//! Power series computation appliance.
//!
//! All series in this crate share the same termination rule: terms are summed until a term
//! rounds to exactly zero. The decimal type keeps at most 28 fractional digits, so any term
//! smaller than `1e-28` in magnitude becomes zero and the loop stops. `MAX_ITERATIONS`
//! bounds the loop should that ever not happen.

use rust_decimal::Decimal;
use tracing::trace;
use tracing::warn;

use crate::defs::Error;
use crate::defs::MAX_ITERATIONS;
use crate::ops::util::add;

/// Generator of series terms.
pub(crate) trait TermGen {
    /// Returns the next term of the series. The first call returns the first term.
    fn next(&mut self) -> Result<Decimal, Error>;

    /// Name of the series for diagnostics.
    fn name(&self) -> &'static str;
}

/// Sums the terms produced by `term_gen` until a term is exactly zero.
///
/// ## Errors
///
///  - Overflow: a term or the sum exceeds the representable range.
///  - NoConvergence: no zero term within `MAX_ITERATIONS`.
pub(crate) fn series_run<T: TermGen>(term_gen: &mut T) -> Result<Decimal, Error> {
    let mut acc = Decimal::ZERO;

    for niter in 0..MAX_ITERATIONS {
        let term = term_gen.next()?;

        if term.is_zero() {
            trace!(series = term_gen.name(), niter, "series converged");
            return Ok(acc);
        }

        acc = add(acc, term)?;
    }

    warn!(series = term_gen.name(), "series did not converge");

    Err(Error::NoConvergence)
}
