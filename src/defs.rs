//! Definitions.

use core::fmt;

/// Maximum number of fractional digits a decimal can carry.
pub const MAX_SCALE: u32 = 28;

/// Maximum number of fractional digits accepted by the rounding functions.
pub const MAX_ROUNDING_DIGITS: u32 = MAX_SCALE;

/// Ceiling on the number of iterations of any series or Newton loop.
///
/// Every loop in this crate terminates long before the ceiling because the decimal type
/// clamps values below `1e-28` to zero. Reaching it means that property was violated.
pub const MAX_ITERATIONS: usize = 1 << 16;

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Argument is outside of the domain of the function.
    OutOfRange,

    /// Argument is structurally invalid for the operation.
    InvalidArgument,

    /// The result would be a complex number.
    Domain,

    /// The result is infinite or exceeds the representable range.
    Overflow,

    /// The function is undefined at the given argument.
    Undefined,

    /// The operation itself is undefined, e.g. a logarithm to base 1.
    InvalidOperation,

    /// Divisor is zero.
    DivisionByZero,

    /// An iterative computation did not converge within `MAX_ITERATIONS` steps.
    NoConvergence,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Error::OutOfRange => "argument is out of the range of the function",
            Error::InvalidArgument => "invalid argument",
            Error::Domain => "the result is a complex number",
            Error::Overflow => "the result can't be represented by the decimal type",
            Error::Undefined => "the function is undefined at this argument",
            Error::InvalidOperation => "the operation is undefined",
            Error::DivisionByZero => "division by zero",
            Error::NoConvergence => "iteration did not converge",
        };
        f.write_str(repr)
    }
}

impl std::error::Error for Error {}

/// Midpoint rounding policy.
///
/// Every policy except `None` decides in which direction a value lying exactly halfway
/// between two neighbours is rounded. Values not on a midpoint always go to the nearest neighbour.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// No rounding. Not accepted by the rounding functions.
    None,

    /// Round half toward positive infinity.
    Up,

    /// Round half toward negative infinity.
    Down,

    /// Round half toward zero.
    ToZero,

    /// Round half away from zero.
    FromZero,

    /// Round half to even.
    ToEven,

    /// Round half to odd.
    ToOdd,
}

/// Default rounding mode.
pub const DEFAULT_RM: RoundingMode = RoundingMode::ToEven;
