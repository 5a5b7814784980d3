//! Mathematical functions on decimal numbers.

mod acos;
mod acosh;
mod asin;
mod asinh;
mod atan;
mod atanh;
mod cbrt;
pub mod consts;
mod cos;
mod cosh;
mod ln;
mod log;
mod other;
mod pow;
mod round;
mod series;
mod sin;
mod sinh;
mod sqrt;
mod tan;
mod tanh;
mod util;

pub use acos::acos;
pub use acosh::acosh;
pub use asin::asin;
pub use asinh::asinh;
pub use atan::atan;
pub use atan::atan2;
pub use atanh::atanh;
pub use cbrt::cbrt;
pub use cos::cos;
pub use cosh::cosh;
pub use ln::ln;
pub use log::log;
pub use log::log10;
pub use log::log2;
pub use other::abs;
pub use other::ceiling;
pub use other::floor;
pub use other::max;
pub use other::min;
pub use other::sign;
pub use other::truncate;
pub use pow::exp;
pub use pow::pow;
pub use round::ieee_remainder;
pub use round::round;
pub use round::round_dp;
pub use round::round_dp_with;
pub use round::round_with;
pub use sin::sin;
pub use sinh::sinh;
pub use sqrt::sqrt;
pub use tan::tan;
pub use tanh::tanh;
