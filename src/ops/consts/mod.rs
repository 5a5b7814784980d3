//! Mathematical constants at the full precision of the decimal type.

use lazy_static::lazy_static;
use rust_decimal::Decimal;

use crate::defs::MAX_SCALE;

/// Euler's number, 2.7182818284590452353602874714.
pub const E: Decimal = Decimal::from_parts(0x857aed5a, 0xebecde35, 0x57d519ab, false, 28);

/// Pi number, 3.1415926535897932384626433833.
pub const PI: Decimal = Decimal::from_parts(0x41b65f29, 0x0b143885, 0x6582a536, false, 28);

/// pi/2, 1.5707963267948966192313216916.
pub const HALF_PI: Decimal = Decimal::from_parts(0xa0db2f94, 0x058a1c42, 0x32c1529b, false, 28);

/// pi/4, 0.7853981633974483096156608458.
pub const QUARTER_PI: Decimal = Decimal::from_parts(0x506d97ca, 0x82c50e21, 0x1960a94d, false, 28);

/// pi/12, 0.2617993877991494365385536153.
pub const TWELFTH_PI: Decimal = Decimal::from_parts(0x1acf3299, 0x80ec5a0b, 0x08758dc4, false, 28);

/// 2*pi, 6.2831853071795864769252867666.
pub const TWO_PI: Decimal = Decimal::from_parts(0x836cbe52, 0x1628710a, 0xcb054a6c, false, 28);

/// Natural logarithm of 10, 2.3025850929940456840179914547.
pub const LN_10: Decimal = Decimal::from_parts(0x9fa69733, 0x1414b220, 0x4a668998, false, 28);

/// Natural logarithm of 2, 0.6931471805599453094172321215.
pub const LN_2: Decimal = Decimal::from_parts(0xaa7a65bf, 0x81f52f01, 0x1665943f, false, 28);

/// The smallest positive value, 1e-28.
pub const EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 28);

/// 0.5
pub(crate) const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// 0.1
pub(crate) const TENTH: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

lazy_static! {

    /// Powers of ten from 10^0 to 10^28.
    pub(crate) static ref ROUND_POWER_10: [Decimal; MAX_SCALE as usize + 1] = {
        let mut table = [Decimal::ONE; MAX_SCALE as usize + 1];
        for i in 1..table.len() {
            table[i] = table[i - 1] * Decimal::TEN;
        }
        table
    };

    /// Values at or above this magnitude have no fractional part left to round.
    pub(crate) static ref ROUND_LIMIT: Decimal = ROUND_POWER_10[MAX_SCALE as usize];
}
