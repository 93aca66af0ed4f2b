use crate::ops::add::Addition;
use crate::ops::common::{self, Aligned};
use crate::{Decimal, Sign};
use core::cmp::Ordering;

/// Computes the exact difference of two [`Decimal`] values.
///
/// Total and exact; the result's fractional precision equals the larger of
/// the two operand precisions. Negative operands are removed up front by
/// redirecting through [`Addition`] (`a - (-b) == a + b`), so the borrow loop
/// only ever runs on two non-negative operands.
pub struct Subtraction;

impl Subtraction {
    pub fn new() -> Subtraction {
        Subtraction
    }

    /// Returns `lhs - rhs` exactly.
    pub fn compute(&self, lhs: &Decimal, rhs: &Decimal) -> Decimal {
        if rhs.is_negative() {
            return Addition::new().compute(lhs, &rhs.abs());
        }
        if lhs.is_negative() {
            // -a - b == -(a + b)
            return -Addition::new().compute(&lhs.abs(), rhs);
        }

        let Aligned { lhs, rhs, scale } = common::align(lhs, rhs);
        // Subtract the smaller magnitude from the larger; the sign records
        // which one that was. Equal magnitudes fall through as a positive
        // zero at the common scale.
        let (hi, lo, sign) = match lhs.as_str().cmp(rhs.as_str()) {
            Ordering::Less => (rhs.as_str(), lhs.as_str(), Sign::Negative),
            _ => (lhs.as_str(), rhs.as_str(), Sign::Positive),
        };
        let difference = common::sub_digits(hi, lo);
        let coefficient = common::strip_leading_zeros(&difference, scale).to_string();
        Decimal::from_raw_parts(sign, coefficient, scale)
    }
}

impl Default for Subtraction {
    fn default() -> Subtraction {
        Subtraction::new()
    }
}
