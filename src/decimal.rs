use crate::error::{tail_error, Error};
use crate::ops::{common, Addition, Subtraction};
use core::ops::{Add, Neg, Sub};
use num_traits::Zero;

/// Sign of a [`Decimal`] value. Canonical zero is always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

/// An exact decimal number of unbounded magnitude and precision.
///
/// The value is held as a sign, a string of decimal digit characters
/// (the coefficient, magnitude only) and a scale counting how many of those
/// digits sit right of the decimal point:
/// `value = sign × coefficient × 10^(−scale)`.
///
/// Instances are immutable; every arithmetic operation returns a fresh value,
/// so a shared reference is safe to hand to any number of threads.
///
/// Equality is representational: `1.5` and `1.50` carry different scales and
/// compare unequal. Precision is meaningful state and is never trimmed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decimal {
    sign: Sign,
    coefficient: String,
    scale: u32,
}

impl Decimal {
    /// Builds a `Decimal` from explicit parts.
    ///
    /// The coefficient must be one or more ASCII digits and `scale` may not
    /// exceed its length. Superfluous leading zeros in the integer portion
    /// collapse, and an all-zero coefficient forces a positive sign.
    ///
    /// ```
    /// use exact_decimal::{Decimal, Sign};
    ///
    /// let d = Decimal::from_parts(Sign::Negative, "314", 2)?;
    /// assert_eq!(d.to_string(), "-3.14");
    /// # Ok::<(), exact_decimal::Error>(())
    /// ```
    pub fn from_parts(sign: Sign, coefficient: impl Into<String>, scale: u32) -> Result<Decimal, Error> {
        let coefficient = coefficient.into();
        if coefficient.is_empty() {
            return tail_error("Invalid decimal: empty coefficient");
        }
        if !coefficient.bytes().all(|b| b.is_ascii_digit()) {
            return tail_error("Invalid decimal: coefficient must contain only digits");
        }
        if scale as usize > coefficient.len() {
            return Err(Error::ScaleExceedsCoefficient {
                scale,
                digits: coefficient.len(),
            });
        }
        let stripped = common::strip_leading_zeros(&coefficient, scale);
        let mut coefficient = if stripped.len() == coefficient.len() {
            coefficient
        } else {
            stripped.to_string()
        };
        // Keep at least one integer digit, matching what parsing produces.
        if coefficient.len() == scale as usize {
            coefficient.insert(0, '0');
        }
        Ok(Decimal::from_raw_parts(sign, coefficient, scale))
    }

    // Parts must already be validated and normalized.
    pub(crate) fn from_raw_parts(sign: Sign, coefficient: String, scale: u32) -> Decimal {
        debug_assert!(!coefficient.is_empty());
        debug_assert!(coefficient.bytes().all(|b| b.is_ascii_digit()));
        debug_assert!(scale as usize <= coefficient.len());
        let sign = if coefficient.bytes().all(|b| b == b'0') {
            Sign::Positive
        } else {
            sign
        };
        Decimal { sign, coefficient, scale }
    }

    /// The canonical zero value (`"0"`, scale 0).
    pub fn zero() -> Decimal {
        Decimal {
            sign: Sign::Positive,
            coefficient: String::from("0"),
            scale: 0,
        }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The digit characters of the magnitude, without sign or decimal point.
    pub fn coefficient(&self) -> &str {
        &self.coefficient
    }

    /// Count of coefficient digits right of the decimal point.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Fractional precision; a synonym for [`scale`](Decimal::scale).
    pub fn precision(&self) -> u32 {
        self.scale
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Value-based zero test, independent of scale: `0.00` is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficient.bytes().all(|b| b == b'0')
    }

    /// Returns the same magnitude and scale with a positive sign.
    pub fn abs(&self) -> Decimal {
        Decimal {
            sign: Sign::Positive,
            coefficient: self.coefficient.clone(),
            scale: self.scale,
        }
    }
}

impl Default for Decimal {
    fn default() -> Decimal {
        Decimal::zero()
    }
}

impl Zero for Decimal {
    fn zero() -> Decimal {
        Decimal::zero()
    }

    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        // Zero keeps its positive sign.
        if self.is_zero() {
            return self;
        }
        let sign = match self.sign {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        };
        Decimal { sign, ..self }
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        -self.clone()
    }
}

impl Add for Decimal {
    type Output = Decimal;

    fn add(self, other: Decimal) -> Decimal {
        Addition::new().compute(&self, &other)
    }
}

impl Add<&Decimal> for &Decimal {
    type Output = Decimal;

    fn add(self, other: &Decimal) -> Decimal {
        Addition::new().compute(self, other)
    }
}

impl Sub for Decimal {
    type Output = Decimal;

    fn sub(self, other: Decimal) -> Decimal {
        Subtraction::new().compute(&self, &other)
    }
}

impl Sub<&Decimal> for &Decimal {
    type Output = Decimal;

    fn sub(self, other: &Decimal) -> Decimal {
        Subtraction::new().compute(self, other)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_parts_strips_superfluous_leading_zeros() {
        let d = Decimal::from_parts(Sign::Positive, "00075", 1).unwrap();
        assert_eq!(d.coefficient(), "75");
        assert_eq!(d.to_string(), "7.5");
    }

    #[test]
    fn from_parts_keeps_zero_integer_digit() {
        let d = Decimal::from_parts(Sign::Positive, "011", 2).unwrap();
        assert_eq!(d.coefficient(), "011");
        assert_eq!(d.to_string(), "0.11");
    }

    #[test]
    fn from_parts_rejects_scale_beyond_digits() {
        assert_eq!(
            Decimal::from_parts(Sign::Positive, "5", 2),
            Err(Error::ScaleExceedsCoefficient { scale: 2, digits: 1 })
        );
    }

    #[test]
    fn from_parts_rejects_non_digits() {
        assert!(Decimal::from_parts(Sign::Positive, "1a2", 0).is_err());
        assert!(Decimal::from_parts(Sign::Positive, "", 0).is_err());
    }

    #[test]
    fn all_zero_coefficient_is_positive() {
        let d = Decimal::from_parts(Sign::Negative, "000", 2).unwrap();
        assert!(!d.is_negative());
        assert!(d.is_zero());
        assert_eq!(d.to_string(), "0.00");
    }

    #[test]
    fn negation_flips_sign_but_not_zero() {
        let d: Decimal = "1.5".parse().unwrap();
        assert_eq!((-d).to_string(), "-1.5");
        let z: Decimal = "0.00".parse().unwrap();
        assert!(!(-z).is_negative());
    }

    #[test]
    fn abs_keeps_scale() {
        let d: Decimal = "-3.140".parse().unwrap();
        let p = d.abs();
        assert!(!p.is_negative());
        assert_eq!(p.scale(), 3);
        assert_eq!(p.to_string(), "3.140");
    }

    #[test]
    fn zero_trait_matches_canonical_zero() {
        let z: Decimal = Zero::zero();
        assert_eq!(z, Decimal::default());
        assert_eq!(z.to_string(), "0");
    }

    #[test]
    fn operator_sugar_delegates_to_operations() {
        let a: Decimal = "1.5".parse().unwrap();
        let b: Decimal = "2.25".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "3.75");
        assert_eq!((&a - &b).to_string(), "-0.75");
        assert_eq!((a + b).to_string(), "3.75");
    }
}
