use crate::constants::FAST_ADD_LIMIT;
use crate::ops::common::{self, Aligned};
use crate::ops::sub::Subtraction;
use crate::{Decimal, Sign};

/// An external facility for accelerated decimal addition over canonical
/// textual forms. `precision` is the fractional precision the reply must
/// carry. Returning `None` declines the call; [`Addition`] then falls back to
/// its own digit-level algorithm, so a facility never has to be total.
pub trait DecimalAdd: Send + Sync {
    fn add(&self, lhs: &str, rhs: &str, precision: u32) -> Option<String>;
}

/// Computes the exact sum of two [`Decimal`] values.
///
/// The operation is total and commutative. The result's fractional precision
/// always equals the larger of the two operand precisions, whether the native
/// fast path, the digit-by-digit loop or an injected [`DecimalAdd`] facility
/// produced it.
///
/// All configuration is read-only from construction, so one instance may
/// serve concurrent callers.
///
/// ```
/// use exact_decimal::{Addition, Decimal};
///
/// let add = Addition::new();
/// let sum = add.compute(&"999".parse()?, &"1".parse()?);
/// assert_eq!(sum.to_string(), "1000");
/// # Ok::<(), exact_decimal::Error>(())
/// ```
pub struct Addition {
    force_digitwise: bool,
    fast_limit: usize,
    accelerator: Option<Box<dyn DecimalAdd>>,
}

impl Addition {
    pub fn new() -> Addition {
        Addition {
            force_digitwise: false,
            fast_limit: FAST_ADD_LIMIT,
            accelerator: None,
        }
    }

    /// Delegates to `accelerator` when it accepts a call; the digit-level
    /// algorithm remains as the fallback and as the semantic reference.
    pub fn with_accelerator(accelerator: Box<dyn DecimalAdd>) -> Addition {
        Addition {
            accelerator: Some(accelerator),
            ..Addition::new()
        }
    }

    /// Forces the digit-level algorithm even when an accelerator is present.
    pub fn force_digitwise(mut self, force: bool) -> Addition {
        self.force_digitwise = force;
        self
    }

    /// Returns `lhs + rhs` exactly.
    pub fn compute(&self, lhs: &Decimal, rhs: &Decimal) -> Decimal {
        // The facility handles signs itself and is value-equivalent to the
        // own-implementation path below; it exists purely for throughput.
        if !self.force_digitwise {
            if let Some(sum) = self.delegate(lhs, rhs) {
                return sum;
            }
        }

        // a + b == a - (-b): whichever operand is negative is removed via the
        // subtraction redirection, so digit addition only ever runs on two
        // non-negative operands.
        if rhs.is_negative() {
            return Subtraction::new().compute(lhs, &rhs.abs());
        }
        if lhs.is_negative() {
            return Subtraction::new().compute(rhs, &lhs.abs());
        }

        // Identity shortcut for the literal "0". Deliberately a textual-form
        // check: a zero rendered with fractional digits ("0.00") takes the
        // general path so the sum keeps the wider precision.
        if is_literal_zero(lhs) {
            return rhs.clone();
        }
        if is_literal_zero(rhs) {
            return lhs.clone();
        }

        self.digitwise(lhs, rhs)
    }

    fn delegate(&self, lhs: &Decimal, rhs: &Decimal) -> Option<Decimal> {
        let accelerator = self.accelerator.as_deref()?;
        let scale = lhs.scale().max(rhs.scale());
        let reply = accelerator.add(&lhs.to_string(), &rhs.to_string(), scale)?;
        // A reply that does not parse or does not carry the requested
        // precision is discarded in favour of the digitwise path.
        let sum = reply.parse::<Decimal>().ok()?;
        (sum.scale() == scale).then_some(sum)
    }

    fn digitwise(&self, lhs: &Decimal, rhs: &Decimal) -> Decimal {
        let Aligned { lhs, rhs, scale } = common::align(lhs, rhs);
        let coefficient = self.add_aligned(&lhs, &rhs);
        Decimal::from_raw_parts(Sign::Positive, coefficient, scale)
    }

    fn add_aligned(&self, lhs: &str, rhs: &str) -> String {
        if self.in_fast_range(lhs) && self.in_fast_range(rhs) {
            if let (Ok(l), Ok(r)) = (lhs.parse::<i64>(), rhs.parse::<i64>()) {
                return (l + r).to_string();
            }
        }
        common::add_digits(lhs, rhs)
    }

    // A leading zero means the digits are a padding artifact rather than a
    // true magnitude; those stay on the digit loop.
    fn in_fast_range(&self, digits: &str) -> bool {
        digits.len() < self.fast_limit && !digits.starts_with('0')
    }
}

impl Default for Addition {
    fn default() -> Addition {
        Addition::new()
    }
}

fn is_literal_zero(value: &Decimal) -> bool {
    value.scale() == 0 && value.coefficient() == "0"
}
