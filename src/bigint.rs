use crate::ops::DecimalAdd;
use num_bigint::{BigInt, Sign};

/// [`DecimalAdd`] accelerator backed by `num-bigint`: both operands are
/// scaled up to the requested precision as big integers, summed, and the
/// decimal point re-inserted. Value-equivalent to the digit-level algorithm
/// for every input it accepts.
pub struct BigIntAdder;

impl DecimalAdd for BigIntAdder {
    fn add(&self, lhs: &str, rhs: &str, precision: u32) -> Option<String> {
        let sum = scaled(lhs, precision)? + scaled(rhs, precision)?;
        Some(render(sum, precision as usize))
    }
}

// Reads a canonical textual form into an integer scaled by 10^precision.
// Declines inputs that do not parse or carry more fractional digits than
// requested; the caller falls back to its own algorithm.
fn scaled(text: &str, precision: u32) -> Option<BigInt> {
    let (number, negative) = match text.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (text, false),
    };
    let (integer, fraction) = match number.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (number, ""),
    };
    let precision = precision as usize;
    if fraction.len() > precision {
        return None;
    }
    let mut digits = String::with_capacity(integer.len() + precision);
    digits.push_str(integer);
    digits.push_str(fraction);
    for _ in fraction.len()..precision {
        digits.push('0');
    }
    let magnitude = digits.parse::<BigInt>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn render(sum: BigInt, precision: usize) -> String {
    let (sign, magnitude) = sum.into_parts();
    let mut digits = magnitude.to_string();
    while digits.len() <= precision {
        digits.insert(0, '0');
    }
    if precision > 0 {
        digits.insert(digits.len() - precision, '.');
    }
    // BigInt normalizes zero to Sign::NoSign, so "-0" cannot come out.
    if sign == Sign::Minus {
        digits.insert(0, '-');
    }
    digits
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Addition, Decimal};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn adds_at_the_requested_precision() {
        assert_eq!(BigIntAdder.add("1.5", "2.25", 2), Some("3.75".into()));
        assert_eq!(BigIntAdder.add("999", "1", 0), Some("1000".into()));
        assert_eq!(BigIntAdder.add("2", "-3", 0), Some("-1".into()));
        assert_eq!(BigIntAdder.add("-1.50", "1.5", 2), Some("0.00".into()));
    }

    #[test]
    fn declines_inputs_beyond_the_requested_precision() {
        assert_eq!(BigIntAdder.add("1.25", "1", 1), None);
    }

    #[test]
    fn agrees_with_the_digitwise_path() {
        let delegating = Addition::with_accelerator(Box::new(BigIntAdder));
        let digitwise = Addition::new().force_digitwise(true);
        let cases = [
            ("0.00", "3.1"),
            ("1.5", "2.25"),
            ("999999999999999999", "1"),
            ("500", "500"),
            ("123456789012345678901234567890.5", "0.50"),
        ];
        for (lhs, rhs) in cases {
            let (lhs, rhs) = (dec(lhs), dec(rhs));
            assert_eq!(delegating.compute(&lhs, &rhs), digitwise.compute(&lhs, &rhs));
        }
    }
}
