use crate::decimal::{Decimal, Sign};
use crate::error::{tail_error, Error};
use core::fmt;
use core::str::FromStr;

/// Parses the canonical textual form `[-]digits[.digits]`.
pub(crate) fn parse_str(input: &str) -> Result<Decimal, Error> {
    let bytes = input.as_bytes();
    let (negative, digits) = match bytes {
        [] => return tail_error("Invalid decimal: empty"),
        [b'-', rest @ ..] => (true, rest),
        _ => (false, bytes),
    };
    let (integer, fraction) = split_parts(digits)?;

    // Superfluous leading zeros collapse; the single digit "0" survives.
    let mut integer = integer;
    while integer.len() > 1 && integer[0] == b'0' {
        integer = &integer[1..];
    }

    let mut coefficient = String::with_capacity(integer.len() + fraction.len());
    push_digits(&mut coefficient, integer)?;
    push_digits(&mut coefficient, fraction)?;

    let scale = u32::try_from(fraction.len())
        .map_err(|_| Error::from("Invalid decimal: fractional part exceeds supported precision"))?;
    let sign = if negative && !coefficient.bytes().all(|b| b == b'0') {
        Sign::Negative
    } else {
        Sign::Positive
    };
    Ok(Decimal::from_raw_parts(sign, coefficient, scale))
}

fn split_parts(digits: &[u8]) -> Result<(&[u8], &[u8]), Error> {
    match digits.iter().position(|&b| b == b'.') {
        Some(point) => {
            let integer = &digits[..point];
            let fraction = &digits[point + 1..];
            if integer.is_empty() {
                return tail_error("Invalid decimal: no integer digits");
            }
            if fraction.is_empty() {
                return tail_error("Invalid decimal: no fractional digits");
            }
            if fraction.contains(&b'.') {
                return tail_error("Invalid decimal: two decimal points");
            }
            Ok((integer, fraction))
        }
        None => {
            if digits.is_empty() {
                return tail_error("Invalid decimal: no digits found");
            }
            Ok((digits, &digits[..0]))
        }
    }
}

fn push_digits(out: &mut String, digits: &[u8]) -> Result<(), Error> {
    for &b in digits {
        match b {
            b'0'..=b'9' => out.push(char::from(b)),
            _ => return tail_error("Invalid decimal: unknown character"),
        }
    }
    Ok(())
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Decimal, Error> {
        parse_str(s)
    }
}

impl TryFrom<&str> for Decimal {
    type Error = Error;

    fn try_from(value: &str) -> Result<Decimal, Error> {
        parse_str(value)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        let coefficient = self.coefficient();
        let scale = self.scale() as usize;
        if scale == 0 {
            return f.write_str(coefficient);
        }
        if coefficient.len() > scale {
            let (integer, fraction) = coefficient.split_at(coefficient.len() - scale);
            write!(f, "{integer}.{fraction}")
        } else {
            // A shorter coefficient is implicitly left-padded with zeros.
            f.write_str("0.")?;
            for _ in coefficient.len()..scale {
                f.write_str("0")?;
            }
            f.write_str(coefficient)
        }
    }
}
