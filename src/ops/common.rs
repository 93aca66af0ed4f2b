use crate::Decimal;

// Operand coefficients after normalization: equal scale, equal length.
pub(crate) struct Aligned {
    pub lhs: String,
    pub rhs: String,
    pub scale: u32,
}

/// Aligns two coefficients for digit-by-digit arithmetic: the smaller-scale
/// operand is right-padded with zeros up to the larger scale, then the
/// shorter coefficient is left-padded with zeros to the common length.
pub(crate) fn align(lhs: &Decimal, rhs: &Decimal) -> Aligned {
    let scale = lhs.scale().max(rhs.scale());
    let lhs = pad_right(lhs.coefficient(), (scale - lhs.scale()) as usize);
    let rhs = pad_right(rhs.coefficient(), (scale - rhs.scale()) as usize);
    let width = lhs.len().max(rhs.len());
    Aligned {
        lhs: pad_left(lhs, width),
        rhs: pad_left(rhs, width),
        scale,
    }
}

fn pad_right(digits: &str, zeros: usize) -> String {
    let mut out = String::with_capacity(digits.len() + zeros);
    out.push_str(digits);
    for _ in 0..zeros {
        out.push('0');
    }
    out
}

fn pad_left(digits: String, width: usize) -> String {
    if digits.len() >= width {
        return digits;
    }
    let mut out = String::with_capacity(width);
    for _ in digits.len()..width {
        out.push('0');
    }
    out.push_str(&digits);
    out
}

/// Schoolbook addition of two equal-length digit strings. A final carry
/// prepends exactly one digit: a per-position sum is at most 9 + 9 + 1 = 19.
pub(crate) fn add_digits(lhs: &str, rhs: &str) -> String {
    debug_assert_eq!(lhs.len(), rhs.len());
    let mut out = Vec::with_capacity(lhs.len() + 1);
    let mut carry = 0u8;
    for (l, r) in lhs.bytes().rev().zip(rhs.bytes().rev()) {
        let sum = (l - b'0') + (r - b'0') + carry;
        if sum >= 10 {
            out.push(b'0' + sum - 10);
            carry = 1;
        } else {
            out.push(b'0' + sum);
            carry = 0;
        }
    }
    if carry != 0 {
        out.push(b'1');
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}

/// Schoolbook subtraction of two equal-length digit strings.
/// The caller guarantees `lhs >= rhs`, so no borrow survives the last digit.
pub(crate) fn sub_digits(lhs: &str, rhs: &str) -> String {
    debug_assert_eq!(lhs.len(), rhs.len());
    debug_assert!(lhs >= rhs);
    let mut out = Vec::with_capacity(lhs.len());
    let mut borrow = 0u8;
    for (l, r) in lhs.bytes().rev().zip(rhs.bytes().rev()) {
        let minuend = l - b'0';
        let subtrahend = r - b'0' + borrow;
        if minuend < subtrahend {
            out.push(b'0' + minuend + 10 - subtrahend);
            borrow = 1;
        } else {
            out.push(b'0' + minuend - subtrahend);
            borrow = 0;
        }
    }
    debug_assert_eq!(borrow, 0);
    out.reverse();
    out.into_iter().map(char::from).collect()
}

/// Drops superfluous leading zeros, never shrinking the integer portion
/// below a single digit.
pub(crate) fn strip_leading_zeros(coefficient: &str, scale: u32) -> &str {
    let min_len = scale as usize + 1;
    let mut digits = coefficient;
    while digits.len() > min_len && digits.as_bytes()[0] == b'0' {
        digits = &digits[1..];
    }
    digits
}
