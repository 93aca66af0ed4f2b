// The fast addition path accumulates into an `i64`. `i64::MAX` spans
// `NATIVE_MAX_DIGITS` digits; operands are kept strictly below
// `FAST_ADD_LIMIT` digits so that the sum of two maximal fast-path operands
// can never overflow the accumulator. Derived from the integer width rather
// than hardcoded so a different accumulator type moves the limit with it.
pub(crate) const NATIVE_MAX_DIGITS: usize = i64::MAX.ilog10() as usize + 1;
pub(crate) const FAST_ADD_LIMIT: usize = NATIVE_MAX_DIGITS - 1;
