//! Construction from primitives and from text.

use super::{BigInt, Sign};
use crate::error::{Error, ErrorCode, Result};
use crate::math::{self, small, Limb, LimbVec};
use alloc::vec;
use core::str::FromStr;

fn from_magnitude_u128(value: u128) -> BigInt {
    let mut magnitude = LimbVec::new();
    let mut rest = value;
    loop {
        magnitude.push((rest & (Limb::MAX as u128)) as Limb);
        rest >>= math::LIMB_BITS;
        if rest == 0 {
            break;
        }
    }
    BigInt {
        sign: Sign::Positive,
        magnitude,
    }
}

macro_rules! from_unsigned {
    ($($ty:ty)*) => {$(
        impl From<$ty> for BigInt {
            fn from(value: $ty) -> BigInt {
                from_magnitude_u128(value as u128)
            }
        }
    )*};
}

macro_rules! from_signed {
    ($($ty:ty)*) => {$(
        impl From<$ty> for BigInt {
            fn from(value: $ty) -> BigInt {
                let magnitude = from_magnitude_u128(value.unsigned_abs() as u128);
                if value < 0 {
                    -magnitude
                } else {
                    magnitude
                }
            }
        }
    )*};
}

from_unsigned! {
    u8 u16 u32 u64 u128 usize
}

from_signed! {
    i8 i16 i32 i64 i128 isize
}

impl TryFrom<&BigInt> for u64 {
    type Error = Error;

    /// Checked narrowing; fails on negative values and on magnitudes
    /// wider than 64 bits.
    fn try_from(value: &BigInt) -> Result<u64> {
        if value.sign == Sign::Negative {
            return Err(Error::narrowing_overflow());
        }
        value.magnitude_to_u64().ok_or_else(Error::narrowing_overflow)
    }
}

impl TryFrom<&BigInt> for i64 {
    type Error = Error;

    /// Checked narrowing into the signed 64-bit range.
    fn try_from(value: &BigInt) -> Result<i64> {
        let magnitude = value
            .magnitude_to_u64()
            .ok_or_else(Error::narrowing_overflow)?;
        match value.sign {
            Sign::Positive if magnitude <= i64::MAX as u64 => Ok(magnitude as i64),
            Sign::Negative if magnitude <= (i64::MAX as u64) + 1 => {
                Ok((magnitude as i64).wrapping_neg())
            }
            _ => Err(Error::narrowing_overflow()),
        }
    }
}

impl BigInt {
    /// Parse from text in the given radix. Only radix 2 and radix 10 are
    /// implemented; any other radix fails with
    /// [`ErrorCode::UnsupportedRadix`] rather than guessing.
    ///
    /// An optional leading `+` or `-` is accepted. `"-0"` parses to
    /// canonical (positive) zero.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let x = BigInt::from_str_radix("-170141183460469231731687303715884105728", 10)?;
    /// assert_eq!(x, BigInt::from(i128::MIN));
    ///
    /// let y = BigInt::from_str_radix("101", 2)?;
    /// assert_eq!(y, BigInt::from(5u64));
    /// # Ok::<(), bigint::Error>(())
    /// ```
    pub fn from_str_radix(text: &str, radix: u32) -> Result<BigInt> {
        if radix != 2 && radix != 10 {
            return Err(Error::unsupported_radix(radix));
        }

        let (sign, digits_start) = match text.as_bytes().first() {
            Some(b'-') => (Sign::Negative, 1),
            Some(b'+') => (Sign::Positive, 1),
            _ => (Sign::Positive, 0),
        };
        let digits = &text[digits_start..];
        if digits.is_empty() {
            return Err(Error::parse(ErrorCode::EmptyInput, digits_start));
        }

        let mut magnitude: LimbVec = vec![0];
        for (offset, ch) in digits.char_indices() {
            let digit = match ch.to_digit(radix) {
                Some(digit) => digit as Limb,
                None => {
                    return Err(Error::parse(
                        ErrorCode::InvalidDigit(ch),
                        digits_start + offset,
                    ));
                }
            };
            match radix {
                2 => {
                    small::ishl(&mut magnitude, 1);
                    magnitude[0] |= digit;
                }
                _ => {
                    small::imul(&mut magnitude, 10);
                    small::iadd(&mut magnitude, digit);
                }
            }
        }

        let mut value = BigInt { sign, magnitude };
        value.trim();
        Ok(value)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parse a decimal integer; equivalent to
    /// [`BigInt::from_str_radix`] with radix 10.
    fn from_str(text: &str) -> Result<BigInt> {
        BigInt::from_str_radix(text, 10)
    }
}
