//! The `BigInt` type and its operator surface.
//!
//! A `BigInt` is a plain value: a sign plus a little-endian sequence of
//! limbs holding the magnitude. All arithmetic delegates to the limb
//! algorithms in [`crate::math`]; this module owns the sign logic and the
//! canonical-form invariant.

use crate::error::{Error, Result};
use crate::math::{self, large, small, Limb, LimbVec};
use alloc::vec;
use core::mem;
use core::ops::{Mul, Neg};

mod bits;
mod cmp;
mod fmt;
mod from;
mod ops;
mod traits;

#[cfg(feature = "serde")]
mod serde;

/// The sign of a [`BigInt`].
///
/// Zero is always stored with a `Positive` sign; every operation that can
/// produce a zero magnitude canonicalizes the sign, so there is exactly
/// one representation of zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    /// The value is less than zero.
    Negative,
    /// The value is greater than or equal to zero.
    Positive,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// An arbitrarily large signed integer.
///
/// The magnitude is stored least-significant limb first and is kept
/// trimmed: it never contains a most-significant zero limb except for the
/// value zero itself, which is exactly one zero limb with a positive sign.
///
/// `BigInt` is a value type. Binary operators take their operands by value
/// (with reference forwarding for convenience) and produce new values;
/// compound assignment replaces the whole value and is the only mutation
/// path besides [`inc`](BigInt::inc) and [`dec`](BigInt::dec).
///
/// ```
/// use bigint::BigInt;
///
/// let a = BigInt::from(u64::MAX);
/// let b = a.clone() + BigInt::from(1u64);
/// assert_eq!(b.to_string(), "18446744073709551616");
/// assert!(!b.fits_in_word());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) sign: Sign,
    pub(crate) magnitude: LimbVec,
}

/// Moved-from and `Default` values are canonical zero.
impl Default for BigInt {
    fn default() -> BigInt {
        BigInt::zero()
    }
}

// Macro for forwarding reference variants of a binary operator to the
// by-value implementation. Operands are cheap to clone relative to the
// O(n) or worse work every operator performs.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident) => {
        impl<'a> core::ops::$imp<&'a BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: &BigInt) -> BigInt {
                core::ops::$imp::$method(self, other.clone())
            }
        }

        impl<'a> core::ops::$imp<BigInt> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: BigInt) -> BigInt {
                core::ops::$imp::$method(self.clone(), other)
            }
        }

        impl<'a, 'b> core::ops::$imp<&'b BigInt> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: &BigInt) -> BigInt {
                core::ops::$imp::$method(self.clone(), other.clone())
            }
        }
    };
}

pub(crate) use forward_binop;

impl BigInt {
    /// The integer zero.
    pub fn zero() -> BigInt {
        BigInt {
            sign: Sign::Positive,
            magnitude: vec![0],
        }
    }

    /// The integer one.
    pub fn one() -> BigInt {
        BigInt {
            sign: Sign::Positive,
            magnitude: vec![1],
        }
    }

    /// Construct from a single limb, non-negative.
    pub fn from_word(word: Limb) -> BigInt {
        BigInt {
            sign: Sign::Positive,
            magnitude: vec![word],
        }
    }

    /// Construct from a single limb and an explicit sign.
    ///
    /// A zero magnitude ignores the requested sign and produces canonical
    /// zero.
    ///
    /// ```
    /// use bigint::{BigInt, Sign};
    ///
    /// let minus_five = BigInt::from_parts(5, Sign::Negative);
    /// assert_eq!(minus_five, BigInt::from(-5i64));
    ///
    /// // There is no negative zero.
    /// let zero = BigInt::from_parts(0, Sign::Negative);
    /// assert_eq!(zero.sign(), Sign::Positive);
    /// ```
    pub fn from_parts(word: Limb, sign: Sign) -> BigInt {
        let mut value = BigInt {
            sign,
            magnitude: vec![word],
        };
        value.trim();
        value
    }

    /// The sign of this value. Zero reports `Sign::Positive`.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The absolute value.
    pub fn abs(&self) -> BigInt {
        BigInt {
            sign: Sign::Positive,
            magnitude: self.magnitude.clone(),
        }
    }

    /// Whether this value is zero.
    pub fn is_zero(&self) -> bool {
        self.magnitude.len() == 1 && self.magnitude[0] == 0
    }

    /// Whether the magnitude fits in a single limb, making
    /// [`as_word`](BigInt::as_word) lossless.
    ///
    /// This is the guard for the narrowing cast; call it before trusting
    /// `as_word` on a value of unknown range.
    pub fn fits_in_word(&self) -> bool {
        self.magnitude.len() == 1
    }

    /// The least significant limb of the magnitude.
    ///
    /// This is a deliberately unchecked narrowing: high-order limbs and
    /// the sign are ignored. A caller that has not checked
    /// [`fits_in_word`](BigInt::fits_in_word) gets a truncated magnitude,
    /// which is a programming error rather than a recoverable one. Use the
    /// `TryFrom` impls for checked conversion.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let x = BigInt::from(42u64);
    /// assert!(x.fits_in_word());
    /// assert_eq!(x.as_word(), 42);
    /// ```
    pub fn as_word(&self) -> Limb {
        self.magnitude[0]
    }

    /// Read bit `index` of the magnitude, counting from the least
    /// significant bit. Reads past the magnitude return `false`.
    pub fn bit(&self, index: usize) -> bool {
        math::get_bit(&self.magnitude, index)
    }

    /// Number of bits needed to represent the magnitude. Zero has bit
    /// length zero.
    pub fn bit_length(&self) -> usize {
        small::bit_length(&self.magnitude)
    }

    /// Increment in place.
    ///
    /// When mutating the least significant limb alone is enough, the limb
    /// is updated directly; otherwise this falls back to a full addition.
    pub fn inc(&mut self) {
        match self.sign {
            Sign::Positive if self.magnitude[0] < Limb::MAX => {
                self.magnitude[0] += 1;
            }
            Sign::Negative if self.magnitude[0] > 0 => {
                self.magnitude[0] -= 1;
                self.trim();
            }
            _ => {
                let value = mem::take(self);
                *self = value + BigInt::one();
            }
        }
    }

    /// Decrement in place. Counterpart of [`inc`](BigInt::inc).
    pub fn dec(&mut self) {
        match self.sign {
            Sign::Negative if self.magnitude[0] < Limb::MAX => {
                self.magnitude[0] += 1;
            }
            Sign::Positive if self.magnitude[0] > 0 => {
                self.magnitude[0] -= 1;
                self.trim();
            }
            _ => {
                let value = mem::take(self);
                *self = value - BigInt::one();
            }
        }
    }

    /// Quotient and remainder in one pass, truncating toward zero.
    ///
    /// The remainder takes the sign of the dividend (truncated-modulo
    /// convention).
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero. Use
    /// [`try_div_rem`](BigInt::try_div_rem) for a fallible variant.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let (q, r) = BigInt::from(-7i64).div_rem(&BigInt::from(2u64));
    /// assert_eq!(q, BigInt::from(-3i64));
    /// assert_eq!(r, BigInt::from(-1i64));
    /// ```
    pub fn div_rem(&self, divisor: &BigInt) -> (BigInt, BigInt) {
        match self.try_div_rem(divisor) {
            Ok(pair) => pair,
            Err(err) => panic!("{}", err),
        }
    }

    /// Quotient and remainder, or [`ErrorCode::DivisionByZero`] when the
    /// divisor is zero.
    ///
    /// [`ErrorCode::DivisionByZero`]: crate::ErrorCode::DivisionByZero
    pub fn try_div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(Error::division_by_zero());
        }
        let (q_mag, r_mag) = large::div_rem(&self.magnitude, &divisor.magnitude);
        let mut quotient = BigInt {
            sign: self.sign * divisor.sign,
            magnitude: q_mag,
        };
        quotient.trim();
        let mut remainder = BigInt {
            sign: self.sign,
            magnitude: r_mag,
        };
        remainder.trim();
        Ok((quotient, remainder))
    }

    /// Fallible division. See [`try_div_rem`](BigInt::try_div_rem).
    pub fn try_div(&self, divisor: &BigInt) -> Result<BigInt> {
        self.try_div_rem(divisor).map(|(quotient, _)| quotient)
    }

    /// Fallible remainder. See [`try_div_rem`](BigInt::try_div_rem).
    pub fn try_rem(&self, divisor: &BigInt) -> Result<BigInt> {
        self.try_div_rem(divisor).map(|(_, remainder)| remainder)
    }

    /// Expanding left shift: grows the magnitude instead of discarding
    /// bits shifted past the current width. Equivalent to multiplication
    /// by two to the `bits`.
    ///
    /// The `<<` operator delegates here; the width-preserving variant is
    /// [`truncating_shl`](BigInt::truncating_shl).
    pub fn expand_shl(&self, bits: usize) -> BigInt {
        let mut out = self.clone();
        small::ishl(&mut out.magnitude, bits);
        out.trim();
        out
    }

    /// Left shift constrained to the current width of the magnitude: bits
    /// shifted past the most significant limb are discarded, and shifting
    /// by the full width or more yields zero.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// // One limb wide, so the set bit falls off the end...
    /// assert_eq!(BigInt::from(1u64).truncating_shl(64), BigInt::zero());
    /// // ...where the expanding shift would keep it.
    /// assert_eq!(BigInt::from(1u64).expand_shl(64).bit_length(), 65);
    /// ```
    pub fn truncating_shl(&self, bits: usize) -> BigInt {
        let len = self.magnitude.len();
        if bits >= len * math::LIMB_BITS {
            return BigInt::zero();
        }

        let limb_shift = bits / math::LIMB_BITS;
        let bit_shift = bits % math::LIMB_BITS;
        let mut out: LimbVec = vec![0; len];
        if bit_shift == 0 {
            out[limb_shift..].copy_from_slice(&self.magnitude[..len - limb_shift]);
        } else {
            for i in limb_shift..len {
                let current = self.magnitude[i - limb_shift] << bit_shift;
                let spill = if i > limb_shift {
                    self.magnitude[i - limb_shift - 1] >> (math::LIMB_BITS - bit_shift)
                } else {
                    0
                };
                out[i] = current | spill;
            }
        }

        let mut value = BigInt {
            sign: self.sign,
            magnitude: out,
        };
        value.trim();
        value
    }

    /// Restore the canonical form: pop most-significant zero limbs down
    /// to at least one limb, and force the sign positive when the value
    /// is zero.
    pub(crate) fn trim(&mut self) {
        small::normalize(&mut self.magnitude);
        if self.magnitude.len() == 1 && self.magnitude[0] == 0 {
            self.sign = Sign::Positive;
        }
    }

    /// The magnitude as a `u64` if it fits, regardless of sign.
    pub(crate) fn magnitude_to_u64(&self) -> Option<u64> {
        if self.magnitude.len() > 64 / math::LIMB_BITS {
            return None;
        }
        let mut value: u64 = 0;
        for (i, &limb) in self.magnitude.iter().enumerate() {
            value |= (limb as u64) << (i * math::LIMB_BITS);
        }
        Some(value)
    }
}
