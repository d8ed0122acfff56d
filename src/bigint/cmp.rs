//! Ordering and word-shortcut equality.

use super::{BigInt, Sign};
use crate::math::large;
use core::cmp::Ordering;

impl Ord for BigInt {
    /// Total order over all values.
    ///
    /// Differing signs resolve immediately; with equal signs the
    /// magnitude comparison decides, inverted for negative values.
    /// `PartialOrd` and the derived `<`, `<=`, `>`, `>=` all flow from
    /// this single implementation.
    fn cmp(&self, other: &BigInt) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => {
                large::compare(&self.magnitude, &other.magnitude)
            }
            (Sign::Negative, Sign::Negative) => {
                large::compare(&other.magnitude, &self.magnitude)
            }
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Shortcut equality against native words, so hot guards like `x == 0` and
// `x == 1` don't have to build a BigInt first.
macro_rules! partialeq_word {
    ($($ty:ty)*) => {$(
        impl PartialEq<$ty> for BigInt {
            fn eq(&self, other: &$ty) -> bool {
                self.sign == Sign::Positive && self.magnitude_to_u64() == Some(*other as u64)
            }
        }

        impl PartialEq<BigInt> for $ty {
            fn eq(&self, other: &BigInt) -> bool {
                other == self
            }
        }

        impl<'a> PartialEq<$ty> for &'a BigInt {
            fn eq(&self, other: &$ty) -> bool {
                (*self).eq(other)
            }
        }
    )*};
}

partialeq_word! {
    u8 u16 u32 u64 usize
}
