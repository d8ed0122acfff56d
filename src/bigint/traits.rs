//! Integration with the `num-traits` ecosystem.
//!
//! `Zero`, `One`, `Num`, and `Signed` are enough for `BigInt` to slot
//! into generic numeric code written against num-traits bounds.

use super::{BigInt, Sign};
use crate::error::Error;
use num_traits::{Num, One, Signed, Zero};

impl Zero for BigInt {
    fn zero() -> BigInt {
        BigInt::zero()
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    fn one() -> BigInt {
        BigInt::one()
    }

    fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.magnitude.len() == 1 && self.magnitude[0] == 1
    }
}

impl Num for BigInt {
    type FromStrRadixErr = Error;

    fn from_str_radix(text: &str, radix: u32) -> Result<BigInt, Error> {
        BigInt::from_str_radix(text, radix)
    }
}

impl Signed for BigInt {
    fn abs(&self) -> BigInt {
        BigInt::abs(self)
    }

    /// The positive difference: zero when `self <= other`, otherwise
    /// `self - other`.
    fn abs_sub(&self, other: &BigInt) -> BigInt {
        if self <= other {
            BigInt::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> BigInt {
        if self.is_zero() {
            BigInt::zero()
        } else if self.sign == Sign::Positive {
            BigInt::one()
        } else {
            -BigInt::one()
        }
    }

    fn is_positive(&self) -> bool {
        self.sign == Sign::Positive && !self.is_zero()
    }

    fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }
}
