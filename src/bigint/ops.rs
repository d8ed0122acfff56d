//! Arithmetic operators.
//!
//! Binary operators are read-only with respect to their operands and
//! produce new values; the compound-assignment family replaces `*self`
//! wholesale, leaving no other mutation path.

use super::{forward_binop, BigInt};
use crate::math::{large, Limb};
use core::cmp::Ordering;
use core::mem;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
        self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(mut self, other: BigInt) -> BigInt {
        if self.sign == other.sign {
            // Like signs: add the magnitudes, keep the common sign. The
            // carry out of the top limb grows the magnitude.
            large::iadd(&mut self.magnitude, &other.magnitude);
            self.trim();
            self
        } else {
            // Unlike signs: this is really subtraction of magnitudes, and
            // the result takes the sign of the larger magnitude.
            match large::compare(&self.magnitude, &other.magnitude) {
                Ordering::Equal => BigInt::zero(),
                Ordering::Greater => {
                    large::isub(&mut self.magnitude, &other.magnitude);
                    self.trim();
                    self
                }
                Ordering::Less => {
                    let mut out = other;
                    large::isub(&mut out.magnitude, &self.magnitude);
                    out.trim();
                    out
                }
            }
        }
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, other: BigInt) -> BigInt {
        // a - b = a + (-b); the addition above already resolves sign
        // crossings without ever needing a negative intermediate
        // magnitude.
        self + (-other)
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, other: BigInt) -> BigInt {
        let mut out = BigInt {
            sign: self.sign * other.sign,
            magnitude: large::mul(&self.magnitude, &other.magnitude),
        };
        out.trim();
        out
    }
}

impl Div for BigInt {
    type Output = BigInt;

    /// Truncating division.
    ///
    /// # Panics
    ///
    /// Panics on division by zero; see [`BigInt::try_div`].
    fn div(self, other: BigInt) -> BigInt {
        match self.try_div(&other) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Rem for BigInt {
    type Output = BigInt;

    /// Truncated-modulo remainder: the result takes the sign of `self`.
    ///
    /// # Panics
    ///
    /// Panics on division by zero; see [`BigInt::try_rem`].
    fn rem(self, other: BigInt) -> BigInt {
        match self.try_rem(&other) {
            Ok(remainder) => remainder,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_binop!(impl Add, add);
forward_binop!(impl Sub, sub);
forward_binop!(impl Mul, mul);
forward_binop!(impl Div, div);
forward_binop!(impl Rem, rem);

macro_rules! arithmetic_assign {
    ($(impl $imp:ident, $method:ident, $op:tt)*) => {$(
        impl $imp for BigInt {
            fn $method(&mut self, other: BigInt) {
                let value = mem::take(self);
                *self = value $op other;
            }
        }

        impl<'a> $imp<&'a BigInt> for BigInt {
            fn $method(&mut self, other: &BigInt) {
                let value = mem::take(self);
                *self = value $op other;
            }
        }
    )*};
}

arithmetic_assign! {
    impl AddAssign, add_assign, +
    impl SubAssign, sub_assign, -
    impl MulAssign, mul_assign, *
    impl DivAssign, div_assign, /
    impl RemAssign, rem_assign, %
}

// Limb operands on either side, so expressions like `2 * x + 1` read the
// way they do with primitive integers.

impl Add<Limb> for BigInt {
    type Output = BigInt;

    fn add(self, other: Limb) -> BigInt {
        self + BigInt::from_word(other)
    }
}

impl Add<BigInt> for Limb {
    type Output = BigInt;

    fn add(self, other: BigInt) -> BigInt {
        other + self
    }
}

impl Mul<Limb> for BigInt {
    type Output = BigInt;

    fn mul(self, other: Limb) -> BigInt {
        self * BigInt::from_word(other)
    }
}

impl Mul<BigInt> for Limb {
    type Output = BigInt;

    fn mul(self, other: BigInt) -> BigInt {
        other * self
    }
}
