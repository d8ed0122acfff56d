//! Bitwise and shift operators.
//!
//! Bitwise combination acts on magnitudes with the shorter operand
//! zero-extended; the sign is positive exactly when the operand signs
//! agree, mirroring the product rule. Complement inverts every limb of
//! the magnitude over its current width, never a two's-complement
//! reinterpretation, because the sign lives out of band.

use super::{forward_binop, BigInt};
use crate::math::{self, large};
use core::mem;
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

impl BitAnd for BigInt {
    type Output = BigInt;

    fn bitand(mut self, other: BigInt) -> BigInt {
        self.sign = self.sign * other.sign;
        large::iand(&mut self.magnitude, &other.magnitude);
        self.trim();
        self
    }
}

impl BitOr for BigInt {
    type Output = BigInt;

    fn bitor(mut self, other: BigInt) -> BigInt {
        self.sign = self.sign * other.sign;
        large::ior(&mut self.magnitude, &other.magnitude);
        self.trim();
        self
    }
}

impl BitXor for BigInt {
    type Output = BigInt;

    fn bitxor(mut self, other: BigInt) -> BigInt {
        self.sign = self.sign * other.sign;
        large::ixor(&mut self.magnitude, &other.magnitude);
        self.trim();
        self
    }
}

forward_binop!(impl BitAnd, bitand);
forward_binop!(impl BitOr, bitor);
forward_binop!(impl BitXor, bitxor);

impl Not for BigInt {
    type Output = BigInt;

    fn not(mut self) -> BigInt {
        large::inot(&mut self.magnitude);
        self.trim();
        self
    }
}

impl<'a> Not for &'a BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        !self.clone()
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    /// Value-preserving left shift; see [`BigInt::expand_shl`]. Use
    /// [`BigInt::truncating_shl`] for the width-preserving variant.
    fn shl(mut self, bits: usize) -> BigInt {
        math::small::ishl(&mut self.magnitude, bits);
        self.trim();
        self
    }
}

impl<'a> Shl<usize> for &'a BigInt {
    type Output = BigInt;

    fn shl(self, bits: usize) -> BigInt {
        self.clone() << bits
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    /// Right shift, discarding bits shifted out of the low end. Shifting
    /// by at least [`bit_length`](BigInt::bit_length) yields zero.
    fn shr(mut self, bits: usize) -> BigInt {
        let limb_shift = bits / math::LIMB_BITS;
        if limb_shift >= self.magnitude.len() {
            return BigInt::zero();
        }

        self.magnitude.drain(..limb_shift);
        let bit_shift = bits % math::LIMB_BITS;
        if bit_shift > 0 {
            let mask = ((1 as math::Limb) << bit_shift) - 1;
            let mut spill: math::Limb = 0;
            for limb in self.magnitude.iter_mut().rev() {
                let kept = *limb & mask;
                *limb = (*limb >> bit_shift) | (spill << (math::LIMB_BITS - bit_shift));
                spill = kept;
            }
        }
        self.trim();
        self
    }
}

impl<'a> Shr<usize> for &'a BigInt {
    type Output = BigInt;

    fn shr(self, bits: usize) -> BigInt {
        self.clone() >> bits
    }
}

impl ShlAssign<usize> for BigInt {
    fn shl_assign(&mut self, bits: usize) {
        let value = mem::take(self);
        *self = value << bits;
    }
}

impl ShrAssign<usize> for BigInt {
    fn shr_assign(&mut self, bits: usize) {
        let value = mem::take(self);
        *self = value >> bits;
    }
}

macro_rules! bitwise_assign {
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

bitwise_assign! {
    impl BitAndAssign, bitand_assign, &
    impl BitOrAssign, bitor_assign, |
    impl BitXorAssign, bitxor_assign, ^
}
