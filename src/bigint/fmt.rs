//! Rendering to text.

use super::{BigInt, Sign};
use crate::math::{self, small, Limb};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};

impl BigInt {
    /// Render in the given radix.
    ///
    /// Base 2 renders the magnitude bits most significant first; every
    /// other requested base falls back to base 10. The fallback is a
    /// documented quirk of this type rather than an error, so callers
    /// never need to handle a failure when formatting.
    pub fn to_string_radix(&self, radix: u32) -> String {
        use alloc::string::ToString;

        match radix {
            2 => {
                let mut out = String::new();
                if self.sign == Sign::Negative {
                    out.push('-');
                }
                out.push_str(&self.binary_digits());
                out
            }
            _ => self.to_string(),
        }
    }

    /// The decimal digits of the magnitude, without sign.
    ///
    /// Peels off the largest power of ten that fits in one limb per
    /// division pass, then formats each chunk with `itoa`; only the most
    /// significant chunk may drop leading zeros.
    fn decimal_digits(&self) -> String {
        if self.is_zero() {
            let mut out = String::new();
            out.push('0');
            return out;
        }

        let mut magnitude = self.magnitude.clone();
        let mut chunks: Vec<Limb> = Vec::new();
        while !(magnitude.len() == 1 && magnitude[0] == 0) {
            chunks.push(small::idiv(&mut magnitude, math::DECIMAL_CHUNK));
        }

        let mut out = String::with_capacity(chunks.len() * math::DECIMAL_CHUNK_DIGITS);
        let mut buffer = itoa::Buffer::new();
        for (i, chunk) in chunks.iter().rev().enumerate() {
            let digits = buffer.format(*chunk);
            if i > 0 {
                for _ in digits.len()..math::DECIMAL_CHUNK_DIGITS {
                    out.push('0');
                }
            }
            out.push_str(digits);
        }
        out
    }

    /// The binary digits of the magnitude, without sign: each limb's bits
    /// directly, most significant limb first, with only the leading
    /// zeros of the top limb dropped.
    fn binary_digits(&self) -> String {
        let bits = self.bit_length().max(1);
        let mut out = String::with_capacity(bits);
        for index in (0..bits).rev() {
            out.push(if self.bit(index) { '1' } else { '0' });
        }
        out
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(self.sign == Sign::Positive, "", &self.decimal_digits())
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(self.sign == Sign::Positive, "0b", &self.binary_digits())
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}
