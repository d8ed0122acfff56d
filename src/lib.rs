//! # Arbitrary-Precision Signed Integers
//!
//! This crate provides [`BigInt`], a signed integer with no fixed upper
//! bound on its magnitude. It is intended for the cases where primitive
//! integer types cannot contain a value; within the primitive range it is
//! inherently slower than the built-in types and makes no attempt to
//! compete with them.
//!
//! A `BigInt` is stored in sign-magnitude form: a [`Sign`] plus a
//! little-endian sequence of machine words. Keeping the sign out of band
//! is what makes the bitwise operators well-defined independent of sign,
//! and the magnitude is always kept in a canonical trimmed form so every
//! value has exactly one representation — including zero, which is always
//! positive.
//!
//! # Operating on values
//!
//! The full operator surface of the primitive integers is available:
//! arithmetic, comparison, bitwise logic, shifts, and the compound
//! assignments, plus mixed-operand forms against native words.
//!
//! ```
//! use bigint::{bigint, BigInt};
//!
//! let a = BigInt::from(u64::MAX);
//! let b = a.clone() + BigInt::from(1u64);
//! assert_eq!(b, bigint!("18446744073709551616"));
//!
//! // Division truncates toward zero and the remainder takes the sign of
//! // the dividend.
//! let (q, r) = bigint!(-7).div_rem(&bigint!(2));
//! assert_eq!((q, r), (bigint!(-3), bigint!(-1)));
//!
//! // The left shift never discards bits; it grows the value instead.
//! assert_eq!(bigint!(1) << 64, b);
//! ```
//!
//! # Construction and rendering
//!
//! Values come from primitive conversions (`From`), from text
//! ([`BigInt::from_str_radix`], radix 2 and 10), or from the [`bigint!`]
//! macro. Rendering goes through [`Display`] for decimal and
//! [`fmt::Binary`] for base 2; [`BigInt::to_string_radix`] wraps both and
//! falls back to decimal for any other radix.
//!
//! ```
//! use bigint::BigInt;
//! use std::str::FromStr;
//!
//! let x = BigInt::from_str("-12345678901234567890123456789")?;
//! assert_eq!(x.to_string(), "-12345678901234567890123456789");
//! # Ok::<(), bigint::Error>(())
//! ```
//!
//! # Errors
//!
//! Almost every operation is total. The exceptions return
//! [`Error`] (or panic in the operator forms, which have no way to report
//! one): division by zero, parsing invalid text, requesting an
//! unimplemented radix, and checked narrowing of an oversized value. See
//! [`ErrorCode`] for the full taxonomy.
//!
//! [`Display`]: core::fmt::Display
//! [`fmt::Binary`]: core::fmt::Binary

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![allow(
    clippy::comparison_chain,
    clippy::module_name_repetitions,
    clippy::needless_doctest_main
)]

extern crate alloc;

pub mod error;

mod bigint;
mod macros;
mod math;

pub use crate::bigint::{BigInt, Sign};
pub use crate::error::{Category, Error, ErrorCode, Result};

/// The native word backing one limb of a magnitude: `u64` on 64-bit
/// targets, `u32` elsewhere. Selected at build time, not per instance.
pub use crate::math::Limb as Word;
