//! The `bigint!` construction macro.

/// Construct a [`BigInt`](crate::BigInt) from a literal.
///
/// Plain and binary (`0b`) integer literals are accepted, with an
/// optional leading minus and with `_` separators ignored. Values too
/// large for any primitive literal can be written as a string literal.
///
/// ```
/// use bigint::bigint;
///
/// let small = bigint!(42);
/// let negative = bigint!(-1_000_000);
/// let bits = bigint!(0b1010);
/// let huge = bigint!("123456789012345678901234567890123456789");
///
/// assert_eq!(small + bigint!(0), bigint!(42));
/// assert_eq!(bits, bigint!(10));
/// assert_eq!(negative.to_string(), "-1000000");
/// assert_eq!(huge.to_string(), "123456789012345678901234567890123456789");
/// ```
///
/// # Panics
///
/// Panics when the literal does not spell a valid integer, which is a
/// programming error at the call site rather than a runtime condition.
#[macro_export]
macro_rules! bigint {
    (- $value:literal) => {
        -$crate::BigInt::from_literal(stringify!($value))
    };
    ($value:literal) => {
        $crate::BigInt::from_literal(stringify!($value))
    };
}

impl crate::BigInt {
    // Support for the `bigint!` macro; not part of the public API.
    #[doc(hidden)]
    pub fn from_literal(repr: &str) -> crate::BigInt {
        use alloc::string::String;

        let repr = repr.trim_matches('"');
        let cleaned: String = repr.chars().filter(|&ch| ch != '_').collect();
        let (radix, digits) = match cleaned.strip_prefix("0b") {
            Some(rest) => (2, rest),
            None => (10, cleaned.as_str()),
        };
        match crate::BigInt::from_str_radix(digits, radix) {
            Ok(value) => value,
            Err(err) => panic!("invalid bigint literal `{}`: {}", repr, err),
        }
    }
}
