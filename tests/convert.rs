use bigint::{bigint, BigInt, Category, ErrorCode, Sign, Word};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::str::FromStr;

#[test]
fn decimal_round_trip() {
    let cases = [
        "0",
        "1",
        "-1",
        "42",
        "18446744073709551615",
        "18446744073709551616",
        "-18446744073709551616",
        "123456789012345678901234567890123456789012345678901234567890",
        "-999999999999999999999999999999999999999",
    ];
    for case in &cases {
        let value = BigInt::from_str(case).unwrap();
        assert_eq!(value.to_string(), *case);
    }
}

#[test]
fn decimal_round_trip_random() {
    let mut rng = StdRng::seed_from_u64(0xdec0de);
    for _ in 0..50 {
        let value = BigInt::from(rng.gen::<u128>()) << rng.gen_range(0..100);
        let text = value.to_string();
        assert_eq!(BigInt::from_str(&text).unwrap(), value);
    }
}

#[test]
fn parse_accepts_sign_prefixes() {
    assert_eq!(BigInt::from_str("+42").unwrap(), bigint!(42));
    assert_eq!(BigInt::from_str("-42").unwrap(), bigint!(-42));
    assert_eq!(BigInt::from_str("+42").unwrap().to_string(), "42");
}

#[test]
fn negative_zero_parses_to_canonical_zero() {
    let zero = BigInt::from_str("-0").unwrap();
    assert_eq!(zero, BigInt::zero());
    assert_eq!(zero.sign(), Sign::Positive);
    assert_eq!(zero.to_string(), "0");
    assert_eq!(BigInt::from_str("-000").unwrap(), BigInt::zero());
}

#[test]
fn parse_errors_carry_position() {
    let err = BigInt::from_str("").unwrap_err();
    assert_eq!(err.code(), &ErrorCode::EmptyInput);
    assert_eq!(err.position(), 0);
    assert_eq!(err.classify(), Category::Parse);

    let err = BigInt::from_str("-").unwrap_err();
    assert_eq!(err.code(), &ErrorCode::EmptyInput);
    assert_eq!(err.position(), 1);

    let err = BigInt::from_str("12x34").unwrap_err();
    assert_eq!(err.code(), &ErrorCode::InvalidDigit('x'));
    assert_eq!(err.position(), 2);
    assert!(err.is_parse());
    assert_eq!(
        err.to_string(),
        "invalid digit `x` for the requested radix at position 2"
    );

    // Binary digits outside {0, 1} are rejected in radix 2.
    let err = BigInt::from_str_radix("10102", 2).unwrap_err();
    assert_eq!(err.code(), &ErrorCode::InvalidDigit('2'));
    assert_eq!(err.position(), 4);
}

#[test]
fn unsupported_radix_is_an_explicit_gap() {
    let err = BigInt::from_str_radix("ff", 16).unwrap_err();
    assert_eq!(err.code(), &ErrorCode::UnsupportedRadix(16));
    assert_eq!(err.classify(), Category::Unsupported);
    assert!(err.is_unsupported());

    assert!(BigInt::from_str_radix("777", 8).is_err());
}

#[test]
fn binary_round_trip() {
    assert_eq!(bigint!(10).to_string_radix(2), "1010");
    assert_eq!(bigint!(-10).to_string_radix(2), "-1010");
    assert_eq!(bigint!(0).to_string_radix(2), "0");

    let mut rng = StdRng::seed_from_u64(0xb1);
    for _ in 0..50 {
        let value = BigInt::from(rng.gen::<u128>()) << rng.gen_range(0..100);
        let text = value.to_string_radix(2);
        assert_eq!(BigInt::from_str_radix(&text, 2).unwrap(), value);
    }
}

#[test]
fn binary_formatting() {
    assert_eq!(format!("{:b}", bigint!(5)), "101");
    assert_eq!(format!("{:#b}", bigint!(5)), "0b101");
    assert_eq!(format!("{:b}", bigint!(-5)), "-101");
    assert_eq!(format!("{:b}", bigint!(0)), "0");
    assert_eq!(
        format!("{:b}", BigInt::from(1u128 << 64)),
        format!("1{}", "0".repeat(64))
    );
}

#[test]
fn other_radices_fall_back_to_decimal() {
    // Documented quirk: formatting in an unimplemented radix renders
    // decimal rather than failing.
    let value = bigint!(-123456);
    assert_eq!(value.to_string_radix(7), value.to_string());
    assert_eq!(value.to_string_radix(16), "-123456");
    assert_eq!(value.to_string_radix(10), "-123456");
}

#[test]
fn display_respects_format_flags() {
    assert_eq!(format!("{:>8}", bigint!(-42)), "     -42");
    assert_eq!(format!("{:08}", bigint!(-42)), "-0000042");
    assert_eq!(format!("{}", bigint!(-42)), "-42");
}

#[test]
fn debug_renders_the_value() {
    assert_eq!(format!("{:?}", bigint!(-5)), "BigInt(-5)");
    assert_eq!(format!("{:?}", bigint!(0)), "BigInt(0)");
}

#[test]
fn narrowing_guard_and_cast() {
    let small = bigint!(42);
    assert!(small.fits_in_word());
    assert_eq!(small.as_word(), 42);

    let wide = BigInt::from(1u128 << 64);
    assert!(!wide.fits_in_word());
    // The unchecked cast reads only the least significant word.
    assert_eq!(wide.as_word(), 0);

    // The sign is out of band: the cast sees only the magnitude.
    assert_eq!(bigint!(-42).as_word(), 42);
}

#[test]
fn checked_narrowing() {
    assert_eq!(u64::try_from(&bigint!(42)).unwrap(), 42);
    assert_eq!(u64::try_from(&BigInt::from(u64::MAX)).unwrap(), u64::MAX);

    let err = u64::try_from(&BigInt::from(1u128 << 64)).unwrap_err();
    assert_eq!(err.code(), &ErrorCode::NarrowingOverflow);
    assert!(err.is_conversion());
    assert!(u64::try_from(&bigint!(-1)).is_err());

    assert_eq!(i64::try_from(&bigint!(-1)).unwrap(), -1);
    assert_eq!(i64::try_from(&BigInt::from(i64::MIN)).unwrap(), i64::MIN);
    assert_eq!(i64::try_from(&BigInt::from(i64::MAX)).unwrap(), i64::MAX);
    assert!(i64::try_from(&BigInt::from(u64::MAX)).is_err());
    assert!(i64::try_from(&(-BigInt::from(1u128 << 63) - bigint!(1))).is_err());
}

#[test]
fn primitive_conversions_round_trip() {
    assert_eq!(BigInt::from(0u8), bigint!(0));
    assert_eq!(BigInt::from(-128i8), bigint!(-128));
    assert_eq!(BigInt::from(u128::MAX).to_string(), u128::MAX.to_string());
    assert_eq!(BigInt::from(i128::MIN).to_string(), i128::MIN.to_string());
    assert_eq!(BigInt::from(1u64 << 63), bigint!(1) << 63);
    assert_eq!(BigInt::from_word(Word::MAX).to_string(), Word::MAX.to_string());
}

#[test]
fn macro_literals() {
    assert_eq!(bigint!(1_000_000), bigint!(1000000));
    assert_eq!(bigint!(0b1111_0000), bigint!(240));
    assert_eq!(bigint!(-0b101), bigint!(-5));
    assert_eq!(
        bigint!("340282366920938463463374607431768211456"),
        BigInt::from(u128::MAX) + bigint!(1)
    );
    assert_eq!(bigint!("-17"), bigint!(-17));
}
