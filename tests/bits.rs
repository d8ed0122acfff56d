use bigint::{bigint, BigInt, Sign, Word};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn left_shift_grows_the_value() {
    let shifted = bigint!(1) << 64;
    assert_eq!(shifted, BigInt::from(1u128 << 64));
    assert!(!shifted.fits_in_word());
    assert!(shifted.bit(64));

    assert_eq!(bigint!(5) << 1, bigint!(10));
    assert_eq!(bigint!(5) << 0, bigint!(5));
    assert_eq!(bigint!(0) << 1000, bigint!(0));
}

#[test]
fn shift_equals_multiplication_by_power_of_two() {
    let mut rng = StdRng::seed_from_u64(0xb175);
    for _ in 0..50 {
        let a = BigInt::from(rng.gen::<u128>());
        let n = rng.gen_range(0..200);
        assert_eq!(&a << n, &a * (bigint!(1) << n));
        assert_eq!(a.expand_shl(n), &a << n);
    }
}

#[test]
fn truncating_shift_discards_high_bits() {
    // One word wide: shifting by the word width zeroes the value...
    let one = BigInt::from_word(1);
    assert_eq!(one.truncating_shl(Word::BITS as usize), bigint!(0));
    // ...where the expanding shift would keep it.
    assert_ne!(one.expand_shl(Word::BITS as usize), bigint!(0));

    // Within the width the two agree.
    assert_eq!(bigint!(5).truncating_shl(1), bigint!(10));
    assert_eq!(bigint!(-5).truncating_shl(1), bigint!(-10));

    // The top bit falls off rather than carrying out.
    let high = BigInt::from_word((1 as Word) << (Word::BITS - 1));
    assert_eq!(high.truncating_shl(1), bigint!(0));
    assert_eq!(high.expand_shl(1), BigInt::from_word(1) << (Word::BITS as usize));
}

#[test]
fn right_shift_discards_low_bits() {
    assert_eq!((bigint!(1) << 64) >> 64, bigint!(1));
    assert_eq!(bigint!(5) >> 1, bigint!(2));
    assert_eq!(bigint!(5) >> 0, bigint!(5));
    assert_eq!(bigint!(5) >> 200, bigint!(0));
    assert_eq!(bigint!(-8) >> 2, bigint!(-2));

    // Shifting everything out leaves canonical zero.
    let gone = bigint!(-1) >> 1;
    assert_eq!(gone, bigint!(0));
    assert_eq!(gone.sign(), Sign::Positive);
}

#[test]
fn shift_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x5417);
    for _ in 0..50 {
        let a = BigInt::from(rng.gen::<u128>());
        let n = rng.gen_range(0..200);
        assert_eq!((&a << n) >> n, a);
    }
}

#[test]
fn de_morgan_on_equal_widths() {
    // The complement is width-dependent, so the laws are exercised on
    // operands of matching word count.
    let pairs = [
        (
            BigInt::from(0xFF00FF00FF00FF00u64),
            BigInt::from(0x0F0F0F0F0F0F0F0Fu64),
        ),
        (
            BigInt::from(0xDEADBEEFDEADBEEFu64) << 64 | BigInt::from(0x1234567812345678u64),
            BigInt::from(0xCAFEBABECAFEBABEu64) << 64 | BigInt::from(0x8765432187654321u64),
        ),
    ];
    for (a, b) in &pairs {
        assert_eq!(!(a & b), !a | !b);
        assert_eq!(!(a | b), !a & !b);
    }
}

#[test]
fn bitwise_identities() {
    let a = BigInt::from(0xF0F0F0F0F0F0F0F0u64);
    assert_eq!(&a & &a, a);
    assert_eq!(&a | &a, a);
    assert_eq!(&a ^ &a, bigint!(0));
    assert_eq!((&a ^ &a).sign(), Sign::Positive);

    // a | !a sets every bit of the operand's current width.
    assert_eq!(&a | &!a.clone(), BigInt::from(u64::MAX));
}

#[test]
fn bitwise_zero_extends_the_shorter_operand() {
    let long = BigInt::from(1u128 << 64) + bigint!(0b1100);
    let short = bigint!(0b1010);
    assert_eq!(&long & &short, bigint!(0b1000));
    assert_eq!(&long | &short, BigInt::from(1u128 << 64) + bigint!(0b1110));
    assert_eq!(&long ^ &short, BigInt::from(1u128 << 64) + bigint!(0b0110));
}

#[test]
fn bitwise_sign_follows_the_product_rule() {
    assert_eq!(bigint!(-6) & bigint!(3), bigint!(-2));
    assert_eq!(bigint!(-6) | bigint!(3), bigint!(-7));
    assert_eq!(bigint!(-6) ^ bigint!(3), bigint!(-5));
    assert_eq!(bigint!(-6) & bigint!(-3), bigint!(2));

    // A zero result is canonical zero even when the signs differ.
    assert_eq!((bigint!(-4) & bigint!(3)).sign(), Sign::Positive);
}

#[test]
fn complement_is_magnitude_wide() {
    assert_eq!(!bigint!(0), BigInt::from_word(Word::MAX));
    assert_eq!(!BigInt::from_word(Word::MAX), bigint!(0));
    assert_eq!((!BigInt::from_word(Word::MAX)).sign(), Sign::Positive);

    // The sign rides along unchanged on a non-zero result.
    let x = -BigInt::from_word(1);
    assert_eq!(!x, -BigInt::from_word(Word::MAX - 1));
}

#[test]
fn compound_bit_assignments() {
    let mut x = bigint!(0b1100);
    x &= bigint!(0b1010);
    assert_eq!(x, bigint!(0b1000));
    x |= bigint!(0b0011);
    assert_eq!(x, bigint!(0b1011));
    x ^= bigint!(0b0001);
    assert_eq!(x, bigint!(0b1010));
    x <<= 4;
    assert_eq!(x, bigint!(0b10100000));
    x >>= 5;
    assert_eq!(x, bigint!(0b101));
}
