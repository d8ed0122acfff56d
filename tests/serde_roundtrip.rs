#![cfg(feature = "serde")]

use bigint::{bigint, BigInt};

#[test]
fn serializes_as_decimal_string() {
    assert_eq!(serde_json::to_string(&bigint!(42)).unwrap(), "\"42\"");
    assert_eq!(serde_json::to_string(&bigint!(-7)).unwrap(), "\"-7\"");
    assert_eq!(
        serde_json::to_string(&bigint!("123456789012345678901234567890")).unwrap(),
        "\"123456789012345678901234567890\""
    );
}

#[test]
fn deserializes_from_string() {
    let value: BigInt =
        serde_json::from_str("\"-123456789012345678901234567890\"").unwrap();
    assert_eq!(value, bigint!("-123456789012345678901234567890"));
}

#[test]
fn deserializes_from_native_integers() {
    let value: BigInt = serde_json::from_str("42").unwrap();
    assert_eq!(value, bigint!(42));

    let value: BigInt = serde_json::from_str("-7").unwrap();
    assert_eq!(value, bigint!(-7));
}

#[test]
fn rejects_non_numeric_input() {
    assert!(serde_json::from_str::<BigInt>("\"12x\"").is_err());
    assert!(serde_json::from_str::<BigInt>("true").is_err());
    assert!(serde_json::from_str::<BigInt>("[1, 2]").is_err());
}

#[test]
fn round_trips_through_serde() {
    let original = bigint!("-99999999999999999999999999999999999999999999");
    let encoded = serde_json::to_string(&original).unwrap();
    let decoded: BigInt = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, original);
}
