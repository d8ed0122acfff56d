//! Serde support, behind the `serde` feature.
//!
//! Values serialize as their decimal string rendering so that arbitrary
//! magnitudes survive formats whose native integers are bounded.
//! Deserialization accepts either a string or a native integer.

use super::BigInt;
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigIntVisitor)
    }
}

struct BigIntVisitor;

impl<'de> Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a decimal string")
    }

    fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        BigInt::from_str(value).map_err(de::Error::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }
}
