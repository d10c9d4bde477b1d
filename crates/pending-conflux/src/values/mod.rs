//! Decoding of JSON-RPC quantities, which Conflux transmits as `0x` prefixed hex strings.

use serde::{Deserialize, Deserializer};
use serde_with::DeserializeAs;

use crate::Error;

/// Strip the mandatory `0x` prefix of a quantity, returning the hex digits
pub fn hex_digits(quantity: &str) -> Result<&str, Error> {
    let digits = quantity
        .strip_prefix("0x")
        .or_else(|| quantity.strip_prefix("0X"))
        .ok_or_else(|| Error::MalformedResponse(format!("quantity {} is not 0x prefixed", quantity)))?;

    if digits.is_empty() {
        return Err(Error::MalformedResponse(format!("quantity {} has no digits", quantity)));
    }

    Ok(digits)
}

/// Decode a quantity that fits on 64 bits
pub fn decode_quantity(quantity: &str) -> Result<u64, Error> {
    let digits = hex_digits(quantity)?;

    u64::from_str_radix(digits, 16).map_err(|e| Error::MalformedResponse(format!("invalid quantity {}: {}", quantity, e)))
}

/// `serde_with` adapter decoding 64 bits quantities
/// Example
/// ```rust
/// use serde::Deserialize;
/// use serde_with::serde_as;
/// use pending_conflux::values::HexQuantity;
///
/// #[serde_as]
/// #[derive(Deserialize)]
/// struct Account {
///     #[serde_as(as = "HexQuantity")]
///     nonce: u64,
/// }
/// ```
pub struct HexQuantity;

impl<'de> DeserializeAs<'de, u64> for HexQuantity {
    fn deserialize_as<D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        decode_quantity(&value).map_err(serde::de::Error::custom)
    }
}
